//! # Pagination
//!
//! List queries accept either a page number or a raw offset, never both.
//! [`Pagination`] carries the flag values; [`Pagination::page_request`]
//! resolves them into the [`PageRequest`] sent with the query.

use serde::Serialize;

use crate::error::ValidationError;

/// Default `--page`.
pub const DEFAULT_PAGE: u64 = 1;

/// Default `--limit`.
pub const DEFAULT_LIMIT: u64 = 100;

/// Pagination flag values as parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_key: String,
    pub offset: u64,
    pub limit: u64,
    pub count_total: bool,
    pub reverse: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_key: String::new(),
            offset: 0,
            limit: DEFAULT_LIMIT,
            count_total: false,
            reverse: false,
        }
    }
}

/// Resolved page request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub key: String,
    pub offset: u64,
    pub limit: u64,
    pub count_total: bool,
    pub reverse: bool,
}

impl Pagination {
    /// Resolve the flags into a page request.
    ///
    /// A page above 1 is turned into `offset = (page - 1) * limit`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::PageAndOffset`] if `page > 1` and `offset > 0`.
    /// - [`ValidationError::PageOverflow`] if the computed offset overflows.
    pub fn page_request(&self) -> Result<PageRequest, ValidationError> {
        if self.page > 1 && self.offset > 0 {
            return Err(ValidationError::PageAndOffset);
        }

        let offset = if self.page > 1 {
            (self.page - 1)
                .checked_mul(self.limit)
                .ok_or(ValidationError::PageOverflow {
                    page: self.page,
                    limit: self.limit,
                })?
        } else {
            self.offset
        };

        Ok(PageRequest {
            key: self.page_key.clone(),
            offset,
            limit: self.limit,
            count_total: self.count_total,
            reverse: self.reverse,
        })
    }
}
