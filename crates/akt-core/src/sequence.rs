//! # Sequence Numbers
//!
//! Sequence numbers arrive from the command line as `u64`. The deployment
//! sequence stays `u64`, but the group and order tiers are `u32` on chain.
//! Narrowing is always checked: a value above `u32::MAX` is a validation
//! failure, never a silent truncation.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default `--dseq` for filters (0 means "no constraint").
pub const DEFAULT_DEPLOYMENT_SEQUENCE: u64 = 0;

/// Default `--gseq`, shared by identifier and filter flags.
pub const DEFAULT_GROUP_SEQUENCE: u64 = 1;

/// Default `--oseq`, shared by identifier and filter flags.
pub const DEFAULT_ORDER_SEQUENCE: u64 = 1;

/// The sequence flag a value came from, used to label range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceField {
    /// `gseq`
    Group,
    /// `oseq`
    Order,
}

impl SequenceField {
    /// The flag name as typed on the command line.
    pub fn flag_name(self) -> &'static str {
        match self {
            Self::Group => "gseq",
            Self::Order => "oseq",
        }
    }
}

impl std::fmt::Display for SequenceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.flag_name())
    }
}

/// Narrow a raw sequence flag to the `u32` domain.
///
/// # Errors
///
/// Returns [`ValidationError::SequenceOutOfRange`] when `raw > u32::MAX`.
pub fn narrow_sequence(field: SequenceField, raw: u64) -> Result<u32, ValidationError> {
    u32::try_from(raw).map_err(|_| ValidationError::SequenceOutOfRange { field, value: raw })
}
