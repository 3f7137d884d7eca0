//! # Error Types: Validation Failures
//!
//! Every composer in this crate returns either a fully valid value or a
//! [`ValidationError`]. Errors propagate unchanged up the identifier chain:
//! a bad `gseq` surfaces identically whether a [`GroupId`](crate::GroupId)
//! or an [`OrderId`](crate::OrderId) was requested.
//!
//! Missing required flags are not represented here. They are rejected by
//! the command-line parser before any composer runs.

use thiserror::Error;

use crate::sequence::SequenceField;

/// Top-level validation error for identifier, filter and pagination
/// composition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A sequence number flag exceeds the `u32` domain.
    #[error("{field} out of uint32 range: {value}")]
    SequenceOutOfRange {
        /// Which sequence flag overflowed.
        field: SequenceField,
        /// The raw value as supplied.
        value: u64,
    },

    /// An address string failed to decode as an account address.
    #[error("invalid account address {value:?}: {reason}")]
    InvalidAddress {
        /// The rejected input.
        value: String,
        /// Why decoding failed.
        #[source]
        reason: AddressError,
    },

    /// The configured bech32 human-readable prefix is not usable.
    #[error("invalid bech32 account prefix {0:?}")]
    InvalidPrefix(String),

    /// `--page` and `--offset` were both set.
    #[error("page and offset cannot be used together")]
    PageAndOffset,

    /// `(page - 1) * limit` does not fit in a `u64`.
    #[error("page {page} with limit {limit} overflows the offset")]
    PageOverflow {
        /// Requested page.
        page: u64,
        /// Requested page size.
        limit: u64,
    },
}

/// Reason an account address was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Empty or whitespace-only input where an address is required.
    #[error("empty address string is not allowed")]
    Empty,

    /// The string is not valid bech32 (bad charset, mixed case, checksum).
    #[error("decoding bech32 failed: {0}")]
    Decode(String),

    /// Valid bech32, but for another chain or key type.
    #[error("invalid Bech32 prefix; expected {expected}, got {found}")]
    PrefixMismatch {
        /// Prefix this decoder accepts.
        expected: String,
        /// Prefix found in the input.
        found: String,
    },

    /// Checksum is valid but the data part carries surplus or non-zero
    /// padding bits, so it is not the encoding of any byte string.
    #[error("decoding bech32 failed: invalid padding")]
    InvalidPadding,

    /// The data part decoded to zero bytes.
    #[error("addresses cannot be empty")]
    EmptyPayload,

    /// The data part is longer than any account address can be.
    #[error("address max length is {max}, got {len}")]
    TooLong {
        /// Decoded length in bytes.
        len: usize,
        /// Maximum accepted length in bytes.
        max: usize,
    },
}
