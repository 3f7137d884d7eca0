//! # akt-core: Identifier and Filter Types for the akt Client
//!
//! Marketplace resources are addressed hierarchically:
//!
//! ```text
//! Deployment(owner, dseq)
//!   └─ Group(gseq)
//!        └─ Order(oseq)
//!             └─ Bid(provider) ≡ Lease
//! ```
//!
//! This crate turns the flat flag values a command receives into those
//! nested identifiers, and into the optional-field filters used by list
//! queries.
//!
//! ## Key Design Principles
//!
//! 1. **Per-invocation input.** Flag values live in a [`MarketFlags`] value
//!    owned by the caller. There is no process-wide option state.
//!
//! 2. **Checked narrowing.** Sequence flags are `u64` on the command line and
//!    `u32` on chain. Overflow is a [`ValidationError`], never truncation.
//!
//! 3. **Required vs optional addresses are distinct types.** A [`BidId`]
//!    holds a decoded [`AccAddress`]; a [`BidFilters`] holds an
//!    [`OptionalAddress`] that may be empty.
//!
//! 4. **Each tier embeds the one below.** Lease identifiers and filters are
//!    transparent wrappers over their bid counterparts.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `akt-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod address;
pub mod compose;
pub mod error;
pub mod filter;
pub mod flags;
pub mod id;
pub mod pagination;
pub mod sequence;

pub use address::{
    AccAddress, AddressDecoder, Bech32Codec, OptionalAddress, DEFAULT_ACCOUNT_PREFIX,
};
pub use error::{AddressError, ValidationError};
pub use filter::{
    is_known_state, BidFilters, DeploymentFilters, LeaseFilters, OrderFilters, BID_STATES,
    DEPLOYMENT_STATES, LEASE_STATES, ORDER_STATES,
};
pub use flags::MarketFlags;
pub use id::{BidId, DeploymentId, GroupId, LeaseId, OrderId};
pub use pagination::{PageRequest, Pagination};
pub use sequence::{narrow_sequence, SequenceField};
