//! # Query Filters
//!
//! Filters narrow a list query. Every field is optional and its zero value
//! (`""` or `0`) means "no constraint". Like identifiers, each tier embeds
//! the full tier below and serializes flat.
//!
//! The `state` string is passed through untouched. The known vocabularies
//! below are exported for help text and diagnostics; an unknown state is
//! left for the node to reject or match nothing.
//!
//! Note that `gseq` and `oseq` default to `1`, so a consumer cannot tell
//! "no constraint" apart from "sequence 1".

use serde::Serialize;

use crate::address::OptionalAddress;

/// States a deployment can be listed by.
pub const DEPLOYMENT_STATES: &[&str] = &["active", "closed"];

/// States an order can be listed by.
pub const ORDER_STATES: &[&str] = &["open", "matched", "closed"];

/// States a bid can be listed by.
pub const BID_STATES: &[&str] = &["open", "matched", "lost", "closed"];

/// States a lease can be listed by.
pub const LEASE_STATES: &[&str] = &["active", "insufficient_funds", "closed"];

/// Whether `state` is empty or one of `known`.
pub fn is_known_state(state: &str, known: &[&str]) -> bool {
    state.is_empty() || known.contains(&state)
}

/// Deployment list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DeploymentFilters {
    owner: String,
    state: String,
    dseq: u64,
}

impl DeploymentFilters {
    /// Build a deployment filter. No field is validated.
    pub fn new(owner: impl Into<String>, state: impl Into<String>, dseq: u64) -> Self {
        Self {
            owner: owner.into(),
            state: state.into(),
            dseq,
        }
    }

    /// Owner filter; empty when unset.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// State filter; empty when unset.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Deployment sequence filter; zero when unset.
    pub fn dseq(&self) -> u64 {
        self.dseq
    }
}

/// Order list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct OrderFilters {
    #[serde(flatten)]
    deployment: DeploymentFilters,
    gseq: u32,
    oseq: u32,
}

impl OrderFilters {
    /// Extend a deployment filter with group and order sequences.
    pub fn new(deployment: DeploymentFilters, gseq: u32, oseq: u32) -> Self {
        Self {
            deployment,
            gseq,
            oseq,
        }
    }

    /// The deployment-level part of this filter.
    pub fn deployment_filters(&self) -> &DeploymentFilters {
        &self.deployment
    }

    pub fn owner(&self) -> &str {
        self.deployment.owner()
    }

    pub fn state(&self) -> &str {
        self.deployment.state()
    }

    pub fn dseq(&self) -> u64 {
        self.deployment.dseq()
    }

    pub fn gseq(&self) -> u32 {
        self.gseq
    }

    pub fn oseq(&self) -> u32 {
        self.oseq
    }
}

/// Bid list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BidFilters {
    #[serde(flatten)]
    order: OrderFilters,
    provider: OptionalAddress,
}

impl BidFilters {
    /// Extend an order filter with a provider filter.
    pub fn new(order: OrderFilters, provider: OptionalAddress) -> Self {
        Self { order, provider }
    }

    /// The order-level part of this filter.
    pub fn order_filters(&self) -> &OrderFilters {
        &self.order
    }

    pub fn owner(&self) -> &str {
        self.order.owner()
    }

    pub fn state(&self) -> &str {
        self.order.state()
    }

    pub fn dseq(&self) -> u64 {
        self.order.dseq()
    }

    pub fn gseq(&self) -> u32 {
        self.order.gseq()
    }

    pub fn oseq(&self) -> u32 {
        self.order.oseq()
    }

    /// Provider filter; unset when empty.
    pub fn provider(&self) -> &OptionalAddress {
        &self.provider
    }
}

/// Lease list filter. Same layout as [`BidFilters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct LeaseFilters(BidFilters);

impl LeaseFilters {
    /// The bid filter this lease filter mirrors.
    pub fn bid_filters(&self) -> &BidFilters {
        &self.0
    }
}

impl From<BidFilters> for LeaseFilters {
    fn from(filters: BidFilters) -> Self {
        Self(filters)
    }
}

impl From<LeaseFilters> for BidFilters {
    fn from(filters: LeaseFilters) -> Self {
        filters.0
    }
}

impl std::ops::Deref for LeaseFilters {
    type Target = BidFilters;

    fn deref(&self) -> &BidFilters {
        &self.0
    }
}
