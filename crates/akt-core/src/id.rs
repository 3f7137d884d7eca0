//! # Identifier Chain
//!
//! `DeploymentId → GroupId → OrderId → BidId → LeaseId`. Each tier embeds
//! the complete tier below it plus exactly one new component, so a
//! [`GroupId`] can never exist without its [`DeploymentId`]. On the wire the
//! nesting is flattened: a `BidId` serializes as
//! `{owner, dseq, gseq, oseq, provider}`.
//!
//! [`LeaseId`] shares the exact layout of [`BidId`]. It is a transparent
//! wrapper, not a second field list, and converts losslessly in both
//! directions.

use serde::Serialize;

use crate::address::AccAddress;

/// Identifies a deployment: owner address plus deployment sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeploymentId {
    owner: String,
    dseq: u64,
}

impl DeploymentId {
    /// Build a deployment identifier. The owner is taken as given.
    pub fn new(owner: impl Into<String>, dseq: u64) -> Self {
        Self {
            owner: owner.into(),
            dseq,
        }
    }

    /// Owner account address.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Deployment sequence.
    pub fn dseq(&self) -> u64 {
        self.dseq
    }
}

impl std::fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.dseq)
    }
}

/// Identifies a group within a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GroupId {
    #[serde(flatten)]
    deployment: DeploymentId,
    gseq: u32,
}

impl GroupId {
    /// Extend a deployment identifier with a group sequence.
    pub fn new(deployment: DeploymentId, gseq: u32) -> Self {
        Self { deployment, gseq }
    }

    /// The enclosing deployment.
    pub fn deployment_id(&self) -> &DeploymentId {
        &self.deployment
    }

    /// Owner account address.
    pub fn owner(&self) -> &str {
        self.deployment.owner()
    }

    /// Deployment sequence.
    pub fn dseq(&self) -> u64 {
        self.deployment.dseq()
    }

    /// Group sequence.
    pub fn gseq(&self) -> u32 {
        self.gseq
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.deployment, self.gseq)
    }
}

/// Identifies an order opened for a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrderId {
    #[serde(flatten)]
    group: GroupId,
    oseq: u32,
}

impl OrderId {
    /// Extend a group identifier with an order sequence.
    pub fn new(group: GroupId, oseq: u32) -> Self {
        Self { group, oseq }
    }

    /// The enclosing group.
    pub fn group_id(&self) -> &GroupId {
        &self.group
    }

    /// The enclosing deployment.
    pub fn deployment_id(&self) -> &DeploymentId {
        self.group.deployment_id()
    }

    /// Owner account address.
    pub fn owner(&self) -> &str {
        self.group.owner()
    }

    /// Deployment sequence.
    pub fn dseq(&self) -> u64 {
        self.group.dseq()
    }

    /// Group sequence.
    pub fn gseq(&self) -> u32 {
        self.group.gseq()
    }

    /// Order sequence.
    pub fn oseq(&self) -> u32 {
        self.oseq
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.group, self.oseq)
    }
}

/// Identifies a provider's bid on an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BidId {
    #[serde(flatten)]
    order: OrderId,
    provider: AccAddress,
}

impl BidId {
    /// Extend an order identifier with a decoded provider address.
    pub fn new(order: OrderId, provider: AccAddress) -> Self {
        Self { order, provider }
    }

    /// The enclosing order.
    pub fn order_id(&self) -> &OrderId {
        &self.order
    }

    /// The enclosing group.
    pub fn group_id(&self) -> &GroupId {
        self.order.group_id()
    }

    /// The enclosing deployment.
    pub fn deployment_id(&self) -> &DeploymentId {
        self.order.deployment_id()
    }

    /// Owner account address.
    pub fn owner(&self) -> &str {
        self.order.owner()
    }

    /// Deployment sequence.
    pub fn dseq(&self) -> u64 {
        self.order.dseq()
    }

    /// Group sequence.
    pub fn gseq(&self) -> u32 {
        self.order.gseq()
    }

    /// Order sequence.
    pub fn oseq(&self) -> u32 {
        self.order.oseq()
    }

    /// Provider account address.
    pub fn provider(&self) -> &AccAddress {
        &self.provider
    }
}

impl std::fmt::Display for BidId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.order, self.provider)
    }
}

/// Identifies a lease. Same layout as the [`BidId`] it was won with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct LeaseId(BidId);

impl LeaseId {
    /// The bid this lease was created from.
    pub fn bid_id(&self) -> &BidId {
        &self.0
    }

    /// Unwrap into the bid identifier.
    pub fn into_bid_id(self) -> BidId {
        self.0
    }
}

impl From<BidId> for LeaseId {
    fn from(bid: BidId) -> Self {
        Self(bid)
    }
}

impl From<LeaseId> for BidId {
    fn from(lease: LeaseId) -> Self {
        lease.0
    }
}

impl std::ops::Deref for LeaseId {
    type Target = BidId;

    fn deref(&self) -> &BidId {
        &self.0
    }
}

impl std::fmt::Display for LeaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
