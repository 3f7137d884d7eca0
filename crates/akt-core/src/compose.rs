//! # Identifier and Filter Composition
//!
//! Builds typed identifiers and filters from a [`MarketFlags`] value. Each
//! composer reuses the one for the tier below, so range and address checks
//! live in exactly one place:
//!
//! ```text
//! deployment_id ─▶ group_id ─▶ order_id ─▶ bid_id ─▶ lease_id
//! deployment_filters ─▶ order_filters ─▶ bid_filters ─▶ lease_filters
//! ```
//!
//! Composition short-circuits on the first failure and never returns a
//! partially built value.
//!
//! The identifier path requires a provider that decodes; the filter path
//! accepts an empty provider as "no filter". `gseq`/`oseq` are range checked
//! on both paths, so an oversized filter value is a hard error rather than
//! "no constraint".

use crate::address::{AddressDecoder, OptionalAddress};
use crate::error::ValidationError;
use crate::filter::{BidFilters, DeploymentFilters, LeaseFilters, OrderFilters};
use crate::flags::MarketFlags;
use crate::id::{BidId, DeploymentId, GroupId, LeaseId, OrderId};
use crate::sequence::{narrow_sequence, SequenceField};

impl MarketFlags {
    /// Validated `--gseq`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::SequenceOutOfRange`] if above `u32::MAX`.
    pub fn group_sequence(&self) -> Result<u32, ValidationError> {
        narrow_sequence(SequenceField::Group, self.gseq)
    }

    /// Validated `--oseq`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::SequenceOutOfRange`] if above `u32::MAX`.
    pub fn order_sequence(&self) -> Result<u32, ValidationError> {
        narrow_sequence(SequenceField::Order, self.oseq)
    }

    /// Deployment identifier, taken directly from `--owner` and `--dseq`.
    pub fn deployment_id(&self) -> DeploymentId {
        DeploymentId::new(self.owner.clone(), self.dseq)
    }

    /// Group identifier: deployment identifier plus validated `--gseq`.
    ///
    /// # Errors
    ///
    /// Fails if `--gseq` is out of range.
    pub fn group_id(&self) -> Result<GroupId, ValidationError> {
        let deployment = self.deployment_id();
        let gseq = self.group_sequence()?;
        Ok(GroupId::new(deployment, gseq))
    }

    /// Order identifier: group identifier plus validated `--oseq`.
    ///
    /// # Errors
    ///
    /// Fails if `--gseq` or `--oseq` is out of range.
    pub fn order_id(&self) -> Result<OrderId, ValidationError> {
        let group = self.group_id()?;
        let oseq = self.order_sequence()?;
        Ok(OrderId::new(group, oseq))
    }

    /// Bid identifier: order identifier plus a required, decoded `--provider`.
    ///
    /// # Errors
    ///
    /// Fails if a sequence is out of range, or if the provider is empty or
    /// does not decode.
    pub fn bid_id<D>(&self, decoder: &D) -> Result<BidId, ValidationError>
    where
        D: AddressDecoder + ?Sized,
    {
        let order = self.order_id()?;
        let provider = decoder.decode(&self.provider)?;
        Ok(BidId::new(order, provider))
    }

    /// Lease identifier, built exactly like [`bid_id`](Self::bid_id).
    ///
    /// # Errors
    ///
    /// Same as [`bid_id`](Self::bid_id).
    pub fn lease_id<D>(&self, decoder: &D) -> Result<LeaseId, ValidationError>
    where
        D: AddressDecoder + ?Sized,
    {
        self.bid_id(decoder).map(LeaseId::from)
    }

    /// Deployment filter. Owner and state are passed through unvalidated.
    pub fn deployment_filters(&self) -> DeploymentFilters {
        DeploymentFilters::new(self.owner.clone(), self.state.clone(), self.dseq)
    }

    /// Order filter: deployment filter plus validated `--gseq` and `--oseq`.
    ///
    /// # Errors
    ///
    /// Fails if `--gseq` or `--oseq` is out of range.
    pub fn order_filters(&self) -> Result<OrderFilters, ValidationError> {
        let deployment = self.deployment_filters();
        let gseq = self.group_sequence()?;
        let oseq = self.order_sequence()?;
        Ok(OrderFilters::new(deployment, gseq, oseq))
    }

    /// Bid filter: order filter plus an optional `--provider`.
    ///
    /// # Errors
    ///
    /// Fails if a sequence is out of range or a non-empty provider does not
    /// decode.
    pub fn bid_filters<D>(&self, decoder: &D) -> Result<BidFilters, ValidationError>
    where
        D: AddressDecoder + ?Sized,
    {
        let order = self.order_filters()?;
        let provider = OptionalAddress::parse(&self.provider, decoder)?;
        Ok(BidFilters::new(order, provider))
    }

    /// Lease filter: the bid filter, field for field.
    ///
    /// # Errors
    ///
    /// Same as [`bid_filters`](Self::bid_filters).
    pub fn lease_filters<D>(&self, decoder: &D) -> Result<LeaseFilters, ValidationError>
    where
        D: AddressDecoder + ?Sized,
    {
        self.bid_filters(decoder).map(LeaseFilters::from)
    }
}
