//! # Market Flag Values
//!
//! [`MarketFlags`] holds the raw identifier and filter flag values of a single
//! command invocation. The command-line layer builds one from its parsed
//! arguments and hands it by reference to the composers in
//! [`compose`](crate::compose). Nothing here is global; two invocations never
//! share a value.
//!
//! Values are kept exactly as parsed. Range and address checks happen when a
//! composer asks for a typed identifier or filter.

use crate::sequence::{
    DEFAULT_DEPLOYMENT_SEQUENCE, DEFAULT_GROUP_SEQUENCE, DEFAULT_ORDER_SEQUENCE,
};

/// Raw identifier and filter flags for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketFlags {
    /// `--owner`; empty when not given.
    pub owner: String,
    /// `--state`; empty when not given.
    pub state: String,
    /// `--dseq`
    pub dseq: u64,
    /// `--gseq`
    pub gseq: u64,
    /// `--oseq`
    pub oseq: u64,
    /// `--provider`; empty when not given.
    pub provider: String,
}

impl Default for MarketFlags {
    fn default() -> Self {
        Self {
            owner: String::new(),
            state: String::new(),
            dseq: DEFAULT_DEPLOYMENT_SEQUENCE,
            gseq: DEFAULT_GROUP_SEQUENCE,
            oseq: DEFAULT_ORDER_SEQUENCE,
            provider: String::new(),
        }
    }
}

impl MarketFlags {
    /// Flags addressing a deployment, other values at their defaults.
    pub fn for_deployment(owner: impl Into<String>, dseq: u64) -> Self {
        Self {
            owner: owner.into(),
            dseq,
            ..Self::default()
        }
    }

    /// Set `--gseq`.
    pub fn with_gseq(mut self, gseq: u64) -> Self {
        self.gseq = gseq;
        self
    }

    /// Set `--oseq`.
    pub fn with_oseq(mut self, oseq: u64) -> Self {
        self.oseq = oseq;
        self
    }

    /// Set `--provider`.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Set `--state`.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }
}
