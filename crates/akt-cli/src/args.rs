//! # Flag Groups
//!
//! Reusable `clap` argument groups. Each identifier group flattens the group
//! for the tier below, so `bid get` registers exactly the deployment, group
//! and order flags plus `--provider`. Required flags are enforced by clap
//! before any handler runs:
//!
//! - deployment, group and order identifiers require `--owner` and `--dseq`;
//! - bid and lease identifiers also require `--provider`.
//!
//! Filter groups are registered per resource so that the help text names
//! the resource and its states. Every filter flag is optional.
//!
//! Each group converts into the plain values consumed by `akt-core`:
//! [`MarketFlags`] for identifiers and filters, [`Pagination`] for paging.

use clap::{Args, ValueEnum};

use akt_core::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use akt_core::sequence::{
    DEFAULT_DEPLOYMENT_SEQUENCE, DEFAULT_GROUP_SEQUENCE, DEFAULT_ORDER_SEQUENCE,
};
use akt_core::{MarketFlags, Pagination};

/// Default `--node`.
pub const DEFAULT_NODE: &str = "tcp://localhost:26657";

/// Output encoding for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML, the human-readable default.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Flags shared by every query command.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// The network chain ID.
    #[arg(long)]
    pub chain_id: String,

    /// host:port of the Tendermint RPC interface for this chain.
    #[arg(long, default_value = DEFAULT_NODE)]
    pub node: String,

    /// Use a specific height to query state at (this can error if the node is pruning state).
    #[arg(long, default_value_t = 0)]
    pub height: i64,

    /// Output format.
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Flags shared by every list command.
#[derive(Args, Debug, Clone)]
pub struct PaginationArgs {
    /// Pagination page to query for. This sets offset to a multiple of limit.
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    pub page: u64,

    /// Pagination page-key to query for.
    #[arg(long)]
    pub page_key: Option<String>,

    /// Pagination offset to query for.
    #[arg(long, default_value_t = 0)]
    pub offset: u64,

    /// Pagination limit to query for.
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u64,

    /// Count total number of records to query for.
    #[arg(long)]
    pub count_total: bool,

    /// Results are sorted in descending order.
    #[arg(long)]
    pub reverse: bool,
}

impl From<&PaginationArgs> for Pagination {
    fn from(args: &PaginationArgs) -> Self {
        Self {
            page: args.page,
            page_key: args.page_key.clone().unwrap_or_default(),
            offset: args.offset,
            limit: args.limit,
            count_total: args.count_total,
            reverse: args.reverse,
        }
    }
}

// ---------------------------------------------------------------------------
// Identifier flags
// ---------------------------------------------------------------------------

/// `--owner` and `--dseq`, both required.
#[derive(Args, Debug, Clone)]
pub struct DeploymentIdArgs {
    /// Deployment owner.
    #[arg(long)]
    pub owner: String,

    /// Deployment sequence.
    #[arg(long)]
    pub dseq: u64,
}

impl From<&DeploymentIdArgs> for MarketFlags {
    fn from(args: &DeploymentIdArgs) -> Self {
        Self::for_deployment(args.owner.clone(), args.dseq)
    }
}

/// Deployment identifier flags plus `--gseq`.
#[derive(Args, Debug, Clone)]
pub struct GroupIdArgs {
    #[command(flatten)]
    pub deployment: DeploymentIdArgs,

    /// Group sequence.
    #[arg(long, default_value_t = DEFAULT_GROUP_SEQUENCE)]
    pub gseq: u64,
}

impl From<&GroupIdArgs> for MarketFlags {
    fn from(args: &GroupIdArgs) -> Self {
        Self::from(&args.deployment).with_gseq(args.gseq)
    }
}

/// Group identifier flags plus `--oseq`.
#[derive(Args, Debug, Clone)]
pub struct OrderIdArgs {
    #[command(flatten)]
    pub group: GroupIdArgs,

    /// Order sequence.
    #[arg(long, default_value_t = DEFAULT_ORDER_SEQUENCE)]
    pub oseq: u64,
}

impl From<&OrderIdArgs> for MarketFlags {
    fn from(args: &OrderIdArgs) -> Self {
        Self::from(&args.group).with_oseq(args.oseq)
    }
}

/// Order identifier flags plus a required `--provider`. Also used for leases.
#[derive(Args, Debug, Clone)]
pub struct BidIdArgs {
    #[command(flatten)]
    pub order: OrderIdArgs,

    /// Provider.
    #[arg(long)]
    pub provider: String,
}

impl From<&BidIdArgs> for MarketFlags {
    fn from(args: &BidIdArgs) -> Self {
        Self::from(&args.order).with_provider(args.provider.clone())
    }
}

// ---------------------------------------------------------------------------
// Filter flags
// ---------------------------------------------------------------------------

/// Deployment list filters.
#[derive(Args, Debug, Clone)]
pub struct DeploymentFilterArgs {
    /// Deployment owner address to filter.
    #[arg(long)]
    pub owner: Option<String>,

    /// Deployment state to filter (active,closed).
    #[arg(long)]
    pub state: Option<String>,

    /// Deployment sequence to filter.
    #[arg(long, default_value_t = DEFAULT_DEPLOYMENT_SEQUENCE)]
    pub dseq: u64,
}

impl From<&DeploymentFilterArgs> for MarketFlags {
    fn from(args: &DeploymentFilterArgs) -> Self {
        Self {
            owner: args.owner.clone().unwrap_or_default(),
            state: args.state.clone().unwrap_or_default(),
            dseq: args.dseq,
            ..Self::default()
        }
    }
}

/// Order list filters.
#[derive(Args, Debug, Clone)]
pub struct OrderFilterArgs {
    /// Order owner address to filter.
    #[arg(long)]
    pub owner: Option<String>,

    /// Order state to filter (open,matched,closed).
    #[arg(long)]
    pub state: Option<String>,

    /// Deployment sequence to filter.
    #[arg(long, default_value_t = DEFAULT_DEPLOYMENT_SEQUENCE)]
    pub dseq: u64,

    /// Group sequence to filter.
    #[arg(long, default_value_t = DEFAULT_GROUP_SEQUENCE)]
    pub gseq: u64,

    /// Order sequence to filter.
    #[arg(long, default_value_t = DEFAULT_ORDER_SEQUENCE)]
    pub oseq: u64,
}

impl From<&OrderFilterArgs> for MarketFlags {
    fn from(args: &OrderFilterArgs) -> Self {
        Self {
            owner: args.owner.clone().unwrap_or_default(),
            state: args.state.clone().unwrap_or_default(),
            dseq: args.dseq,
            gseq: args.gseq,
            oseq: args.oseq,
            provider: String::new(),
        }
    }
}

/// Bid list filters.
#[derive(Args, Debug, Clone)]
pub struct BidFilterArgs {
    /// Bid owner address to filter.
    #[arg(long)]
    pub owner: Option<String>,

    /// Bid state to filter (open,matched,lost,closed).
    #[arg(long)]
    pub state: Option<String>,

    /// Deployment sequence to filter.
    #[arg(long, default_value_t = DEFAULT_DEPLOYMENT_SEQUENCE)]
    pub dseq: u64,

    /// Group sequence to filter.
    #[arg(long, default_value_t = DEFAULT_GROUP_SEQUENCE)]
    pub gseq: u64,

    /// Order sequence to filter.
    #[arg(long, default_value_t = DEFAULT_ORDER_SEQUENCE)]
    pub oseq: u64,

    /// Bid provider address to filter.
    #[arg(long)]
    pub provider: Option<String>,
}

impl From<&BidFilterArgs> for MarketFlags {
    fn from(args: &BidFilterArgs) -> Self {
        Self {
            owner: args.owner.clone().unwrap_or_default(),
            state: args.state.clone().unwrap_or_default(),
            dseq: args.dseq,
            gseq: args.gseq,
            oseq: args.oseq,
            provider: args.provider.clone().unwrap_or_default(),
        }
    }
}

/// Lease list filters. Same flags as bids, lease vocabulary in the help.
#[derive(Args, Debug, Clone)]
pub struct LeaseFilterArgs {
    /// Lease owner address to filter.
    #[arg(long)]
    pub owner: Option<String>,

    /// Lease state to filter (active,insufficient_funds,closed).
    #[arg(long)]
    pub state: Option<String>,

    /// Deployment sequence to filter.
    #[arg(long, default_value_t = DEFAULT_DEPLOYMENT_SEQUENCE)]
    pub dseq: u64,

    /// Group sequence to filter.
    #[arg(long, default_value_t = DEFAULT_GROUP_SEQUENCE)]
    pub gseq: u64,

    /// Order sequence to filter.
    #[arg(long, default_value_t = DEFAULT_ORDER_SEQUENCE)]
    pub oseq: u64,

    /// Lease provider address to filter.
    #[arg(long)]
    pub provider: Option<String>,
}

impl From<&LeaseFilterArgs> for MarketFlags {
    fn from(args: &LeaseFilterArgs) -> Self {
        Self {
            owner: args.owner.clone().unwrap_or_default(),
            state: args.state.clone().unwrap_or_default(),
            dseq: args.dseq,
            gseq: args.gseq,
            oseq: args.oseq,
            provider: args.provider.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness<T: Args> {
        #[command(flatten)]
        inner: T,
    }

    fn parse<T: Args>(args: &[&str]) -> Result<T, clap::Error> {
        let argv = std::iter::once("test").chain(args.iter().copied());
        Harness::<T>::try_parse_from(argv).map(|h| h.inner)
    }

    #[test]
    fn query_args_defaults() {
        let q: QueryArgs = parse(&["--chain-id", "akashnet-2"]).unwrap();
        assert_eq!(q.chain_id, "akashnet-2");
        assert_eq!(q.node, DEFAULT_NODE);
        assert_eq!(q.height, 0);
        assert_eq!(q.output, OutputFormat::Text);
    }

    #[test]
    fn query_args_require_chain_id() {
        let err = parse::<QueryArgs>(&[]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn query_args_short_output() {
        let q: QueryArgs = parse(&["--chain-id", "x", "-o", "json"]).unwrap();
        assert_eq!(q.output, OutputFormat::Json);
        assert!(parse::<QueryArgs>(&["--chain-id", "x", "-o", "xml"]).is_err());
    }

    #[test]
    fn pagination_defaults() {
        let p: PaginationArgs = parse(&[]).unwrap();
        assert_eq!(Pagination::from(&p), Pagination::default());
    }

    #[test]
    fn pagination_all_flags() {
        let p: PaginationArgs = parse(&[
            "--page",
            "4",
            "--page-key",
            "k",
            "--limit",
            "10",
            "--count-total",
            "--reverse",
        ])
        .unwrap();
        let p = Pagination::from(&p);
        assert_eq!(p.page, 4);
        assert_eq!(p.page_key, "k");
        assert_eq!(p.limit, 10);
        assert!(p.count_total);
        assert!(p.reverse);
    }

    #[test]
    fn deployment_id_requires_owner_and_dseq() {
        assert!(parse::<DeploymentIdArgs>(&["--owner", "o"]).is_err());
        assert!(parse::<DeploymentIdArgs>(&["--dseq", "1"]).is_err());
        let d: DeploymentIdArgs = parse(&["--owner", "o", "--dseq", "1"]).unwrap();
        assert_eq!(MarketFlags::from(&d), MarketFlags::for_deployment("o", 1));
    }

    #[test]
    fn group_and_order_sequences_default_to_one() {
        let o: OrderIdArgs = parse(&["--owner", "o", "--dseq", "9"]).unwrap();
        let flags = MarketFlags::from(&o);
        assert_eq!((flags.dseq, flags.gseq, flags.oseq), (9, 1, 1));
    }

    #[test]
    fn oversized_sequence_parses_and_is_left_for_the_composer() {
        let g: GroupIdArgs =
            parse(&["--owner", "o", "--dseq", "1", "--gseq", "4294967296"]).unwrap();
        let flags = MarketFlags::from(&g);
        assert_eq!(flags.gseq, 4_294_967_296);
        assert!(flags.group_id().is_err());
    }

    #[test]
    fn bid_id_requires_provider() {
        let err = parse::<BidIdArgs>(&["--owner", "o", "--dseq", "1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        let b: BidIdArgs = parse(&["--owner", "o", "--dseq", "1", "--provider", "p"]).unwrap();
        assert_eq!(MarketFlags::from(&b).provider, "p");
    }

    #[test]
    fn filters_are_all_optional() {
        let f: BidFilterArgs = parse(&[]).unwrap();
        assert_eq!(MarketFlags::from(&f), MarketFlags::default());
        let f: LeaseFilterArgs = parse(&[]).unwrap();
        assert_eq!(MarketFlags::from(&f), MarketFlags::default());
        let f: OrderFilterArgs = parse(&[]).unwrap();
        assert_eq!(MarketFlags::from(&f), MarketFlags::default());
        let f: DeploymentFilterArgs = parse(&[]).unwrap();
        assert_eq!(MarketFlags::from(&f), MarketFlags::default());
    }

    #[test]
    fn filter_values_carry_through() {
        let f: LeaseFilterArgs = parse(&[
            "--owner", "o", "--state", "active", "--dseq", "3", "--gseq", "4", "--oseq", "5",
            "--provider", "p",
        ])
        .unwrap();
        let flags = MarketFlags::from(&f);
        assert_eq!(flags.owner, "o");
        assert_eq!(flags.state, "active");
        assert_eq!((flags.dseq, flags.gseq, flags.oseq), (3, 4, 5));
        assert_eq!(flags.provider, "p");
    }

    #[test]
    fn negative_sequence_is_a_parse_error() {
        assert!(parse::<DeploymentIdArgs>(&["--owner", "o", "--dseq", "-1"]).is_err());
    }
}
