//! # Query Subcommand
//!
//! Deployment and market queries. Each handler turns its parsed flags into a
//! [`MarketFlags`] value, composes the identifier or filter it needs, and
//! renders the resulting request. Any composition failure aborts the command
//! before anything is printed.
//!
//! ## Subcommands
//!
//! - `akt query deployment get|list`
//! - `akt query deployment group get`
//! - `akt query market order get|list`
//! - `akt query market bid get|list`
//! - `akt query market lease get|list`

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use akt_core::{
    is_known_state, AddressDecoder, MarketFlags, Pagination, BID_STATES, DEPLOYMENT_STATES,
    LEASE_STATES, ORDER_STATES,
};

use crate::args::{
    BidFilterArgs, BidIdArgs, DeploymentFilterArgs, DeploymentIdArgs, GroupIdArgs,
    LeaseFilterArgs, OrderFilterArgs, OrderIdArgs, PaginationArgs, QueryArgs,
};
use crate::output::{render, GetRequest, ListRequest, QueryRequest};

/// gRPC routes of the queries this client composes.
pub mod routes {
    pub const DEPLOYMENT: &str = "/akash.deployment.v1beta1.Query/Deployment";
    pub const DEPLOYMENTS: &str = "/akash.deployment.v1beta1.Query/Deployments";
    pub const GROUP: &str = "/akash.deployment.v1beta1.Query/Group";
    pub const ORDER: &str = "/akash.market.v1beta1.Query/Order";
    pub const ORDERS: &str = "/akash.market.v1beta1.Query/Orders";
    pub const BID: &str = "/akash.market.v1beta1.Query/Bid";
    pub const BIDS: &str = "/akash.market.v1beta1.Query/Bids";
    pub const LEASE: &str = "/akash.market.v1beta1.Query/Lease";
    pub const LEASES: &str = "/akash.market.v1beta1.Query/Leases";
}

/// Arguments for the `akt query` subcommand.
#[derive(Args, Debug)]
pub struct QueryCmdArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

/// Query modules.
#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Deployment query commands.
    Deployment {
        #[command(subcommand)]
        command: DeploymentQuery,
    },
    /// Market query commands.
    Market {
        #[command(subcommand)]
        command: MarketQuery,
    },
}

/// Deployment queries.
#[derive(Subcommand, Debug)]
pub enum DeploymentQuery {
    /// Query deployment.
    Get {
        #[command(flatten)]
        id: DeploymentIdArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Query for all deployments.
    List {
        #[command(flatten)]
        filters: DeploymentFilterArgs,
        #[command(flatten)]
        pagination: PaginationArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Deployment group query commands.
    Group {
        #[command(subcommand)]
        command: GroupQuery,
    },
}

/// Deployment group queries.
#[derive(Subcommand, Debug)]
pub enum GroupQuery {
    /// Query group of deployment.
    Get {
        #[command(flatten)]
        id: GroupIdArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Market queries.
#[derive(Subcommand, Debug)]
pub enum MarketQuery {
    /// Order query commands.
    Order {
        #[command(subcommand)]
        command: OrderQuery,
    },
    /// Bid query commands.
    Bid {
        #[command(subcommand)]
        command: BidQuery,
    },
    /// Lease query commands.
    Lease {
        #[command(subcommand)]
        command: LeaseQuery,
    },
}

/// Order queries.
#[derive(Subcommand, Debug)]
pub enum OrderQuery {
    /// Query order.
    Get {
        #[command(flatten)]
        id: OrderIdArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Query for all orders.
    List {
        #[command(flatten)]
        filters: OrderFilterArgs,
        #[command(flatten)]
        pagination: PaginationArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Bid queries.
#[derive(Subcommand, Debug)]
pub enum BidQuery {
    /// Query order bid.
    Get {
        #[command(flatten)]
        id: BidIdArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Query for all bids.
    List {
        #[command(flatten)]
        filters: BidFilterArgs,
        #[command(flatten)]
        pagination: PaginationArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Lease queries.
#[derive(Subcommand, Debug)]
pub enum LeaseQuery {
    /// Query lease.
    Get {
        #[command(flatten)]
        id: BidIdArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Query for all leases.
    List {
        #[command(flatten)]
        filters: LeaseFilterArgs,
        #[command(flatten)]
        pagination: PaginationArgs,
        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Execute the query subcommand, printing the rendered request to stdout.
pub fn run_query<D>(args: &QueryCmdArgs, decoder: &D) -> Result<u8>
where
    D: AddressDecoder + ?Sized,
{
    let out = compose_query(&args.command, decoder)?;
    print!("{out}");
    Ok(0)
}

/// Compose and render a query without printing it.
pub fn compose_query<D>(command: &QueryCommand, decoder: &D) -> Result<String>
where
    D: AddressDecoder + ?Sized,
{
    match command {
        QueryCommand::Deployment { command } => deployment_query(command),
        QueryCommand::Market { command } => match command {
            MarketQuery::Order { command } => order_query(command),
            MarketQuery::Bid { command } => bid_query(command, decoder),
            MarketQuery::Lease { command } => lease_query(command, decoder),
        },
    }
}

fn deployment_query(command: &DeploymentQuery) -> Result<String> {
    match command {
        DeploymentQuery::Get { id, query } => {
            let id = MarketFlags::from(id).deployment_id();
            emit_get(query, routes::DEPLOYMENT, id)
        }
        DeploymentQuery::List {
            filters,
            pagination,
            query,
        } => {
            let flags = MarketFlags::from(filters);
            warn_unknown_state(&flags, DEPLOYMENT_STATES, "deployment");
            emit_list(query, routes::DEPLOYMENTS, flags.deployment_filters(), pagination)
        }
        DeploymentQuery::Group {
            command: GroupQuery::Get { id, query },
        } => {
            let id = MarketFlags::from(id)
                .group_id()
                .context("failed to build group id from flags")?;
            emit_get(query, routes::GROUP, id)
        }
    }
}

fn order_query(command: &OrderQuery) -> Result<String> {
    match command {
        OrderQuery::Get { id, query } => {
            let id = MarketFlags::from(id)
                .order_id()
                .context("failed to build order id from flags")?;
            emit_get(query, routes::ORDER, id)
        }
        OrderQuery::List {
            filters,
            pagination,
            query,
        } => {
            let flags = MarketFlags::from(filters);
            warn_unknown_state(&flags, ORDER_STATES, "order");
            let filters = flags
                .order_filters()
                .context("failed to build order filters from flags")?;
            emit_list(query, routes::ORDERS, filters, pagination)
        }
    }
}

fn bid_query<D>(command: &BidQuery, decoder: &D) -> Result<String>
where
    D: AddressDecoder + ?Sized,
{
    match command {
        BidQuery::Get { id, query } => {
            let id = MarketFlags::from(id)
                .bid_id(decoder)
                .context("failed to build bid id from flags")?;
            emit_get(query, routes::BID, id)
        }
        BidQuery::List {
            filters,
            pagination,
            query,
        } => {
            let flags = MarketFlags::from(filters);
            warn_unknown_state(&flags, BID_STATES, "bid");
            let filters = flags
                .bid_filters(decoder)
                .context("failed to build bid filters from flags")?;
            emit_list(query, routes::BIDS, filters, pagination)
        }
    }
}

fn lease_query<D>(command: &LeaseQuery, decoder: &D) -> Result<String>
where
    D: AddressDecoder + ?Sized,
{
    match command {
        LeaseQuery::Get { id, query } => {
            let id = MarketFlags::from(id)
                .lease_id(decoder)
                .context("failed to build lease id from flags")?;
            emit_get(query, routes::LEASE, id)
        }
        LeaseQuery::List {
            filters,
            pagination,
            query,
        } => {
            let flags = MarketFlags::from(filters);
            warn_unknown_state(&flags, LEASE_STATES, "lease");
            let filters = flags
                .lease_filters(decoder)
                .context("failed to build lease filters from flags")?;
            emit_list(query, routes::LEASES, filters, pagination)
        }
    }
}

fn emit_get<T: Serialize>(query: &QueryArgs, route: &'static str, id: T) -> Result<String> {
    tracing::debug!(route, chain_id = %query.chain_id, "composed get request");
    render(&QueryRequest::new(query, route, GetRequest { id }), query.output)
}

fn emit_list<T: Serialize>(
    query: &QueryArgs,
    route: &'static str,
    filters: T,
    pagination: &PaginationArgs,
) -> Result<String> {
    let pagination = Pagination::from(pagination)
        .page_request()
        .context("invalid pagination flags")?;
    tracing::debug!(
        route,
        chain_id = %query.chain_id,
        offset = pagination.offset,
        limit = pagination.limit,
        "composed list request"
    );
    let body = ListRequest {
        filters,
        pagination,
    };
    render(&QueryRequest::new(query, route, body), query.output)
}

/// The node decides which states exist; unknown ones are only reported.
fn warn_unknown_state(flags: &MarketFlags, known: &[&str], resource: &str) {
    if !is_known_state(&flags.state, known) {
        tracing::warn!(
            state = %flags.state,
            ?known,
            "unrecognised {resource} state filter, passing it through"
        );
    }
}
