//! # Node Subcommand
//!
//! Placeholder for node interaction. Both `akt node` and `akt node status`
//! display their help and exit successfully.

use anyhow::Result;
use clap::{Args, Command, Subcommand};

use crate::print_help;

/// Arguments for the `akt node` subcommand.
#[derive(Args, Debug)]
pub struct NodeArgs {
    #[command(subcommand)]
    pub command: Option<NodeCommand>,
}

/// Node subcommands.
#[derive(Subcommand, Debug)]
pub enum NodeCommand {
    /// Query information about a node, the default is the current specified node.
    Status,
}

/// Execute the node subcommand.
pub fn run_node(args: &NodeArgs, root: Command) -> Result<u8> {
    match args.command {
        None => print_help(root, &["node"])?,
        Some(NodeCommand::Status) => print_help(root, &["node", "status"])?,
    }
    Ok(0)
}
