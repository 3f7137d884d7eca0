//! # akt CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use akt_cli::config::ClientConfig;
use akt_cli::node::{run_node, NodeArgs};
use akt_cli::project::{run_project, ProjectArgs};
use akt_cli::query::{run_query, QueryCmdArgs};

/// akt marketplace client.
///
/// Composes validated deployment, group, order, bid and lease identifiers
/// and list filters from command-line flags.
#[derive(Parser, Debug)]
#[command(name = "akt", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Querying subcommands.
    Query(QueryCmdArgs),

    /// Interact with and get information about Nodes.
    Node(NodeArgs),

    /// Project management subcommands.
    Project(ProjectArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("akt CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    match cli.command {
        Commands::Query(args) => {
            let config = ClientConfig::load(cli.config.as_deref())?;
            let codec = config.address_codec()?;
            run_query(&args, &codec)
        }
        Commands::Node(args) => run_node(&args, Cli::command()),
        Commands::Project(args) => run_project(&args, Cli::command()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parse_deployment_get() {
        let cli = Cli::try_parse_from([
            "akt", "query", "deployment", "get", "--owner", "o", "--dseq", "1", "--chain-id",
            "testnet",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Query(_)));
    }

    #[test]
    fn cli_parse_missing_required_owner() {
        let err = Cli::try_parse_from([
            "akt", "query", "deployment", "get", "--dseq", "1", "--chain-id", "testnet",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn cli_parse_bid_get_missing_provider() {
        let err = Cli::try_parse_from([
            "akt", "query", "market", "bid", "get", "--owner", "o", "--dseq", "1",
            "--chain-id", "testnet",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn cli_parse_node_without_subcommand() {
        let cli = Cli::try_parse_from(["akt", "node"]).unwrap();
        assert!(matches!(cli.command, Commands::Node(NodeArgs { command: None })));
    }

    #[test]
    fn cli_parse_project_init() {
        let cli = Cli::try_parse_from(["akt", "project", "init"]).unwrap();
        assert!(matches!(cli.command, Commands::Project(_)));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["akt", "node"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["akt", "-vv", "node"]).unwrap();
        assert_eq!(cli2.verbose, 2);

        let cli3 = Cli::try_parse_from(["akt", "node", "status", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_config_option() {
        let cli = Cli::try_parse_from(["akt", "--config", "akt.yaml", "node"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("akt.yaml")));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["akt"]).is_err());
    }

    #[test]
    fn run_rejects_out_of_range_gseq() {
        let cli = Cli::try_parse_from([
            "akt", "query", "deployment", "group", "get", "--owner", "o", "--dseq", "1",
            "--gseq", "4294967296", "--chain-id", "testnet",
        ])
        .unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn run_rejects_missing_config_file() {
        let cli = Cli::try_parse_from([
            "akt", "--config", "/nonexistent/akt.yaml", "query", "deployment", "get",
            "--owner", "o", "--dseq", "1", "--chain-id", "testnet",
        ])
        .unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn run_node_status_succeeds() {
        let cli = Cli::try_parse_from(["akt", "node", "status"]).unwrap();
        assert_eq!(run(cli).unwrap(), 0);
    }
}
