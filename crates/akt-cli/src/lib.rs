//! # akt-cli: Command-Line Client for the akt Marketplace
//!
//! Provides the `akt` binary. Flag groups are declared once in [`args`] and
//! reused by every command that needs them; handlers turn the parsed flags
//! into `akt-core` values and compose validated identifiers and filters.
//!
//! ## Subcommands
//!
//! - `akt query deployment get|list`, `akt query deployment group get`
//! - `akt query market order|bid|lease get|list`
//! - `akt node status`: placeholder, shows help.
//! - `akt project init`: placeholder, shows help.
//!
//! ```bash
//! akt query market bid get --chain-id akashnet-2 \
//!     --owner akash1... --dseq 5 --gseq 2 --oseq 3 --provider akash1...
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from composition; no validation logic here.
//! - Errors carry context naming the tier that failed to build.
//! - Rendered output goes to stdout, logs go to stderr.

pub mod args;
pub mod config;
pub mod node;
pub mod output;
pub mod project;
pub mod query;

use anyhow::{Context, Result};
use clap::Command;

/// Render the help of the subcommand at `path` below `root`.
pub fn help_text(mut root: Command, path: &[&str]) -> Result<String> {
    root.build();
    let mut cmd = &mut root;
    for name in path {
        cmd = cmd
            .find_subcommand_mut(name)
            .with_context(|| format!("unknown subcommand: {name}"))?;
    }
    Ok(cmd.render_help().to_string())
}

/// Print the help of the subcommand at `path` below `root` to stdout.
pub fn print_help(root: Command, path: &[&str]) -> Result<()> {
    print!("{}", help_text(root, path)?);
    Ok(())
}
