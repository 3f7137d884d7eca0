//! # Project Subcommand
//!
//! Placeholder for project scaffolding. `akt project` and `akt project init`
//! display their help and exit successfully.

use anyhow::Result;
use clap::{Args, Command, Subcommand};

use crate::print_help;

/// Arguments for the `akt project` subcommand.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: Option<ProjectCommand>,
}

/// Project subcommands.
#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// Create a new project in the current directory.
    Init,
}

/// Execute the project subcommand.
pub fn run_project(args: &ProjectArgs, root: Command) -> Result<u8> {
    match args.command {
        None => print_help(root, &["project"])?,
        Some(ProjectCommand::Init) => print_help(root, &["project", "init"])?,
    }
    Ok(0)
}
