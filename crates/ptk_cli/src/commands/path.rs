//! Path command - Path utilities.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::debug;

#[derive(Args)]
pub struct PathArgs {
    #[command(subcommand)]
    command: PathCommands,
}

#[derive(Subcommand)]
enum PathCommands {
    /// Print a path followed by each of its ancestors
    Parents(ParentsArgs),
}

#[derive(Args)]
struct ParentsArgs {
    /// Path to start from (defaults to the current directory)
    path: Option<PathBuf>,
}

pub fn execute(args: PathArgs) -> Result<()> {
    match args.command {
        PathCommands::Parents(args) => parents(args),
    }
}

fn parents(args: ParentsArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => std::env::current_dir().context("Could not determine the current directory")?,
    };

    debug!("Listing parents of {:?}", path);

    let mut out = io::stdout().lock();
    for ancestor in ptk_core::parents(&path) {
        writeln!(out, "{}", ancestor.display()).context("Could not write output")?;
    }
    out.flush().context("Could not write output")?;

    Ok(())
}
