//! Lines command - Per-line filters over standard input.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::debug;

use ptk_core::{append, process_lines, ExistenceFilter, LineReplacer};

#[derive(Args)]
pub struct LinesArgs {
    #[command(subcommand)]
    command: LinesCommands,
}

#[derive(Subcommand)]
enum LinesCommands {
    /// Keep lines according to whether they name an existing path
    File(FileArgs),

    /// Append a suffix to every line
    Append(AppendArgs),

    /// Replace every regex match in each line
    Replace(ReplaceArgs),
}

#[derive(Args)]
struct FileArgs {
    /// Print lines naming paths that exist
    #[arg(long)]
    exists: bool,

    /// Print lines naming paths that don't exist
    #[arg(long)]
    not_exists: bool,
}

#[derive(Args)]
struct AppendArgs {
    /// Join the suffix as a path component instead of plain text
    #[arg(long)]
    as_path: bool,

    /// Text to append
    suffix: String,
}

#[derive(Args)]
struct ReplaceArgs {
    /// Regular expression to search for
    pattern: String,

    /// Replacement text; `$1` or `${name}` refer to capture groups
    replacement: String,
}

pub fn execute(args: LinesArgs) -> Result<()> {
    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());

    let written = match args.command {
        LinesCommands::File(args) => {
            let filter = ExistenceFilter::from_flags(args.exists, args.not_exists);
            debug!("Filtering lines with {:?}", filter);

            process_lines(input, output, |line| match filter {
                Some(f) if f.keeps(&line) => Some(line),
                _ => None,
            })
        }
        LinesCommands::Append(args) => process_lines(input, output, |line| {
            Some(append(&line, &args.suffix, args.as_path))
        }),
        LinesCommands::Replace(args) => {
            let replacer = LineReplacer::new(&args.pattern, args.replacement)?;
            process_lines(input, output, |line| {
                Some(replacer.replace(&line).into_owned())
            })
        }
    }
    .context("Could not filter lines")?;

    debug!("Wrote {} lines", written);
    Ok(())
}
