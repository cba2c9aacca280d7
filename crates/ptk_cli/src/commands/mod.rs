//! CLI command definitions.
//!
//! Each subcommand is an independent, single-shot transformation: it reads
//! its arguments or standard input and writes the result to standard output.

use clap::{Parser, Subcommand};

pub mod lines;
pub mod path;
pub mod template;

/// ptk - a small toolkit of path, line and template utilities
#[derive(Parser)]
#[command(name = "ptk")]
#[command(version, about = "ptk - path, line and template utilities")]
#[command(long_about = r#"
ptk bundles a handful of stateless text utilities behind one executable.

COMMANDS:
  path parents    → List a path and each of its ancestor directories
  lines file      → Keep stdin lines naming paths that exist (or don't)
  lines append    → Append a suffix or path component to stdin lines
  lines replace   → Regex-replace within stdin lines
  template        → Render a template against merged YAML/JSON data

EXAMPLE:
  ptk path parents . | ptk lines append --as-path terraform.tfvars.json | ptk lines file --exists

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - I/O error
  4 - Data parse error
  5 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Path utilities
    Path(path::PathArgs),

    /// Line-oriented filters over standard input
    #[command(visible_alias = "l")]
    Lines(lines::LinesArgs),

    /// Render a template with merged data sources
    #[command(visible_alias = "tpl")]
    Template(template::TemplateArgs),
}
