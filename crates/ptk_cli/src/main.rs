//! ptk CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: I/O error
//! - 4: Data parse error
//! - 5: Template error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ptk_core::CoreError;
use ptk_templates::TemplateError;

mod commands;

use commands::{Cli, Commands};

/// Script-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const IO_ERROR: u8 = 3;
    pub const DATA_ERROR: u8 = 4;
    pub const TEMPLATE_ERROR: u8 = 5;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Path(args) => commands::path::execute(args),
        Commands::Lines(args) => commands::lines::execute(args),
        Commands::Template(args) => commands::template::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Logs go to stderr; stdout carries command output only.
fn init_logging(verbose: bool, quiet: bool) {
    let default_directives = if quiet {
        "error"
    } else if verbose {
        "warn,ptk_cli=debug,ptk_core=debug,ptk_templates=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let log_result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<TemplateError>() {
            return if err.is_io() {
                ExitCodes::IO_ERROR
            } else if err.is_parse() {
                ExitCodes::DATA_ERROR
            } else {
                ExitCodes::TEMPLATE_ERROR
            };
        }

        if let Some(err) = cause.downcast_ref::<CoreError>() {
            return match err {
                CoreError::InvalidPattern { .. } => ExitCodes::INVALID_ARGS,
                CoreError::Io(_) => ExitCodes::IO_ERROR,
            };
        }

        if cause.downcast_ref::<std::io::Error>().is_some() {
            return ExitCodes::IO_ERROR;
        }
    }

    ExitCodes::GENERAL_ERROR
}
