//! strata CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (individual file failures are reported but do not fail the run)
//! - 1: General error
//! - 2: Invalid arguments or unreadable configuration
//! - 3: Invalid configuration tree (bad structure or template reference)
//! - 4: A directory could not be created

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands, MaterializeAborted};
use strata_core::CoreError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
    pub const MATERIALIZE_ABORTED: u8 = 4;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,strata_cli={level},strata_core={level},strata_templates={level}"
        ))
    });

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Generate(ref args) => commands::generate::execute(&cli, args).await,
        Commands::Module(ref args) => commands::module::execute(&cli, args).await,
        Commands::Templates(ref args) => commands::templates::execute(&cli, args).await,
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

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<MaterializeAborted>().is_some() {
        return ExitCodes::MATERIALIZE_ABORTED;
    }

    match e.downcast_ref::<CoreError>() {
        Some(err) if err.is_configuration_error() => ExitCodes::CONFIG_ERROR,
        Some(CoreError::DirectoryCreateFailure { .. }) => ExitCodes::MATERIALIZE_ABORTED,
        Some(
            CoreError::Io(_)
            | CoreError::Json(_)
            | CoreError::Yaml(_)
            | CoreError::Toml(_)
            | CoreError::UnsupportedFormat(_),
        ) => ExitCodes::INVALID_ARGS,
        _ => ExitCodes::GENERAL_ERROR,
    }
}
