//! Generate command - Build a tree from a configuration file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use strata_core::load_config;

use super::Cli;

#[derive(Args)]
pub struct GenerateArgs {
    /// Configuration file (.json, .yaml, .yml or .toml)
    #[arg(short, long)]
    config: PathBuf,

    /// Output directory (defaults to ./dist)
    #[arg(short, long, env = "STRATA_OUTPUT")]
    output: Option<PathBuf>,
}

pub async fn execute(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let output = cli.output_root(args.output.as_deref())?;
    info!("Generating from {:?} into {:?}", args.config, output);

    let config = load_config(&args.config)
        .with_context(|| format!("Failed to load configuration {:?}", args.config))?;

    let report = super::scaffold(cli, cli.builtins(), &config, &output).await?;
    super::finish(cli, &report, &output)
}
