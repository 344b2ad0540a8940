//! CLI command definitions.
//!
//! Each subcommand produces a configuration tree, then hands it to the shared
//! build-and-write pipeline in [`scaffold`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use strata_core::{ConfigNode, MaterializeReport, Materializer, TreeBuilder};
use strata_templates::{BuiltinTemplates, PathResolver, PlaceholderRenderer};

pub mod generate;
pub mod module;
pub mod templates;

/// Default output directory, relative to the current directory.
const DEFAULT_OUTPUT_DIR: &str = "dist";

/// strata - scaffold directory trees from templates
#[derive(Parser)]
#[command(name = "strata")]
#[command(version, about = "strata - scaffold directory trees from templates")]
#[command(long_about = r#"
strata materializes a declarative directory tree on disk, rendering every file
from a template. Existing directories are updated in place, never cleared.

COMMANDS:
  generate   → Build the tree described by a .json/.yaml/.toml config file
  module     → Generate page files for one or more modules
  templates  → List the built-in templates

TEMPLATE REFERENCES:
  v2, v3, v3s     built-in templates
  /path/to/file   relative to the project root
  path/to/file    relative to the node's own directory

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or unreadable configuration
  3 - Invalid configuration tree
  4 - A directory could not be created
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project root for root-relative template references (defaults to the current directory)
    #[arg(long, global = true, env = "STRATA_ROOT")]
    pub root: Option<PathBuf>,

    /// Directory holding the built-in templates
    #[arg(long, global = true, env = "STRATA_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a tree from a configuration file
    Generate(generate::GenerateArgs),

    /// Generate page files for modules
    Module(module::ModuleArgs),

    /// List built-in templates
    Templates(templates::TemplatesArgs),
}

/// Raised when part of the tree was skipped because a directory could not be created.
#[derive(Error, Debug)]
#[error("{0} director(ies) could not be created; their contents were skipped")]
pub struct MaterializeAborted(pub usize);

impl Cli {
    /// Directory root-relative template references resolve against.
    pub fn project_root(&self) -> Result<PathBuf> {
        let current_dir = std::env::current_dir()?;
        Ok(match &self.root {
            Some(root) => current_dir.join(root),
            None => current_dir,
        })
    }

    pub fn builtins(&self) -> BuiltinTemplates {
        match &self.templates_dir {
            Some(dir) => BuiltinTemplates::in_dir(dir),
            None => BuiltinTemplates::shipped(),
        }
    }

    /// Absolute output directory; `./dist` when not given.
    pub fn output_root(&self, output: Option<&Path>) -> Result<PathBuf> {
        let current_dir = std::env::current_dir()?;
        Ok(current_dir.join(output.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR))))
    }
}

/// Build `config` and write it below `output`.
pub async fn scaffold(
    cli: &Cli,
    builtins: BuiltinTemplates,
    config: &ConfigNode,
    output: &Path,
) -> Result<MaterializeReport> {
    let project_root = cli.project_root()?;
    let builder = TreeBuilder::new(PathResolver::new(builtins), &project_root);

    let tree = builder
        .build(config)
        .context("Failed to resolve configuration")?;
    info!("Resolved {} file(s)", tree.file_count());

    let materializer = Materializer::new(Arc::new(PlaceholderRenderer::new()));
    let report = materializer
        .materialize(output, &tree)
        .await
        .with_context(|| format!("Failed to prepare output directory {:?}", output))?;

    Ok(report)
}

/// Print a run summary and turn skipped subtrees into an error.
pub fn finish(cli: &Cli, report: &MaterializeReport, output: &Path) -> Result<()> {
    if !cli.quiet {
        println!();
        println!("✅ Wrote {} file(s)", report.written_files.len());
        if report.failed_files() > 0 {
            println!("⚠️  {} file(s) failed:", report.failed_files());
        }
    }
    for failure in &report.failures {
        eprintln!("   - {}", failure);
    }
    if !cli.quiet {
        println!("📁 Output directory: {}", output.display());
    }

    let aborted = report.failures.len() - report.failed_files();
    if aborted > 0 {
        return Err(MaterializeAborted(aborted).into());
    }
    Ok(())
}
