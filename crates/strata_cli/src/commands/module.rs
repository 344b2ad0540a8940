//! Module command - Generate page files for one or more modules.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

use strata_core::{AnswerProvider, CoreError, ModuleAnswers};
use strata_templates::{BuiltinTemplates, TemplateError};

use super::Cli;

#[derive(Args)]
pub struct ModuleArgs {
    /// Module names, comma separated
    #[arg(short, long)]
    name: String,

    /// Page file names without extension, comma separated
    #[arg(long, default_value = "index")]
    files: String,

    /// Template reference used for every page
    #[arg(short, long, default_value = "v3")]
    template: String,

    /// Description for every page (defaults depend on the page name)
    #[arg(long)]
    content: Option<String>,

    /// Output directory (defaults to ./dist)
    #[arg(short, long, env = "STRATA_OUTPUT")]
    output: Option<PathBuf>,
}

pub async fn execute(cli: &Cli, args: &ModuleArgs) -> Result<()> {
    let modules = ModuleAnswers::parse_list(&args.name);
    let files = ModuleAnswers::parse_list(&args.files);
    let output = cli.output_root(args.output.as_deref())?;

    info!("Generating modules: {}", modules.join(", "));

    let builtins = custom_template(cli.builtins(), &args.template, &std::env::current_dir()?)?;

    let mut answers = ModuleAnswers::new(modules.clone(), args.template.clone())
        .with_files(files.clone());
    if let Some(content) = &args.content {
        answers = answers.with_content(content.clone());
    }
    let config = answers.answers()?;

    let report = super::scaffold(cli, builtins, &config, &output).await?;

    if !cli.quiet && report.is_clean() {
        println!("✅ Modules created: {}", modules.join(", "));
        println!(
            "📝 Files: {}",
            files
                .iter()
                .map(|f| format!("{f}.vue"))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    super::finish(cli, &report, &output)
}

/// Register a custom `-t` path, taken relative to `base`, as an alias of itself.
///
/// Built-in names and root-relative references pass through untouched, so
/// every module page uses the same file instead of one next to each module.
pub fn custom_template(
    builtins: BuiltinTemplates,
    reference: &str,
    base: &Path,
) -> Result<BuiltinTemplates> {
    if builtins.exists(reference) || reference.starts_with('/') {
        return Ok(builtins);
    }

    let path = base.join(reference);
    if !path.is_file() {
        return Err(CoreError::from(TemplateError::TemplateNotFound(path)).into());
    }

    debug!("Custom template '{}' resolved to {:?}", reference, path);
    Ok(builtins.with_alias(reference, path))
}
