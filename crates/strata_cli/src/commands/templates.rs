//! Templates command - List the built-in templates.

use anyhow::Result;
use clap::Args;

use super::Cli;

#[derive(Args)]
pub struct TemplatesArgs {
    /// Fail when a built-in template file is missing
    #[arg(long)]
    check: bool,
}

pub async fn execute(cli: &Cli, args: &TemplatesArgs) -> Result<()> {
    let builtins = cli.builtins();
    let missing = builtins.missing();

    println!("Built-in templates ({}):", builtins.templates_path().display());
    for alias in builtins.aliases() {
        let status = if missing.iter().any(|(m, _)| *m == alias) {
            "❌ missing"
        } else {
            "✅"
        };
        if let Some(path) = builtins.get(alias) {
            println!("  {:<5} {} {}", alias, path.display(), status);
        }
    }

    if args.check && !missing.is_empty() {
        anyhow::bail!("{} built-in template(s) missing", missing.len());
    }
    Ok(())
}
