//! Export command implementation

use anyhow::{Context, Result};
use clap::Args;
use configurator::Configurator;

#[derive(Args)]
pub struct ExportArgs {
    /// Dotted path to include (repeatable)
    #[arg(short = 'p', long = "paths", visible_short_alias = 'k', visible_alias = "keys")]
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: ExportArgs, config: &Configurator) -> Result<()> {
    let paths = args.paths.as_slice();
    let json = if args.pretty { config.export_pretty(paths) } else { config.export(paths) }
        .context("Failed to serialize exported configuration")?;
    println!("{}", json);
    Ok(())
}
