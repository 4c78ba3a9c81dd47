//! `get` and `getOrDefault` command implementations

use anyhow::Result;
use clap::Args;
use configurator::Configurator;

#[derive(Args)]
pub struct GetArgs {
    /// Dotted path to resolve (e.g. server.port)
    #[arg(short = 'p', long = "path", visible_short_alias = 'k', visible_alias = "key")]
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Args)]
pub struct GetOrDefaultArgs {
    /// Dotted path to resolve (e.g. server.port)
    #[arg(short = 'p', long = "path", visible_short_alias = 'k', visible_alias = "key")]
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Value to print when the path does not resolve
    #[arg(short = 'd', long = "default", value_name = "VALUE")]
    pub default: String,
}

pub fn run(args: GetArgs, config: &Configurator) -> Result<()> {
    println!("{}", config.get(&args.path));
    Ok(())
}

pub fn run_or_default(args: GetOrDefaultArgs, config: &Configurator) -> Result<()> {
    println!("{}", config.get_or_default(&args.path, args.default));
    Ok(())
}
