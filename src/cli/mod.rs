//! Command-line interface for configurator
//!
//! Provides `get`, `getOrDefault` and `export` subcommands over a list of
//! source files given with `--source`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use configurator::Configurator;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod export;
mod get;

/// Resolve layered YAML configuration and environment overrides by dotted path
#[derive(Parser)]
#[command(name = "configurator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Source file to read (repeatable; later sources take priority)
    #[arg(short = 's', long = "source", value_name = "FILE", required = true)]
    sources: Vec<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value resolved at a path
    Get(get::GetArgs),

    /// Print the value resolved at a path, or a default when nothing resolves
    #[command(name = "getOrDefault", alias = "get-or-default")]
    GetOrDefault(get::GetOrDefaultArgs),

    /// Print a JSON document holding only the given paths
    Export(export::ExportArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = Configurator::new(&cli.sources);

    match cli.command {
        Commands::Get(args) => get::run(args, &config),
        Commands::GetOrDefault(args) => get::run_or_default(args, &config),
        Commands::Export(args) => export::run(args, &config),
    }
}
