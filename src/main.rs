//! configurator: resolve layered YAML configuration from the command line

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
