//! Command implementations

mod check;
mod config;
mod distance;
mod nearby;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Distance(args) => distance::execute(args, &output, config_path),
        Commands::Nearby(args) => nearby::execute(args, &output, config_path),
        Commands::Check(args) => check::execute(args, &output),
        Commands::Config => config::execute(&output, config_path),
    }
}
