//! Command dispatch logic for hampath

use std::time::Instant;

use crate::cli::{Cli, Commands};
use hampath_core::config::HamPathConfig;
use hampath_core::error::Result;
use tracing::debug;

mod command;
pub(crate) mod macros;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = HamPathConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Find(args) => crate::commands::find::execute(ctx, args),
            Commands::Demo(args) => crate::commands::demo::execute(ctx, args),
            Commands::Verify(args) => crate::commands::verify::execute(ctx, args),
        }
    }
}
