//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use hampath_core::config::HamPathConfig;
use hampath_core::error::Result;
use hampath_core::format::OutputFormat;
use hampath_core::graph::Directedness;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: HamPathConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: HamPathConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format`, else the configured format, else human
    pub fn format(&self) -> OutputFormat {
        self.cli
            .format
            .or(self.config.output.format)
            .unwrap_or_default()
    }

    /// Flags win over the input file's own hint, which wins over config
    pub fn directedness(&self, flag: Option<bool>, input_hint: Option<bool>) -> Directedness {
        flag.or(input_hint)
            .map(Directedness::from)
            .unwrap_or(self.config.search.directedness)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("hampath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Find Hamiltonian paths in adjacency-matrix graphs.");
        println!();
        println!("Run `hampath --help` for usage information.");
        Ok(())
    }
}
