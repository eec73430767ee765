//! CLI argument parsing for hampath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DemoArgs, FindArgs, VerifyArgs};
use hampath_core::format::OutputFormat;
use parse::parse_format;

/// Hampath - find Hamiltonian paths in adjacency-matrix graphs
#[derive(Parser, Debug)]
#[command(name = "hampath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, records, or dot
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show path arrows and search statistics; enables debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `debug` or `hampath_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a hampath.toml config file
    #[arg(long, global = true, env = "HAMPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a Hamiltonian path in a graph read from a file or stdin
    Find(FindArgs),

    /// Run the built-in example graphs
    Demo(DemoArgs),

    /// Check whether a vertex sequence is a Hamiltonian path of a graph
    Verify(VerifyArgs),
}
