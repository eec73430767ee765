//! `hampath find`

use std::time::Duration;

use crate::cli::FindArgs;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::input::{interrupt_flag, read_graph};
use hampath_core::error::{HamPathError, Result};
use hampath_core::format::SearchReport;
use hampath_core::graph::{find_hamiltonian_path_with, SearchOptions};

pub fn execute(ctx: &CommandContext, args: &FindArgs) -> Result<()> {
    let parsed = read_graph(args.input.as_deref())?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let directedness = ctx.directedness(args.directedness.requested(), parsed.directed);

    let mut options = SearchOptions::default().with_cancel(interrupt_flag());
    if let Some(ms) = args.timeout_ms.or(ctx.config.search.timeout_ms) {
        options = options.with_deadline(Duration::from_millis(ms));
    }

    tracing::debug!(
        vertices = parsed.matrix.len(),
        directedness = %directedness,
        symmetric = parsed.matrix.is_symmetric(),
        "find"
    );

    let (outcome, stats) = find_hamiltonian_path_with(&parsed.matrix, directedness, &options)?;
    trace_command!(ctx.cli, ctx.start, "search");

    let report = SearchReport {
        name: None,
        matrix: &parsed.matrix,
        directedness,
        outcome: &outcome,
        stats: Some(stats),
    };
    print!("{}", report.render(ctx.format(), ctx.cli.verbose));

    if args.require_path && !outcome.is_found() {
        return Err(HamPathError::NoPath);
    }

    Ok(())
}
