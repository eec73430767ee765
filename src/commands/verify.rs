//! `hampath verify`: check a candidate path against a graph

use crate::cli::VerifyArgs;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::input::read_graph;
use hampath_core::error::Result;
use hampath_core::format::{OutputFormat, SearchReport};
use hampath_core::graph::{verify_path, SearchOutcome};

pub fn execute(ctx: &CommandContext, args: &VerifyArgs) -> Result<()> {
    let parsed = read_graph(Some(args.input.as_path()))?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let directedness = ctx.directedness(args.directedness.requested(), parsed.directed);

    verify_path(&parsed.matrix, directedness, &args.path)?;

    let path_str = args
        .path
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");

    match ctx.format() {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Valid Hamiltonian path: {}", path_str);
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "valid": true,
                "path": args.path,
                "vertices": parsed.matrix.len(),
                "directed": directedness.is_directed(),
            });
            println!("{}", value);
        }
        OutputFormat::Records => {
            println!(
                "H hampath=1 records=1 mode=verify vertices={} directed={} valid=true",
                parsed.matrix.len(),
                directedness.is_directed()
            );
        }
        OutputFormat::Dot => {
            let outcome = SearchOutcome::Found(args.path.clone());
            let report = SearchReport {
                name: None,
                matrix: &parsed.matrix,
                directedness,
                outcome: &outcome,
                stats: None,
            };
            print!("{}", report.to_dot());
        }
    }

    Ok(())
}
