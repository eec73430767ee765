//! `hampath demo`: run the built-in example graphs

use crate::cli::DemoArgs;
use crate::commands::dispatch::CommandContext;
use hampath_core::error::Result;
use hampath_core::format::{OutputFormat, SearchReport};
use hampath_core::graph::{find_hamiltonian_path_with, SearchOptions};
use hampath_core::samples::{self, Sample};

pub fn execute(ctx: &CommandContext, args: &DemoArgs) -> Result<()> {
    let selected: Vec<Sample> = match &args.name {
        Some(name) => vec![samples::by_name(name)?],
        None => samples::all(),
    };

    let format = ctx.format();
    let mut json_reports = Vec::with_capacity(selected.len());

    for sample in &selected {
        let (outcome, stats) = find_hamiltonian_path_with(
            &sample.matrix,
            sample.directedness,
            &SearchOptions::default(),
        )?;
        tracing::debug!(sample = sample.name, found = outcome.is_found(), "demo_sample");

        let report = SearchReport {
            name: Some(sample.name),
            matrix: &sample.matrix,
            directedness: sample.directedness,
            outcome: &outcome,
            stats: Some(stats),
        };

        match format {
            OutputFormat::Json => json_reports.push(report.to_json()),
            OutputFormat::Human if ctx.cli.verbose => {
                println!("# {} ({})", sample.name, sample.description);
                print!("{}", report.to_human(true));
            }
            _ => print!("{}", report.render(format, ctx.cli.verbose)),
        }
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::Value::Array(json_reports));
    }

    Ok(())
}
