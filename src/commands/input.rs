//! Shared input handling for commands that read a graph

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hampath_core::error::{HamPathError, Result};
use hampath_core::graph::{load_graph, parse_matrix, ParsedGraph};

/// Read a graph from `path`, or from stdin when `path` is absent or `-`
pub fn read_graph(path: Option<&Path>) -> Result<ParsedGraph> {
    match path {
        Some(path) if path != Path::new("-") => load_graph(path),
        _ => {
            let content = io::read_to_string(io::stdin())
                .map_err(|e| HamPathError::parse(format!("failed to read stdin: {}", e)))?;
            parse_matrix(&content)
        }
    }
}

/// Flag that flips to true on Ctrl-C.
///
/// If a handler cannot be installed the flag simply never trips.
pub fn interrupt_flag() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    if let Err(e) = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        tracing::debug!(error = %e, "interrupt handler not installed");
    }

    interrupted
}
