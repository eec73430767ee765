//! Exhaustive backtracking search for a Hamiltonian path
//!
//! Start vertices are tried in ascending order, and from each vertex the
//! candidates for the next step are tried in ascending order too. The first
//! complete path found is returned, which makes the result a deterministic
//! function of the matrix and the adjacency rule.
//!
//! The descent is driven by an explicit frame stack instead of native
//! recursion, so deep graphs do not exhaust the thread stack. The exploration
//! order is exactly that of the recursive formulation.

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{HamPathError, Result};
use crate::graph::state::SearchState;
use crate::graph::types::{AdjacencyMatrix, Directedness};
use crate::trace_time;

/// Deadline and cancellation are checked once per this many expansions
pub const POLL_INTERVAL: u64 = 1024;

/// Result of a completed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every vertex exactly once, consecutive vertices adjacent
    Found(Vec<usize>),
    /// Every start vertex was exhausted without completing a path
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&[usize]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<usize>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Vertices pushed onto the candidate path, start vertices included
    pub nodes_expanded: u64,
    /// Start vertices whose descent was begun
    pub starts_tried: usize,
}

/// Limits for a bounded search
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Abort once this much time has passed since the search began
    pub deadline: Option<Duration>,
    /// Abort once this flag is set (e.g. from a Ctrl-C handler)
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SearchOptions {
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Decides, at each poll point, whether the search may continue
trait Budget {
    type Abort;

    fn poll(&mut self, nodes_expanded: u64) -> std::result::Result<(), Self::Abort>;
}

struct Unbounded;

impl Budget for Unbounded {
    type Abort = Infallible;

    fn poll(&mut self, _nodes_expanded: u64) -> std::result::Result<(), Infallible> {
        Ok(())
    }
}

struct Bounded<'a> {
    deadline: Option<Instant>,
    cancel: Option<&'a AtomicBool>,
}

impl Budget for Bounded<'_> {
    type Abort = HamPathError;

    fn poll(&mut self, nodes_expanded: u64) -> Result<()> {
        if nodes_expanded % POLL_INTERVAL != 0 {
            return Ok(());
        }
        let reason = if self.cancel.is_some_and(|flag| flag.load(Ordering::SeqCst)) {
            "cancelled"
        } else if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            "deadline exceeded"
        } else {
            return Ok(());
        };
        Err(HamPathError::SearchAborted {
            reason: reason.to_string(),
            nodes_expanded,
        })
    }
}

/// Find a Hamiltonian path, or report that none exists.
///
/// A graph with no vertices yields the empty path.
pub fn find_hamiltonian_path(graph: &AdjacencyMatrix, directedness: Directedness) -> SearchOutcome {
    let mut stats = SearchStats::default();
    match run(graph, directedness, &mut Unbounded, &mut stats) {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    }
}

/// Like [`find_hamiltonian_path`], but honours a deadline and a cancel flag
/// and reports search statistics.
///
/// Returns [`HamPathError::SearchAborted`] if either limit trips before the
/// search space is exhausted. Limits are checked every [`POLL_INTERVAL`]
/// expansions, so small graphs always complete.
#[tracing::instrument(skip(graph, options), fields(vertices = graph.len(), directedness = %directedness))]
pub fn find_hamiltonian_path_with(
    graph: &AdjacencyMatrix,
    directedness: Directedness,
    options: &SearchOptions,
) -> Result<(SearchOutcome, SearchStats)> {
    let start = Instant::now();
    let mut budget = Bounded {
        deadline: options.deadline.map(|d| start + d),
        cancel: options.cancel.as_deref(),
    };
    let mut stats = SearchStats::default();

    let outcome = run(graph, directedness, &mut budget, &mut stats);

    trace_time!(
        start,
        "search_complete",
        nodes_expanded = stats.nodes_expanded,
        starts_tried = stats.starts_tried
    );

    match &outcome {
        Ok(result) => tracing::debug!(
            found = result.is_found(),
            nodes_expanded = stats.nodes_expanded,
            starts_tried = stats.starts_tried,
            "search_finished"
        ),
        Err(e) => tracing::warn!(error = %e, "search_aborted"),
    }

    outcome.map(|result| (result, stats))
}

fn run<B: Budget>(
    graph: &AdjacencyMatrix,
    directedness: Directedness,
    budget: &mut B,
    stats: &mut SearchStats,
) -> std::result::Result<SearchOutcome, B::Abort> {
    if graph.is_empty() {
        return Ok(SearchOutcome::Found(Vec::new()));
    }

    let mut state = SearchState::new(graph.len());

    for start in 0..graph.len() {
        stats.starts_tried += 1;
        if descend_from(graph, directedness, start, &mut state, budget, stats)? {
            return Ok(SearchOutcome::Found(state.into_path()));
        }
        tracing::trace!(start, nodes_expanded = stats.nodes_expanded, "start_exhausted");
        state.reset();
    }

    Ok(SearchOutcome::NotFound)
}

/// Depth-first descent from `start`.
///
/// `cursors[k]` is the next candidate to try after `state.path()[k]`. On
/// success the complete path is left in `state`; on exhaustion `state` is
/// empty again.
fn descend_from<B: Budget>(
    graph: &AdjacencyMatrix,
    directedness: Directedness,
    start: usize,
    state: &mut SearchState,
    budget: &mut B,
    stats: &mut SearchStats,
) -> std::result::Result<bool, B::Abort> {
    let n = graph.len();

    state.push(start);
    stats.nodes_expanded += 1;
    budget.poll(stats.nodes_expanded)?;
    if state.is_complete() {
        return Ok(true);
    }

    let mut cursors: Vec<usize> = Vec::with_capacity(n);
    cursors.push(0);

    while let Some(cursor) = cursors.last_mut() {
        let Some(&current) = state.path().last() else {
            break;
        };

        let mut next = None;
        while *cursor < n {
            let candidate = *cursor;
            *cursor += 1;
            if !state.is_visited(candidate) && graph.is_adjacent(current, candidate, directedness)
            {
                next = Some(candidate);
                break;
            }
        }

        match next {
            Some(vertex) => {
                state.push(vertex);
                stats.nodes_expanded += 1;
                budget.poll(stats.nodes_expanded)?;
                if state.is_complete() {
                    return Ok(true);
                }
                cursors.push(0);
            }
            None => {
                cursors.pop();
                state.pop();
            }
        }
    }

    Ok(false)
}
