//! Hamiltonian path search over adjacency matrices
//!
//! - `types`: validated adjacency matrix and the adjacency rule
//! - `state`: candidate path and visited markers for one search
//! - `search`: backtracking search, optionally bounded by a deadline or cancel flag
//! - `verify`: checks a candidate path against a graph
//! - `parse`: reads matrices from JSON or plain text

pub mod parse;
pub mod search;
pub mod state;
pub mod types;
pub mod verify;

pub use parse::{load_graph, parse_matrix, ParsedGraph};
pub use search::{
    find_hamiltonian_path, find_hamiltonian_path_with, SearchOptions, SearchOutcome, SearchStats,
};
pub use state::SearchState;
pub use types::{AdjacencyMatrix, Directedness};
pub use verify::{is_hamiltonian_path, verify_path};
