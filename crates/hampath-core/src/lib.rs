//! Hampath Core Library
//!
//! Backtracking search for Hamiltonian paths in adjacency-matrix graphs,
//! plus the input, output and configuration plumbing around it.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod samples;
