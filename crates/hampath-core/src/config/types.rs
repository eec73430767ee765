//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::Directedness;

/// Top-level `hampath.toml` contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HamPathConfig {
    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults applied to `find` and `verify` when flags are absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Adjacency rule when neither the input nor the flags specify one
    #[serde(default)]
    pub directedness: Directedness,

    /// Abort searches that run longer than this (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}
