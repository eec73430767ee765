//! Error types and exit codes for hampath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (aborted search, invalid candidate path, missing path)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable or malformed adjacency matrix)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during hampath operations
///
/// A graph without a Hamiltonian path is not an error; it is reported
/// as [`crate::graph::SearchOutcome::NotFound`].
#[derive(Error, Debug)]
pub enum HamPathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, records, or dot)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid adjacency matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("failed to parse graph: {reason}")]
    Parse { reason: String },

    // Generic failures (exit code 1)
    #[error("not a Hamiltonian path: {reason}")]
    InvalidPath { reason: String },

    #[error("no Hamiltonian path exists")]
    NoPath,

    #[error("search aborted after {nodes_expanded} expansions: {reason}")]
    SearchAborted { reason: String, nodes_expanded: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl HamPathError {
    /// Create an error for a matrix that violates the input contract
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        HamPathError::InvalidMatrix {
            reason: reason.into(),
        }
    }

    /// Create an error for input text that could not be parsed
    pub fn parse(reason: impl Into<String>) -> Self {
        HamPathError::Parse {
            reason: reason.into(),
        }
    }

    /// Create an error for a candidate path that fails verification
    pub fn invalid_path(reason: impl Into<String>) -> Self {
        HamPathError::InvalidPath {
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        HamPathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HamPathError::UnknownFormat(_)
            | HamPathError::UsageError(_)
            | HamPathError::InvalidValue { .. } => ExitCode::Usage,

            HamPathError::InvalidMatrix { .. } | HamPathError::Parse { .. } => ExitCode::Data,

            HamPathError::InvalidPath { .. }
            | HamPathError::NoPath
            | HamPathError::SearchAborted { .. }
            | HamPathError::Io(_)
            | HamPathError::Json(_)
            | HamPathError::Toml(_)
            | HamPathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            HamPathError::UnknownFormat(_) => "unknown_format",
            HamPathError::UsageError(_) => "usage_error",
            HamPathError::InvalidValue { .. } => "invalid_value",
            HamPathError::InvalidMatrix { .. } => "invalid_matrix",
            HamPathError::Parse { .. } => "parse_error",
            HamPathError::InvalidPath { .. } => "invalid_path",
            HamPathError::NoPath => "no_path",
            HamPathError::SearchAborted { .. } => "search_aborted",
            HamPathError::Io(_) => "io_error",
            HamPathError::Json(_) => "json_error",
            HamPathError::Toml(_) => "toml_error",
            HamPathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let HamPathError::SearchAborted { nodes_expanded, .. } = self {
            error_obj["nodes_expanded"] = serde_json::json!(nodes_expanded);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for hampath operations
pub type Result<T> = std::result::Result<T, HamPathError>;
