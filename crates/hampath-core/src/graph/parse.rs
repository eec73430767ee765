//! Reading adjacency matrices from text
//!
//! Accepted inputs:
//! - JSON rows: `[[0,1],[1,0]]`
//! - JSON document: `{"directed": true, "matrix": [[0,1],[0,0]]}`
//! - Plain text: one row per line, entries separated by whitespace or commas.
//!   Blank lines and `#` comments are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HamPathError, Result};
use crate::graph::types::AdjacencyMatrix;

/// A matrix plus the directedness recorded alongside it, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGraph {
    pub matrix: AdjacencyMatrix,
    pub directed: Option<bool>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDocument {
    #[serde(default)]
    directed: Option<bool>,
    matrix: Vec<Vec<i64>>,
}

/// Parse a graph from any of the accepted formats
pub fn parse_matrix(input: &str) -> Result<ParsedGraph> {
    let trimmed = input.trim_start();
    match trimmed.chars().next() {
        Some('[') => {
            let rows: Vec<Vec<i64>> = serde_json::from_str(trimmed)
                .map_err(|e| HamPathError::parse(format!("invalid JSON matrix: {}", e)))?;
            Ok(ParsedGraph {
                matrix: AdjacencyMatrix::from_rows(&rows)?,
                directed: None,
            })
        }
        Some('{') => {
            let doc: GraphDocument = serde_json::from_str(trimmed)
                .map_err(|e| HamPathError::parse(format!("invalid JSON graph: {}", e)))?;
            Ok(ParsedGraph {
                matrix: AdjacencyMatrix::from_rows(&doc.matrix)?,
                directed: doc.directed,
            })
        }
        _ => parse_text_rows(input),
    }
}

fn parse_text_rows(input: &str) -> Result<ParsedGraph> {
    let mut rows: Vec<Vec<i64>> = Vec::new();

    for (line_no, line) in input.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            continue;
        }

        let row = tokens
            .iter()
            .map(|token| {
                token.parse::<i64>().map_err(|_| {
                    HamPathError::parse(format!(
                        "line {}: '{}' is not an integer",
                        line_no + 1,
                        token
                    ))
                })
            })
            .collect::<Result<Vec<i64>>>()?;
        rows.push(row);
    }

    Ok(ParsedGraph {
        matrix: AdjacencyMatrix::from_rows(&rows)?,
        directed: None,
    })
}

/// Read and parse a graph file
pub fn load_graph(path: &Path) -> Result<ParsedGraph> {
    let content = fs::read_to_string(path).map_err(|e| {
        HamPathError::parse(format!("failed to read {}: {}", path.display(), e))
    })?;
    let start = std::time::Instant::now();
    let parsed = parse_matrix(&content)?;
    crate::trace_time!(start, "parse_graph", vertices = parsed.matrix.len());
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_json_rows() {
        let parsed = parse_matrix("[[0, 1], [1, 0]]").unwrap();
        assert_eq!(parsed.matrix.len(), 2);
        assert!(parsed.matrix.has_edge(0, 1));
        assert_eq!(parsed.directed, None);
    }

    #[test]
    fn test_parse_json_document() {
        let parsed =
            parse_matrix(r#"{"directed": true, "matrix": [[0,1,0],[0,0,1],[0,0,0]]}"#).unwrap();
        assert_eq!(parsed.directed, Some(true));
        assert!(parsed.matrix.has_edge(1, 2));
        assert!(!parsed.matrix.has_edge(2, 1));
    }

    #[test]
    fn test_parse_json_document_rejects_unknown_field() {
        let err = parse_matrix(r#"{"directd": true, "matrix": [[0]]}"#).unwrap_err();
        assert!(matches!(err, HamPathError::Parse { .. }));
    }

    #[test]
    fn test_parse_json_non_binary_is_matrix_error() {
        let err = parse_matrix("[[0, 5], [1, 0]]").unwrap_err();
        assert!(matches!(err, HamPathError::InvalidMatrix { .. }));
    }

    #[test]
    fn test_parse_text_rows_with_comments() {
        let input = "# square\n0 1 0 1\n1,0,1,0\n\n0 1 0 1  # row 2\n1 0 1 0\n";
        let parsed = parse_matrix(input).unwrap();
        assert_eq!(parsed.matrix.len(), 4);
        assert!(parsed.matrix.is_symmetric());
        assert!(parsed.matrix.has_edge(3, 0));
    }

    #[test]
    fn test_parse_text_bad_token() {
        let err = parse_matrix("0 1\n1 x\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse graph: line 2: 'x' is not an integer"
        );
    }

    #[test]
    fn test_parse_text_non_square() {
        let err = parse_matrix("0 1 1\n1 0 1\n").unwrap_err();
        assert!(matches!(err, HamPathError::InvalidMatrix { .. }));
    }

    #[test]
    fn test_parse_empty_input_is_empty_graph() {
        let parsed = parse_matrix("  \n# nothing here\n").unwrap();
        assert!(parsed.matrix.is_empty());
    }

    #[test]
    fn test_load_graph_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[0,1,1],[1,0,1],[1,1,0]]").unwrap();
        let parsed = load_graph(file.path()).unwrap();
        assert_eq!(parsed.matrix.len(), 3);
    }

    #[test]
    fn test_load_graph_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
