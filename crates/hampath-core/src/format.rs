//! Output format handling for hampath
//!
//! Supports four output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts and LLM context
//! - dot: Graphviz source with the found path highlighted

use std::collections::HashSet;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HamPathError;
use crate::graph::{AdjacencyMatrix, Directedness, SearchOutcome, SearchStats};

/// Output format for hampath commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for line-oriented consumers
    Records,
    /// Graphviz DOT source
    Dot,
}

impl FromStr for OutputFormat {
    type Err = HamPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            "dot" => Ok(OutputFormat::Dot),
            other => Err(HamPathError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
            OutputFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Everything needed to render the result of one search
#[derive(Debug, Clone, Copy)]
pub struct SearchReport<'a> {
    /// Sample name, when the graph came from the built-in set
    pub name: Option<&'a str>,
    pub matrix: &'a AdjacencyMatrix,
    pub directedness: Directedness,
    pub outcome: &'a SearchOutcome,
    pub stats: Option<SearchStats>,
}

impl SearchReport<'_> {
    /// Render in the requested format. Multi-line formats end with a newline.
    pub fn render(&self, format: OutputFormat, verbose: bool) -> String {
        match format {
            OutputFormat::Human => self.to_human(verbose),
            OutputFormat::Json => format!("{}\n", self.to_json()),
            OutputFormat::Records => self.to_records(),
            OutputFormat::Dot => self.to_dot(),
        }
    }

    pub fn to_human(&self, verbose: bool) -> String {
        let prefix = self
            .name
            .map(|name| format!("{}: ", name))
            .unwrap_or_default();

        let mut out = match self.outcome.path() {
            Some(path) => format!("{}Path found: {:?}\n", prefix, path),
            None => format!("{}Path found: None\n", prefix),
        };

        if verbose {
            if let Some(path) = self.outcome.path() {
                let _ = writeln!(out, "  {}", arrow_path(path));
            }
            if let Some(stats) = self.stats {
                let _ = writeln!(
                    out,
                    "  {} vertices, {}, {} expansions from {} start(s)",
                    self.matrix.len(),
                    self.directedness,
                    stats.nodes_expanded,
                    stats.starts_tried
                );
            }
        }

        out
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::json!({
            "found": self.outcome.is_found(),
            "path": self.outcome.path(),
            "vertices": self.matrix.len(),
            "directed": self.directedness.is_directed(),
        });
        if let Some(name) = self.name {
            value["name"] = serde_json::json!(name);
        }
        if let Some(stats) = self.stats {
            value["stats"] = serde_json::json!(stats);
        }
        value
    }

    pub fn to_records(&self) -> String {
        let mut out = String::from("H hampath=1 records=1 mode=find");
        if let Some(name) = self.name {
            let _ = write!(out, " sample={}", name);
        }
        let _ = writeln!(
            out,
            " vertices={} directed={} found={}",
            self.matrix.len(),
            self.directedness.is_directed(),
            self.outcome.is_found()
        );
        if let Some(path) = self.outcome.path() {
            out.push('P');
            for vertex in path {
                let _ = write!(out, " {}", vertex);
            }
            out.push('\n');
        }
        if let Some(stats) = self.stats {
            let _ = writeln!(
                out,
                "S nodes_expanded={} starts_tried={}",
                stats.nodes_expanded, stats.starts_tried
            );
        }
        out
    }

    /// Graphviz source for the graph, path edges drawn red and thick
    pub fn to_dot(&self) -> String {
        let directed = self.directedness.is_directed();
        let (keyword, connector) = if directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let path_edges: HashSet<(usize, usize)> = self
            .outcome
            .path()
            .map(|path| {
                path.windows(2)
                    .map(|pair| {
                        if directed {
                            (pair[0], pair[1])
                        } else {
                            (pair[0].min(pair[1]), pair[0].max(pair[1]))
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let title = match self.outcome.path() {
            Some(path) => format!("Hamiltonian Path Found: {}", arrow_path(path)),
            None => "No Hamiltonian Path Found".to_string(),
        };

        let mut out = String::new();
        let _ = writeln!(out, "{} hamiltonian {{", keyword);
        let _ = writeln!(out, "  label=\"{}\";", title);
        out.push_str("  labelloc=t;\n");
        out.push_str(
            "  node [shape=circle, style=filled, fillcolor=lightblue, color=darkblue];\n",
        );
        for vertex in 0..self.matrix.len() {
            let _ = writeln!(out, "  {};", vertex);
        }
        for (from, to) in self.matrix.edges(self.directedness) {
            let style = if path_edges.contains(&(from, to)) {
                "color=red, penwidth=3"
            } else {
                "color=lightgray"
            };
            let _ = writeln!(out, "  {} {} {} [{}];", from, connector, to, style);
        }
        out.push_str("}\n");
        out
    }
}

fn arrow_path(path: &[usize]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
