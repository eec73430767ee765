//! Built-in example graphs used by `hampath demo`

use crate::error::{HamPathError, Result};
use crate::graph::{AdjacencyMatrix, Directedness};

/// A named example graph
#[derive(Debug, Clone)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub directedness: Directedness,
    pub matrix: AdjacencyMatrix,
}

const TRIANGLE: [[u8; 3]; 3] = [[0, 1, 1], [1, 0, 1], [1, 1, 0]];

const SQUARE: [[u8; 4]; 4] = [[0, 1, 0, 1], [1, 0, 1, 0], [0, 1, 0, 1], [1, 0, 1, 0]];

const DIRECTED_CHAIN: [[u8; 4]; 4] = [[0, 1, 0, 0], [0, 0, 1, 1], [0, 0, 0, 1], [0, 0, 0, 0]];

const NO_PATH: [[u8; 3]; 3] = [[0, 1, 0], [1, 0, 0], [0, 0, 0]];

const PENTAGON: [[u8; 5]; 5] = [
    [0, 1, 0, 0, 1],
    [1, 0, 1, 0, 0],
    [0, 1, 0, 1, 0],
    [0, 0, 1, 0, 1],
    [1, 0, 0, 1, 0],
];

/// Names accepted by [`by_name`], in demo order
pub const SAMPLE_NAMES: [&str; 5] = ["triangle", "square", "directed-chain", "no-path", "pentagon"];

fn sample<const N: usize>(
    name: &'static str,
    description: &'static str,
    directedness: Directedness,
    rows: &[[u8; N]; N],
) -> Sample {
    let mut matrix = AdjacencyMatrix::new(N);
    for (i, row) in rows.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if cell == 1 {
                // Indices come from an N x N array, so they are in range
                let _ = matrix.add_edge(i, j);
            }
        }
    }
    Sample {
        name,
        description,
        directedness,
        matrix,
    }
}

/// All built-in samples, in demo order
pub fn all() -> Vec<Sample> {
    vec![
        sample(
            "triangle",
            "three mutually connected vertices",
            Directedness::Undirected,
            &TRIANGLE,
        ),
        sample(
            "square",
            "four-cycle 0-1-2-3-0",
            Directedness::Undirected,
            &SQUARE,
        ),
        sample(
            "directed-chain",
            "0->1, 1->2, 1->3, 2->3",
            Directedness::Directed,
            &DIRECTED_CHAIN,
        ),
        sample(
            "no-path",
            "edge 0-1 with vertex 2 isolated",
            Directedness::Undirected,
            &NO_PATH,
        ),
        sample(
            "pentagon",
            "five-cycle 0-1-2-3-4-0",
            Directedness::Undirected,
            &PENTAGON,
        ),
    ]
}

/// Look up a sample by name
pub fn by_name(name: &str) -> Result<Sample> {
    all().into_iter().find(|s| s.name == name).ok_or_else(|| {
        HamPathError::invalid_value(
            "sample",
            format!("{} (available: {})", name, SAMPLE_NAMES.join(", ")),
        )
    })
}
