use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bail_matrix;
use crate::error::{HamPathError, Result};

/// Adjacency rule applied for the lifetime of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directedness {
    /// `graph[i][j]` alone permits the step i -> j
    Directed,
    /// Either `graph[i][j]` or `graph[j][i]` permits the step i -> j
    #[default]
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        self == Directedness::Directed
    }
}

impl From<bool> for Directedness {
    fn from(directed: bool) -> Self {
        if directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}

impl fmt::Display for Directedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directedness::Directed => write!(f, "directed"),
            Directedness::Undirected => write!(f, "undirected"),
        }
    }
}

/// Square boolean adjacency matrix over vertices `0..n`
///
/// Cells are stored row-major. Every constructor validates the input, so a
/// value of this type is always square and binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Create an edgeless matrix with `n` vertices
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    /// Build a matrix from rows of 0/1 entries.
    ///
    /// Rejects ragged or non-square input and any entry other than 0 or 1.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<i64>,
    {
        let n = rows.len();
        let mut matrix = Self::new(n);

        for (i, row) in rows.iter().enumerate() {
            let row: &[T] = row.as_ref();
            if row.len() != n {
                bail_matrix!(
                    "row {} has {} entries, expected {} for a {}x{} matrix",
                    i,
                    row.len(),
                    n,
                    n,
                    n
                );
            }
            for (j, &entry) in row.iter().enumerate() {
                let value: i64 = entry.into();
                match value {
                    0 => {}
                    1 => matrix.cells[i * n + j] = true,
                    other => bail_matrix!("entry [{}][{}] is {}, expected 0 or 1", i, j, other),
                }
            }
        }

        Ok(matrix)
    }

    /// Build a matrix with `n` vertices from a list of `(from, to)` edges
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut matrix = Self::new(n);
        for &(from, to) in edges {
            matrix.add_edge(from, to)?;
        }
        Ok(matrix)
    }

    /// Set the entry `graph[from][to]`
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        if from >= self.n || to >= self.n {
            bail_matrix!(
                "edge ({}, {}) out of range for {} vertices",
                from,
                to,
                self.n
            );
        }
        self.cells[from * self.n + to] = true;
        Ok(())
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Raw entry `graph[from][to]`. Callers must pass indices below `len()`.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.cells[from * self.n + to]
    }

    /// Whether the step `from -> to` is allowed under the given rule
    #[inline]
    pub fn is_adjacent(&self, from: usize, to: usize, directedness: Directedness) -> bool {
        match directedness {
            Directedness::Directed => self.has_edge(from, to),
            Directedness::Undirected => self.has_edge(from, to) || self.has_edge(to, from),
        }
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.has_edge(i, j) == self.has_edge(j, i)))
    }

    /// Edges as `(from, to)` pairs in row-major order.
    ///
    /// Under [`Directedness::Undirected`] each unordered pair appears once as
    /// `(min, max)`, whichever cell set it.
    pub fn edges(&self, directedness: Directedness) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for i in 0..self.n {
            for j in 0..self.n {
                let present = match directedness {
                    Directedness::Directed => self.has_edge(i, j),
                    Directedness::Undirected => j > i && self.is_adjacent(i, j, directedness),
                };
                if present {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    /// Rows as 0/1 values
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.n.max(1))
            .take(self.n)
            .map(|row| row.iter().map(|&cell| u8::from(cell)).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<i64>>> for AdjacencyMatrix {
    type Error = HamPathError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<u8>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.rows()
    }
}
