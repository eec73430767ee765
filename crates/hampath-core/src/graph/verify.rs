//! Checks that a vertex sequence is a Hamiltonian path of a graph

use crate::bail_path;
use crate::error::Result;
use crate::graph::types::{AdjacencyMatrix, Directedness};

/// Verify `path` against `graph`, reporting the first violation found.
///
/// Checks, in order: length, vertex range, repeated vertices, and adjacency
/// of each consecutive pair under `directedness`.
pub fn verify_path(
    graph: &AdjacencyMatrix,
    directedness: Directedness,
    path: &[usize],
) -> Result<()> {
    let n = graph.len();
    if path.len() != n {
        bail_path!("path has {} vertices, graph has {}", path.len(), n);
    }

    let mut seen = vec![false; n];
    for (position, &vertex) in path.iter().enumerate() {
        if vertex >= n {
            bail_path!(
                "vertex {} at position {} is out of range for {} vertices",
                vertex,
                position,
                n
            );
        }
        if seen[vertex] {
            bail_path!("vertex {} is visited more than once", vertex);
        }
        seen[vertex] = true;
    }

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if !graph.is_adjacent(from, to, directedness) {
            bail_path!("no {} edge from {} to {}", directedness, from, to);
        }
    }

    Ok(())
}

/// Boolean form of [`verify_path`]
pub fn is_hamiltonian_path(
    graph: &AdjacencyMatrix,
    directedness: Directedness,
    path: &[usize],
) -> bool {
    verify_path(graph, directedness, path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (1, 3), (2, 3)]).unwrap()
    }

    #[test]
    fn test_valid_directed_path() {
        assert!(verify_path(&chain(), Directedness::Directed, &[0, 1, 2, 3]).is_ok());
    }

    #[test]
    fn test_wrong_length() {
        let err = verify_path(&chain(), Directedness::Directed, &[0, 1, 2]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "not a Hamiltonian path: path has 3 vertices, graph has 4"
        );
    }

    #[test]
    fn test_out_of_range_vertex() {
        let err = verify_path(&chain(), Directedness::Directed, &[0, 1, 2, 9]).unwrap_err();
        assert!(err.to_string().contains("vertex 9 at position 3 is out of range"));
    }

    #[test]
    fn test_repeated_vertex() {
        let err = verify_path(&chain(), Directedness::Directed, &[0, 1, 1, 3]).unwrap_err();
        assert!(err.to_string().contains("vertex 1 is visited more than once"));
    }

    #[test]
    fn test_missing_directed_edge() {
        let err = verify_path(&chain(), Directedness::Directed, &[3, 2, 1, 0]).unwrap_err();
        assert!(err.to_string().contains("no directed edge from 3 to 2"));
    }

    #[test]
    fn test_reverse_allowed_when_undirected() {
        assert!(is_hamiltonian_path(
            &chain(),
            Directedness::Undirected,
            &[3, 2, 1, 0]
        ));
    }

    #[test]
    fn test_empty_graph_accepts_empty_path() {
        assert!(is_hamiltonian_path(
            &AdjacencyMatrix::new(0),
            Directedness::Directed,
            &[]
        ));
    }
}
