//! Graph model: vertices 1..=n plus an undirected edge list.

use crate::error::{Error, Result};

/// An undirected graph over vertices 1..=n, immutable once constructed.
///
/// Edges are unordered pairs; duplicates are permitted (and semantically
/// redundant). Every endpoint is validated against [1, n] at construction,
/// so downstream code never re-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates a graph, validating every edge endpoint against [1, n].
    pub fn new(n: usize, edges: Vec<(usize, usize)>) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidGraph("vertex count must be positive".into()));
        }
        for &(u, v) in &edges {
            if u < 1 || u > n || v < 1 || v > n {
                return Err(Error::InvalidGraph(format!(
                    "edge ({u}, {v}) references a vertex outside 1..={n}"
                )));
            }
            if u == v {
                return Err(Error::InvalidGraph(format!("self-loop on vertex {u}")));
            }
        }
        Ok(Self { n, edges })
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// Number of edges (duplicates counted).
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The edge list: 1-indexed unordered pairs.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

/// Cyclic distance between labels `i` and `j` on the n-cycle:
/// `min(|i - j|, n - |i - j|)`.
#[must_use]
pub fn cyclic_distance(n: usize, i: usize, j: usize) -> usize {
    let d = i.abs_diff(j);
    d.min(n - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_accepts_valid_edges() {
        let g = Graph::new(4, vec![(1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 3);
    }

    #[test]
    fn test_graph_rejects_out_of_range_endpoint() {
        assert!(Graph::new(3, vec![(1, 4)]).is_err());
        assert!(Graph::new(3, vec![(0, 2)]).is_err());
    }

    #[test]
    fn test_graph_rejects_self_loop() {
        assert!(Graph::new(3, vec![(2, 2)]).is_err());
    }

    #[test]
    fn test_graph_rejects_empty_vertex_set() {
        assert!(Graph::new(0, vec![]).is_err());
    }

    #[test]
    fn test_cyclic_distance_wraps() {
        assert_eq!(cyclic_distance(5, 1, 2), 1);
        assert_eq!(cyclic_distance(5, 1, 5), 1);
        assert_eq!(cyclic_distance(5, 1, 3), 2);
        assert_eq!(cyclic_distance(5, 2, 5), 2);
        assert_eq!(cyclic_distance(6, 1, 4), 3);
    }

    #[test]
    fn test_cyclic_distance_symmetric() {
        for i in 1..=7 {
            for j in 1..=7 {
                assert_eq!(cyclic_distance(7, i, j), cyclic_distance(7, j, i));
            }
        }
    }
}
