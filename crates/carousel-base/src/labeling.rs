//! Vertex→label mappings and their realized cyclic bandwidth.

use crate::error::{Error, Result};
use crate::graph::{cyclic_distance, Graph};

/// A total vertex→label mapping; `labels()[v - 1]` is the label of vertex v.
///
/// Construction checks the mapping is a bijection on [1, n], so a `Labeling`
/// value is always a valid answer candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeling {
    labels: Vec<usize>,
}

impl Labeling {
    /// Builds a labeling from per-vertex labels, checking bijectivity.
    pub fn new(labels: Vec<usize>) -> Result<Self> {
        let n = labels.len();
        let mut seen = vec![false; n];
        for (idx, &label) in labels.iter().enumerate() {
            if label < 1 || label > n {
                return Err(Error::ContractViolation(format!(
                    "vertex {} carries label {label}, outside 1..={n}",
                    idx + 1
                )));
            }
            if seen[label - 1] {
                return Err(Error::ContractViolation(format!(
                    "label {label} assigned to more than one vertex"
                )));
            }
            seen[label - 1] = true;
        }
        Ok(Self { labels })
    }

    /// Label of vertex `v` (1-indexed).
    #[must_use]
    pub fn label_of(&self, v: usize) -> usize {
        self.labels[v - 1]
    }

    /// Per-vertex labels.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of vertices covered.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    /// The realized cyclic bandwidth: the maximum cyclic distance across all
    /// of the graph's edges, 0 for an edgeless graph.
    #[must_use]
    pub fn bandwidth(&self, graph: &Graph) -> usize {
        let n = self.labels.len();
        graph
            .edges()
            .iter()
            .map(|&(u, v)| cyclic_distance(n, self.label_of(u), self.label_of(v)))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeling_accepts_bijection() {
        let l = Labeling::new(vec![3, 1, 2]).unwrap();
        assert_eq!(l.label_of(1), 3);
        assert_eq!(l.label_of(3), 2);
    }

    #[test]
    fn test_labeling_rejects_duplicate_label() {
        assert!(Labeling::new(vec![1, 1, 3]).is_err());
    }

    #[test]
    fn test_labeling_rejects_out_of_range_label() {
        assert!(Labeling::new(vec![1, 2, 4]).is_err());
        assert!(Labeling::new(vec![0, 1, 2]).is_err());
    }

    #[test]
    fn test_bandwidth_of_identity_on_cycle() {
        let g = Graph::new(5, vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]).unwrap();
        let l = Labeling::new(vec![1, 2, 3, 4, 5]).unwrap();
        assert_eq!(l.bandwidth(&g), 1);
    }

    #[test]
    fn test_bandwidth_counts_worst_edge() {
        // Label 1 and 3 sit two apart on the 5-cycle of labels.
        let g = Graph::new(5, vec![(1, 2), (1, 3)]).unwrap();
        let l = Labeling::new(vec![1, 2, 3, 4, 5]).unwrap();
        assert_eq!(l.bandwidth(&g), 2);
    }

    #[test]
    fn test_bandwidth_edgeless_is_zero() {
        let g = Graph::new(3, vec![]).unwrap();
        let l = Labeling::new(vec![2, 3, 1]).unwrap();
        assert_eq!(l.bandwidth(&g), 0);
    }
}
