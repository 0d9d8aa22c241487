//! Variable indexing: (family, vertex, label) → DIMACS variable ids.
//!
//! Three families share one flat id space. Assignment variables
//! `x(i,j)` ("vertex i has label j") occupy [1, n²]; the sequential
//! encoding adds chain variables `s(i,j)` ("vertex i's label is ≤ j") in
//! [n²+1, 2n²] and `t(i,j)` ("label j is placed on some vertex ≤ i") in
//! [2n²+1, 3n²]. The within-family formula is `n·(i−1) + j`, offset by the
//! family base, so the mapping is a bijection with no collisions across
//! families.

use carousel_format::Lit;

/// Deterministic bijection between (family, i, j) triples and variable ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarMap {
    n: usize,
}

impl VarMap {
    /// Creates an indexer for an n-vertex instance.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Number of vertices (and labels).
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of assignment variables: the `x` family alone.
    #[must_use]
    pub fn assignment_vars(&self) -> usize {
        self.n * self.n
    }

    fn pack(&self, i: usize, j: usize) -> Lit {
        debug_assert!(i >= 1 && i <= self.n, "vertex index {i} out of range");
        debug_assert!(j >= 1 && j <= self.n, "label index {j} out of range");
        (self.n * (i - 1) + j) as Lit
    }

    /// Assignment variable: vertex `i` carries label `j`.
    #[must_use]
    pub fn x(&self, i: usize, j: usize) -> Lit {
        self.pack(i, j)
    }

    /// Chain variable of the sequential encoding: vertex `i`'s label is ≤ `j`.
    #[must_use]
    pub fn s(&self, i: usize, j: usize) -> Lit {
        self.assignment_vars() as Lit + self.pack(i, j)
    }

    /// Chain variable of the sequential encoding: label `j` is placed on
    /// some vertex ≤ `i`.
    #[must_use]
    pub fn t(&self, i: usize, j: usize) -> Lit {
        2 * self.assignment_vars() as Lit + self.pack(i, j)
    }

    /// Decodes an assignment id back to `(vertex, label)`.
    ///
    /// Ids outside [1, n²] — chain variables, or anything larger — are not
    /// assignment variables and yield `None`.
    #[must_use]
    pub fn decode_assignment(&self, id: Lit) -> Option<(usize, usize)> {
        if id < 1 || id > self.assignment_vars() as Lit {
            return None;
        }
        let idx = (id - 1) as usize;
        Some((idx / self.n + 1, idx % self.n + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_x_range_matches_formula() {
        let vars = VarMap::new(4);
        assert_eq!(vars.x(1, 1), 1);
        assert_eq!(vars.x(1, 4), 4);
        assert_eq!(vars.x(2, 1), 5);
        assert_eq!(vars.x(4, 4), 16);
    }

    #[test]
    fn test_families_are_disjoint_and_collision_free() {
        let n = 5;
        let vars = VarMap::new(n);
        let mut seen = HashSet::new();
        for i in 1..=n {
            for j in 1..=n {
                for id in [vars.x(i, j), vars.s(i, j), vars.t(i, j)] {
                    assert!(id >= 1);
                    assert!(seen.insert(id), "id {id} allocated twice");
                }
            }
        }
        assert_eq!(seen.len(), 3 * n * n);
        assert_eq!(*seen.iter().max().unwrap(), (3 * n * n) as Lit);
    }

    #[test]
    fn test_decode_inverts_x() {
        let n = 6;
        let vars = VarMap::new(n);
        for i in 1..=n {
            for j in 1..=n {
                assert_eq!(vars.decode_assignment(vars.x(i, j)), Some((i, j)));
            }
        }
    }

    #[test]
    fn test_decode_rejects_chain_and_out_of_range_ids() {
        let vars = VarMap::new(4);
        assert_eq!(vars.decode_assignment(0), None);
        assert_eq!(vars.decode_assignment(-3), None);
        assert_eq!(vars.decode_assignment(vars.s(1, 1)), None);
        assert_eq!(vars.decode_assignment(vars.t(4, 4)), None);
        assert_eq!(vars.decode_assignment(17), None);
    }
}
