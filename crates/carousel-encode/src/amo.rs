//! At-most-one gadgets.
//!
//! Two interchangeable encodings of the same constraint sit behind one
//! interface so the formula builder (and the equivalence tests) can swap
//! them freely. Pairwise spends O(n²) binary clauses per row but needs no
//! extra variables; the sequential chain spends O(n) clauses per row at the
//! cost of the `s`/`t` auxiliary families.

use carousel_format::Clause;

use crate::vars::VarMap;

/// Emits clauses forcing at most one variable of a row (one vertex's
/// labels) or a column (one label's vertices) to be true.
pub trait AtMostOneEncoder {
    /// At most one label on vertex `i`.
    fn vertex_clauses(&self, vars: &VarMap, i: usize, out: &mut Vec<Clause>);

    /// At most one vertex carrying label `j`.
    fn label_clauses(&self, vars: &VarMap, j: usize, out: &mut Vec<Clause>);

    /// Total variables the encoding needs for an n-vertex instance.
    fn var_count(&self, n: usize) -> usize;
}

/// Quadratic pairwise encoding: one binary clause per conflicting pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseAmo;

impl AtMostOneEncoder for PairwiseAmo {
    fn vertex_clauses(&self, vars: &VarMap, i: usize, out: &mut Vec<Clause>) {
        let n = vars.n();
        for j in 1..=n {
            for j2 in (j + 1)..=n {
                out.push(vec![-vars.x(i, j), -vars.x(i, j2)]);
            }
        }
    }

    fn label_clauses(&self, vars: &VarMap, j: usize, out: &mut Vec<Clause>) {
        let n = vars.n();
        for i in 1..=n {
            for i2 in (i + 1)..=n {
                out.push(vec![-vars.x(i, j), -vars.x(i2, j)]);
            }
        }
    }

    fn var_count(&self, n: usize) -> usize {
        n * n
    }
}

/// Linear sequential (chain) encoding over the `s`/`t` prefix variables.
///
/// `s(i,j)` accumulates "vertex i's label is ≤ j"; once the prefix is set,
/// a second label higher up is contradicted by `¬x(i,j) ∨ ¬s(i,j−1)`.
/// The `t` chain mirrors the construction with the roles of vertex and
/// label swapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialAmo;

impl AtMostOneEncoder for SequentialAmo {
    fn vertex_clauses(&self, vars: &VarMap, i: usize, out: &mut Vec<Clause>) {
        let n = vars.n();
        out.push(vec![-vars.x(i, 1), vars.s(i, 1)]);
        for j in 2..=n {
            out.push(vec![-vars.s(i, j - 1), vars.s(i, j)]);
            out.push(vec![-vars.x(i, j), vars.s(i, j)]);
            out.push(vec![-vars.x(i, j), -vars.s(i, j - 1)]);
        }
    }

    fn label_clauses(&self, vars: &VarMap, j: usize, out: &mut Vec<Clause>) {
        let n = vars.n();
        out.push(vec![-vars.x(1, j), vars.t(1, j)]);
        for i in 2..=n {
            out.push(vec![-vars.t(i - 1, j), vars.t(i, j)]);
            out.push(vec![-vars.x(i, j), vars.t(i, j)]);
            out.push(vec![-vars.x(i, j), -vars.t(i - 1, j)]);
        }
    }

    fn var_count(&self, n: usize) -> usize {
        3 * n * n
    }
}

/// Which at-most-one encoding the formula builder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmoStrategy {
    /// O(n³) static clauses total, assignment variables only.
    Pairwise,
    /// O(n²) static clauses total via the auxiliary chain variables.
    #[default]
    Sequential,
}

impl AmoStrategy {
    /// The encoder implementing this strategy.
    #[must_use]
    pub fn encoder(self) -> &'static dyn AtMostOneEncoder {
        match self {
            Self::Pairwise => &PairwiseAmo,
            Self::Sequential => &SequentialAmo,
        }
    }
}
