//! The satisfiability-oracle contract.
//!
//! The search consumes any CNF solver through this narrow interface; a
//! concrete backend is a pluggable implementation behind it, which keeps
//! the pipeline independent of any specific solver's API.

use carousel_base::Result;
use carousel_format::{Cnf, Lit};

/// A truth assignment over a formula's variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    /// Creates a model from per-variable truth values (index 0 = variable 1).
    #[must_use]
    pub fn new(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// Creates a model over `num_vars` variables from the ids assigned
    /// true; everything else is false. Out-of-range ids are dropped.
    #[must_use]
    pub fn from_true_ids(num_vars: usize, ids: impl IntoIterator<Item = Lit>) -> Self {
        let mut values = vec![false; num_vars];
        for id in ids {
            if id >= 1 && id as usize <= num_vars {
                values[id as usize - 1] = true;
            }
        }
        Self { values }
    }

    /// Whether variable `id` (1-indexed) is assigned true.
    #[must_use]
    pub fn is_true(&self, id: Lit) -> bool {
        id >= 1 && self.values.get(id as usize - 1).copied().unwrap_or(false)
    }

    /// The ids assigned true, in increasing order.
    pub fn true_ids(&self) -> impl Iterator<Item = Lit> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(|(idx, _)| (idx + 1) as Lit)
    }
}

/// The outcome of a single oracle invocation.
#[derive(Debug, Clone)]
pub enum SatOutcome {
    /// Satisfiable, with one satisfying assignment.
    Sat(Model),
    /// Proven unsatisfiable.
    Unsat,
    /// Neither answer (backend failure or resource limit). Must never be
    /// read as UNSAT: that would silently prune a potentially optimal k.
    Unknown(String),
}

/// Black-box CNF satisfiability solver.
///
/// Implementations must treat every call independently — a fresh backend
/// instance per formula, no state carried across calls.
pub trait SatOracle {
    /// Decides the formula and produces a model when satisfiable.
    fn solve(&self, cnf: &Cnf) -> Result<SatOutcome>;
}
