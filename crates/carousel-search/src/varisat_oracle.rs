//! The varisat-backed oracle.

use carousel_base::{Error, Result};
use carousel_format::Cnf;
use varisat::{ExtendFormula, Lit, Solver};

use crate::oracle::{Model, SatOracle, SatOutcome};

/// Oracle backed by the varisat CDCL solver.
///
/// Each call builds a fresh solver instance, loads the formula, and solves
/// it to completion; no state survives between probes.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarisatOracle;

impl SatOracle for VarisatOracle {
    fn solve(&self, cnf: &Cnf) -> Result<SatOutcome> {
        let mut solver = Solver::new();
        let mut lits = Vec::new();
        for clause in cnf.clauses() {
            lits.clear();
            lits.extend(clause.iter().map(|&l| Lit::from_dimacs(l as isize)));
            solver.add_clause(&lits);
        }

        match solver.solve() {
            Ok(true) => {
                let model = solver
                    .model()
                    .ok_or_else(|| Error::Oracle("satisfiable but no model produced".into()))?;
                let true_ids = model
                    .iter()
                    .filter(|l| l.is_positive())
                    .map(|l| l.to_dimacs() as i64);
                Ok(SatOutcome::Sat(Model::from_true_ids(cnf.num_vars(), true_ids)))
            }
            Ok(false) => Ok(SatOutcome::Unsat),
            Err(e) => Ok(SatOutcome::Unknown(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sat() {
        let cnf = Cnf::from_clauses(3, vec![vec![1, -2], vec![2, 3], vec![-1, -3]]);
        match VarisatOracle.solve(&cnf).unwrap() {
            SatOutcome::Sat(model) => {
                assert!(model.is_true(1) || !model.is_true(2));
                assert!(model.is_true(2) || model.is_true(3));
                assert!(!model.is_true(1) || !model.is_true(3));
            }
            other => panic!("expected SAT, got {other:?}"),
        }
    }

    #[test]
    fn test_conflicting_units_unsat() {
        let cnf = Cnf::from_clauses(1, vec![vec![1], vec![-1]]);
        match VarisatOracle.solve(&cnf).unwrap() {
            SatOutcome::Unsat => (),
            other => panic!("expected UNSAT, got {other:?}"),
        }
    }

    #[test]
    fn test_pigeonhole_unsat() {
        // 3 pigeons, 2 holes.
        let cnf = Cnf::from_clauses(
            6,
            vec![
                vec![1, 2],
                vec![3, 4],
                vec![5, 6],
                vec![-1, -3],
                vec![-1, -5],
                vec![-3, -5],
                vec![-2, -4],
                vec![-2, -6],
                vec![-4, -6],
            ],
        );
        match VarisatOracle.solve(&cnf).unwrap() {
            SatOutcome::Unsat => (),
            other => panic!("expected UNSAT, got {other:?}"),
        }
    }

    #[test]
    fn test_fresh_instance_per_call() {
        let unsat = Cnf::from_clauses(1, vec![vec![1], vec![-1]]);
        let sat = Cnf::from_clauses(1, vec![vec![1]]);
        let oracle = VarisatOracle;
        assert!(matches!(oracle.solve(&unsat).unwrap(), SatOutcome::Unsat));
        // A second call must not inherit the first formula's clauses.
        assert!(matches!(oracle.solve(&sat).unwrap(), SatOutcome::Sat(_)));
    }
}
