//! CNF construction for "a bandwidth-k labeling exists".
//!
//! The assignment constraints (coverage both ways, at-most-one both ways,
//! the symmetry unit) do not depend on k and are built once per run; the
//! distance constraints depend on k and are rebuilt for every probe, then
//! discarded with the probe's formula.

use carousel_base::{cyclic_distance, Graph};
use carousel_format::{Clause, Cnf};

use crate::amo::AmoStrategy;
use crate::vars::VarMap;

/// Builds the CNF encodings of one graph's labeling problem.
///
/// A pure function of (graph, k, strategy): the emitted clause set is
/// satisfiable if and only if a labeling of cyclic bandwidth ≤ k exists.
pub struct FormulaBuilder<'g> {
    graph: &'g Graph,
    vars: VarMap,
    strategy: AmoStrategy,
    static_clauses: Vec<Clause>,
}

impl<'g> FormulaBuilder<'g> {
    /// Creates a builder and precomputes the k-independent clause set.
    #[must_use]
    pub fn new(graph: &'g Graph, strategy: AmoStrategy) -> Self {
        let n = graph.num_vertices();
        let vars = VarMap::new(n);
        let encoder = strategy.encoder();
        let mut clauses = Vec::new();

        // Every vertex carries at least one label, and at most one.
        for i in 1..=n {
            clauses.push((1..=n).map(|j| vars.x(i, j)).collect());
            encoder.vertex_clauses(&vars, i, &mut clauses);
        }

        // Every label lands on at least one vertex, and at most one.
        // Together with the per-vertex constraints this forces a bijection.
        for j in 1..=n {
            clauses.push((1..=n).map(|i| vars.x(i, j)).collect());
            encoder.label_clauses(&vars, j, &mut clauses);
        }

        // Rotational symmetry of the label cycle: pin vertex 1 to label 1.
        clauses.push(vec![vars.x(1, 1)]);

        Self {
            graph,
            vars,
            strategy,
            static_clauses: clauses,
        }
    }

    /// The variable indexer for this instance.
    #[must_use]
    pub fn vars(&self) -> &VarMap {
        &self.vars
    }

    /// The k-independent assignment clauses.
    #[must_use]
    pub fn static_clauses(&self) -> &[Clause] {
        &self.static_clauses
    }

    /// The distance clauses for bound `k`: every ordered label pair farther
    /// than `k` apart on the cycle is forbidden across every edge.
    #[must_use]
    pub fn distance_clauses(&self, k: usize) -> Vec<Clause> {
        let n = self.graph.num_vertices();
        let mut clauses = Vec::new();
        for j in 1..=n {
            for m in 1..=n {
                if j == m || cyclic_distance(n, j, m) <= k {
                    continue;
                }
                for &(u, v) in self.graph.edges() {
                    clauses.push(vec![-self.vars.x(u, j), -self.vars.x(v, m)]);
                }
            }
        }
        clauses
    }

    /// The complete formula for bound `k`: static part plus distance part.
    #[must_use]
    pub fn formula_for(&self, k: usize) -> Cnf {
        let num_vars = self.strategy.encoder().var_count(self.graph.num_vertices());
        let mut cnf = Cnf::from_clauses(num_vars, self.static_clauses.clone());
        cnf.extend(self.distance_clauses(k));
        cnf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle5() -> Graph {
        Graph::new(5, vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]).unwrap()
    }

    #[test]
    fn test_static_clause_count_pairwise() {
        let g = Graph::new(4, vec![(1, 2)]).unwrap();
        let builder = FormulaBuilder::new(&g, AmoStrategy::Pairwise);
        // Per vertex: 1 coverage + C(4,2) = 7; same per label; + 1 unit.
        assert_eq!(builder.static_clauses().len(), 4 * 7 + 4 * 7 + 1);
    }

    #[test]
    fn test_static_clause_count_sequential() {
        let g = Graph::new(4, vec![(1, 2)]).unwrap();
        let builder = FormulaBuilder::new(&g, AmoStrategy::Sequential);
        // Per vertex: 1 coverage + 1 + 3·(n−1) = 11; same per label; + 1 unit.
        assert_eq!(builder.static_clauses().len(), 4 * 11 + 4 * 11 + 1);
    }

    #[test]
    fn test_symmetry_unit_present() {
        let g = cycle5();
        let builder = FormulaBuilder::new(&g, AmoStrategy::Sequential);
        let vars = *builder.vars();
        assert!(builder
            .static_clauses()
            .iter()
            .any(|c| c.as_slice() == [vars.x(1, 1)]));
    }

    #[test]
    fn test_distance_clause_count_on_cycle() {
        let g = cycle5();
        let builder = FormulaBuilder::new(&g, AmoStrategy::Pairwise);
        // On 5 labels, 10 ordered pairs sit at cyclic distance 2 > 1;
        // each is forbidden across all 5 edges.
        assert_eq!(builder.distance_clauses(1).len(), 10 * 5);
    }

    #[test]
    fn test_distance_clauses_empty_at_max_distance() {
        let g = cycle5();
        let builder = FormulaBuilder::new(&g, AmoStrategy::Sequential);
        // Max cyclic distance between 5 labels is 2.
        assert!(builder.distance_clauses(2).is_empty());
        assert!(builder.distance_clauses(7).is_empty());
    }

    #[test]
    fn test_formula_is_static_plus_dynamic() {
        let g = cycle5();
        let builder = FormulaBuilder::new(&g, AmoStrategy::Sequential);
        let cnf = builder.formula_for(1);
        assert_eq!(
            cnf.num_clauses(),
            builder.static_clauses().len() + builder.distance_clauses(1).len()
        );
        assert_eq!(cnf.num_vars(), 3 * 25);
    }

    #[test]
    fn test_formula_deterministic() {
        let g = cycle5();
        let a = FormulaBuilder::new(&g, AmoStrategy::Pairwise).formula_for(1);
        let b = FormulaBuilder::new(&g, AmoStrategy::Pairwise).formula_for(1);
        assert_eq!(a, b);
    }
}
