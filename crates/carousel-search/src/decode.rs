//! Model decoding and consistency verification.

use carousel_base::{cyclic_distance, Error, Graph, Labeling, Result};
use carousel_encode::VarMap;

use crate::oracle::Model;

/// Reconstructs the vertex→label mapping from a satisfying assignment.
///
/// Only assignment-family ids (≤ n²) participate; chain variables from the
/// sequential encoding and anything out of range are skipped. The decoded
/// mapping must cover every vertex exactly once — anything else means the
/// encoder and the oracle disagree about the formula, a fatal internal
/// error rather than a normal outcome.
pub fn decode_labeling(model: &Model, n: usize) -> Result<Labeling> {
    let vars = VarMap::new(n);
    let mut labels = vec![0usize; n];
    for id in model.true_ids() {
        let Some((vertex, label)) = vars.decode_assignment(id) else {
            continue;
        };
        if labels[vertex - 1] != 0 {
            return Err(Error::ContractViolation(format!(
                "vertex {vertex} decoded with labels {} and {label}",
                labels[vertex - 1]
            )));
        }
        labels[vertex - 1] = label;
    }
    if let Some(idx) = labels.iter().position(|&l| l == 0) {
        return Err(Error::ContractViolation(format!(
            "vertex {} decoded without a label",
            idx + 1
        )));
    }
    Labeling::new(labels)
}

/// Checks a labeling against the claimed bound: every edge must stay
/// within cyclic distance `k`. Bijectivity is already guaranteed by
/// `Labeling` construction.
pub fn verify(labeling: &Labeling, graph: &Graph, k: usize) -> Result<()> {
    let n = graph.num_vertices();
    for &(u, v) in graph.edges() {
        let d = cyclic_distance(n, labeling.label_of(u), labeling.label_of(v));
        if d > k {
            return Err(Error::ContractViolation(format!(
                "edge ({u}, {v}) realizes cyclic distance {d}, above the claimed bound {k}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_identity_labeling() {
        let n = 3;
        let vars = VarMap::new(n);
        let model = Model::from_true_ids(n * n, [vars.x(1, 1), vars.x(2, 2), vars.x(3, 3)]);
        let labeling = decode_labeling(&model, n).unwrap();
        assert_eq!(labeling.labels(), &[1, 2, 3]);
    }

    #[test]
    fn test_decode_skips_chain_variable_ids() {
        let n = 3;
        let vars = VarMap::new(n);
        // Chain variables set true alongside a full permutation must not
        // perturb the decoded labeling.
        let ids = [
            vars.x(1, 2),
            vars.x(2, 3),
            vars.x(3, 1),
            vars.s(1, 2),
            vars.s(1, 3),
            vars.t(3, 1),
        ];
        let model = Model::from_true_ids(3 * n * n, ids);
        let labeling = decode_labeling(&model, n).unwrap();
        assert_eq!(labeling.labels(), &[2, 3, 1]);
    }

    #[test]
    fn test_decode_rejects_double_label() {
        let n = 3;
        let vars = VarMap::new(n);
        let model = Model::from_true_ids(
            n * n,
            [vars.x(1, 1), vars.x(1, 2), vars.x(2, 3), vars.x(3, 3)],
        );
        assert!(matches!(
            decode_labeling(&model, n),
            Err(Error::ContractViolation(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unlabeled_vertex() {
        let n = 3;
        let vars = VarMap::new(n);
        let model = Model::from_true_ids(n * n, [vars.x(1, 1), vars.x(2, 2)]);
        assert!(matches!(
            decode_labeling(&model, n),
            Err(Error::ContractViolation(_))
        ));
    }

    #[test]
    fn test_verify_flags_bound_violation() {
        let g = Graph::new(5, vec![(1, 3)]).unwrap();
        let labeling = Labeling::new(vec![1, 2, 3, 4, 5]).unwrap();
        assert!(verify(&labeling, &g, 2).is_ok());
        assert!(verify(&labeling, &g, 1).is_err());
    }
}
