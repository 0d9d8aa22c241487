//! The bound-search driver.
//!
//! Walks candidate bounds k, probing the oracle with a freshly assembled
//! formula at each step. Satisfiability is monotone non-decreasing in k —
//! loosening the bound only enlarges the set of allowed label pairs — which
//! is what licenses bisection instead of an exhaustive scan.

use carousel_base::{Graph, Labeling, Result};
use carousel_encode::{AmoStrategy, FormulaBuilder};

use crate::bounds;
use crate::decode;
use crate::oracle::{Model, SatOracle, SatOutcome};

/// How the driver walks the candidate bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Bisect [k_low, k_high]: O(log k_high) probes.
    #[default]
    Binary,
    /// Decrement from k_high until UNSAT: O(k_high) probes. Semantically
    /// equivalent; kept for comparison runs.
    Linear,
}

/// Search configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// At-most-one encoding for the formula builder.
    pub amo: AmoStrategy,
    /// Bound walk order.
    pub strategy: SearchStrategy,
    /// Fixed starting upper bound; estimated from the graph when `None`.
    pub upper_bound: Option<usize>,
}

/// Probe counters for one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Oracle invocations.
    pub probes: u64,
    /// Probes answered SAT.
    pub sat_probes: u64,
    /// Probes answered UNSAT.
    pub unsat_probes: u64,
}

/// The result of a minimization run.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The minimum feasible bound and a labeling realizing it.
    Optimum {
        /// The minimum cyclic bandwidth.
        bandwidth: usize,
        /// A labeling achieving it.
        labeling: Labeling,
        /// Probe counters.
        stats: SearchStats,
    },
    /// No bound in the window was satisfiable. With a sound upper bound
    /// this cannot happen; it signals an estimator bug or malformed input.
    NoSolution {
        /// Probe counters.
        stats: SearchStats,
    },
    /// The oracle returned an indeterminate answer; the search aborted
    /// rather than misreading it as UNSAT.
    Indeterminate {
        /// The oracle's reason.
        reason: String,
        /// Probe counters.
        stats: SearchStats,
    },
}

/// The result of a single-bound feasibility check.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// A labeling within the bound exists.
    Feasible(Labeling),
    /// No labeling within the bound exists.
    Infeasible,
    /// The oracle could not decide.
    Indeterminate(String),
}

/// Minimizes the cyclic bandwidth of `graph`.
pub fn minimize(
    graph: &Graph,
    oracle: &dyn SatOracle,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    let k_high = config
        .upper_bound
        .unwrap_or_else(|| bounds::upper_bound(graph));
    let builder = FormulaBuilder::new(graph, config.amo);
    let mut stats = SearchStats::default();
    let mut best: Option<(usize, Model)> = None;

    tracing::info!(
        n = graph.num_vertices(),
        m = graph.num_edges(),
        k_high,
        amo = ?config.amo,
        strategy = ?config.strategy,
        "starting bound search"
    );

    match config.strategy {
        SearchStrategy::Binary => {
            let mut k_low = 1;
            let mut hi = k_high;
            while k_low <= hi {
                let k = (k_low + hi) / 2;
                match probe(&builder, oracle, k, &mut stats)? {
                    SatOutcome::Sat(model) => {
                        best = Some((k, model));
                        hi = k - 1;
                    }
                    SatOutcome::Unsat => k_low = k + 1,
                    SatOutcome::Unknown(reason) => {
                        return Ok(SearchOutcome::Indeterminate { reason, stats })
                    }
                }
            }
        }
        SearchStrategy::Linear => {
            let mut k = k_high;
            while k >= 1 {
                match probe(&builder, oracle, k, &mut stats)? {
                    SatOutcome::Sat(model) => {
                        best = Some((k, model));
                        if k == 1 {
                            break;
                        }
                        k -= 1;
                    }
                    SatOutcome::Unsat => break,
                    SatOutcome::Unknown(reason) => {
                        return Ok(SearchOutcome::Indeterminate { reason, stats })
                    }
                }
            }
        }
    }

    let Some((bandwidth, model)) = best else {
        tracing::warn!(k_high, "no satisfiable bound in the search window");
        return Ok(SearchOutcome::NoSolution { stats });
    };

    let labeling = decode::decode_labeling(&model, graph.num_vertices())?;
    decode::verify(&labeling, graph, bandwidth)?;
    tracing::info!(bandwidth, probes = stats.probes, "optimum found");
    Ok(SearchOutcome::Optimum {
        bandwidth,
        labeling,
        stats,
    })
}

/// Decides feasibility of the single bound `k` and decodes the witness.
pub fn check(
    graph: &Graph,
    oracle: &dyn SatOracle,
    k: usize,
    amo: AmoStrategy,
) -> Result<CheckOutcome> {
    let builder = FormulaBuilder::new(graph, amo);
    let mut stats = SearchStats::default();
    match probe(&builder, oracle, k, &mut stats)? {
        SatOutcome::Sat(model) => {
            let labeling = decode::decode_labeling(&model, graph.num_vertices())?;
            decode::verify(&labeling, graph, k)?;
            Ok(CheckOutcome::Feasible(labeling))
        }
        SatOutcome::Unsat => Ok(CheckOutcome::Infeasible),
        SatOutcome::Unknown(reason) => Ok(CheckOutcome::Indeterminate(reason)),
    }
}

/// One oracle call: assemble the formula for `k`, solve, count.
fn probe(
    builder: &FormulaBuilder<'_>,
    oracle: &dyn SatOracle,
    k: usize,
    stats: &mut SearchStats,
) -> Result<SatOutcome> {
    let formula = builder.formula_for(k);
    tracing::debug!(k, clauses = formula.num_clauses(), "probing bound");
    stats.probes += 1;
    let outcome = oracle.solve(&formula)?;
    match &outcome {
        SatOutcome::Sat(_) => {
            stats.sat_probes += 1;
            tracing::debug!(k, "sat");
        }
        SatOutcome::Unsat => {
            stats.unsat_probes += 1;
            tracing::debug!(k, "unsat");
        }
        SatOutcome::Unknown(reason) => {
            tracing::warn!(k, %reason, "oracle indeterminate");
        }
    }
    Ok(outcome)
}
