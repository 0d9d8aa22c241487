//! JSON solve reports.

use serde::{Deserialize, Serialize};

/// The serialized outcome of a minimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// The minimum cyclic bandwidth found.
    pub bandwidth: usize,
    /// Per-vertex labels; `labels[v - 1]` is the label of vertex v.
    pub labels: Vec<usize>,
    /// Total oracle probes.
    pub probes: u64,
    /// Probes answered SAT.
    pub sat_probes: u64,
    /// Probes answered UNSAT.
    pub unsat_probes: u64,
}

impl SolveReport {
    /// Parses from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
