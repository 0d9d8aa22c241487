//! Unified error types for carousel.

use thiserror::Error;

/// The main error type for carousel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Structurally invalid graph (bad endpoint, self-loop, no vertices).
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// Malformed graph input file.
    #[error("graph format error: {0}")]
    GraphFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The satisfiability oracle failed outright.
    #[error("oracle error: {0}")]
    Oracle(String),

    /// Encoder/oracle contract violation: a decoded labeling is not a
    /// bijection or exceeds the bound the oracle claimed satisfiable.
    #[error("internal contract violation: {0}")]
    ContractViolation(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
