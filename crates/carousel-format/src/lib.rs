//! # carousel-format
//!
//! File formats and documents for carousel.
//!
//! Supports:
//! - **Cnf**: the formula document handed from the encoder to the oracle
//! - **`.rnd` graphs**: the plain-text input graph format
//! - **DIMACS CNF**: standard SAT-competition export
//! - **Solve reports**: JSON result documents

pub mod cnf;
pub mod dimacs;
pub mod report;
pub mod rnd;

pub use cnf::{Clause, Cnf, Lit};
pub use report::SolveReport;
