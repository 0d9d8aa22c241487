//! # carousel-search
//!
//! The bound-search pipeline.
//!
//! Implements:
//! - Structural upper-bound estimation from graph shape
//! - The satisfiability-oracle contract and its varisat backend
//! - Binary (and linear) search over candidate bounds
//! - Decoding of satisfying models into labelings, with consistency checks

pub mod bounds;
pub mod decode;
pub mod driver;
pub mod oracle;
pub mod varisat_oracle;

pub use driver::{
    check, minimize, CheckOutcome, SearchConfig, SearchOutcome, SearchStats, SearchStrategy,
};
pub use oracle::{Model, SatOracle, SatOutcome};
pub use varisat_oracle::VarisatOracle;
