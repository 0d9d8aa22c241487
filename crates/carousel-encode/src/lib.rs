//! # carousel-encode
//!
//! Translation of "a valid labeling under bound k exists" into CNF.
//!
//! Implements:
//! - Flat variable indexing for the x/s/t families
//! - Two at-most-one strategies (quadratic pairwise, linear sequential chain)
//! - The static/dynamic clause split exploited by the bound search

pub mod amo;
pub mod builder;
pub mod vars;

pub use amo::{AmoStrategy, AtMostOneEncoder, PairwiseAmo, SequentialAmo};
pub use builder::FormulaBuilder;
pub use vars::VarMap;
