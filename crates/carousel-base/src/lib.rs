//! # carousel-base
//!
//! Core types and utilities for the carousel cyclic-bandwidth solver.
//!
//! This crate provides the foundational building blocks used across all other
//! carousel crates, including:
//!
//! - **Graph Model**: validated vertex/edge storage and the cyclic distance
//! - **Labelings**: bijective vertex→label mappings and their realized bandwidth
//! - **Error Types**: unified error handling across the pipeline

pub mod error;
pub mod graph;
pub mod labeling;
pub mod utils;

pub use error::{Error, Result};
pub use graph::{cyclic_distance, Graph};
pub use labeling::Labeling;
