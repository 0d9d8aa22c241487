//! CLI subcommands.

pub mod bound;
pub mod check;
pub mod encode;
pub mod solve;

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use carousel_base::Graph;
use carousel_encode::AmoStrategy;

/// Reads and validates a `.rnd` graph file.
pub fn load_graph(path: &Path) -> anyhow::Result<Graph> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    carousel_format::rnd::read_graph(file)
        .with_context(|| format!("reading graph from {}", path.display()))
}

/// Maps a CLI encoding name onto its strategy.
pub fn parse_encoding(name: &str) -> AmoStrategy {
    match name {
        "pairwise" => AmoStrategy::Pairwise,
        _ => AmoStrategy::Sequential,
    }
}
