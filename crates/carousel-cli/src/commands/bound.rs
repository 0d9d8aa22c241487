//! Bound command: print the estimator's output without solving.

use std::path::PathBuf;

use clap::Args;
use carousel_search::bounds;

use super::load_graph;

#[derive(Args)]
pub struct BoundArgs {
    /// Input graph file (.rnd)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Use the degree-count-only estimator
    #[arg(long)]
    pub quick: bool,
}

pub fn run(args: BoundArgs) -> anyhow::Result<i32> {
    let graph = load_graph(&args.input)?;
    let k = if args.quick {
        bounds::quick_upper_bound(&graph)
    } else {
        bounds::upper_bound(&graph)
    };
    println!("upper bound: {k}");
    Ok(0)
}
