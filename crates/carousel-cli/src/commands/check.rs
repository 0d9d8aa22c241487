//! Check command: single-bound feasibility.

use std::path::PathBuf;

use clap::Args;
use carousel_base::Error;
use carousel_search::{CheckOutcome, VarisatOracle};

use super::{load_graph, parse_encoding};

#[derive(Args)]
pub struct CheckArgs {
    /// Input graph file (.rnd)
    #[arg(required = true)]
    pub input: PathBuf,

    /// The bound to test
    #[arg(short = 'k', long)]
    pub bandwidth: usize,

    /// At-most-one encoding
    #[arg(short, long, default_value = "sequential", value_parser = ["pairwise", "sequential"])]
    pub encoding: String,
}

pub fn run(args: CheckArgs) -> anyhow::Result<i32> {
    let graph = load_graph(&args.input)?;

    let outcome = match carousel_search::check(
        &graph,
        &VarisatOracle,
        args.bandwidth,
        parse_encoding(&args.encoding),
    ) {
        Ok(outcome) => outcome,
        Err(e @ (Error::ContractViolation(_) | Error::Oracle(_))) => {
            eprintln!("internal error: {e}");
            return Ok(2);
        }
        Err(e) => return Err(e.into()),
    };

    match outcome {
        CheckOutcome::Feasible(labeling) => {
            println!("s SATISFIABLE");
            for v in 1..=graph.num_vertices() {
                println!("vertex {v} -> label {}", labeling.label_of(v));
            }
            println!("c realized bandwidth: {}", labeling.bandwidth(&graph));
            Ok(0)
        }
        CheckOutcome::Infeasible => {
            println!("s UNSATISFIABLE");
            Ok(1)
        }
        CheckOutcome::Indeterminate(reason) => {
            println!("s UNKNOWN ({reason})");
            Ok(2)
        }
    }
}
