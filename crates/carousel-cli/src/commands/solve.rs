//! Solve command.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use carousel_base::Error;
use carousel_format::SolveReport;
use carousel_search::{SearchConfig, SearchOutcome, SearchStrategy, VarisatOracle};

use super::{load_graph, parse_encoding};

#[derive(Args)]
pub struct SolveArgs {
    /// Input graph file (.rnd)
    #[arg(required = true)]
    pub input: PathBuf,

    /// At-most-one encoding
    #[arg(short, long, default_value = "sequential", value_parser = ["pairwise", "sequential"])]
    pub encoding: String,

    /// Bound walk order
    #[arg(short, long, default_value = "binary", value_parser = ["binary", "linear"])]
    pub search: String,

    /// Fixed starting upper bound (skips the estimator)
    #[arg(short = 'k', long)]
    pub bound: Option<usize>,

    /// Write a JSON report to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SolveArgs) -> anyhow::Result<i32> {
    let graph = load_graph(&args.input)?;
    tracing::info!(
        "loaded graph: {} vertices, {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );

    let config = SearchConfig {
        amo: parse_encoding(&args.encoding),
        strategy: match args.search.as_str() {
            "linear" => SearchStrategy::Linear,
            _ => SearchStrategy::Binary,
        },
        upper_bound: args.bound,
    };

    let start = Instant::now();
    let outcome = match carousel_search::minimize(&graph, &VarisatOracle, &config) {
        Ok(outcome) => outcome,
        Err(e @ (Error::ContractViolation(_) | Error::Oracle(_))) => {
            eprintln!("internal error: {e}");
            return Ok(2);
        }
        Err(e) => return Err(e.into()),
    };
    let elapsed = start.elapsed();

    match outcome {
        SearchOutcome::Optimum {
            bandwidth,
            labeling,
            stats,
        } => {
            for v in 1..=graph.num_vertices() {
                println!("vertex {v} -> label {}", labeling.label_of(v));
            }
            println!("CYCLIC BANDWIDTH: {bandwidth}");
            println!(
                "c probes: {} ({} sat, {} unsat), time: {:.3}s",
                stats.probes,
                stats.sat_probes,
                stats.unsat_probes,
                elapsed.as_secs_f64()
            );

            if let Some(path) = &args.output {
                let report = SolveReport {
                    bandwidth,
                    labels: labeling.labels().to_vec(),
                    probes: stats.probes,
                    sat_probes: stats.sat_probes,
                    unsat_probes: stats.unsat_probes,
                };
                fs::write(path, report.to_json()?)
                    .with_context(|| format!("writing report to {}", path.display()))?;
            }
            Ok(0)
        }
        SearchOutcome::NoSolution { .. } => {
            println!("no feasible labeling in the search window");
            Ok(1)
        }
        SearchOutcome::Indeterminate { reason, .. } => {
            println!("indeterminate: {reason}");
            Ok(2)
        }
    }
}
