//! Encode command: dump the CNF for a fixed bound as DIMACS.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use carousel_encode::FormulaBuilder;
use carousel_format::dimacs;

use super::{load_graph, parse_encoding};

#[derive(Args)]
pub struct EncodeArgs {
    /// Input graph file (.rnd)
    #[arg(required = true)]
    pub input: PathBuf,

    /// The bound to encode
    #[arg(short = 'k', long)]
    pub bandwidth: usize,

    /// At-most-one encoding
    #[arg(short, long, default_value = "sequential", value_parser = ["pairwise", "sequential"])]
    pub encoding: String,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<i32> {
    let graph = load_graph(&args.input)?;
    let builder = FormulaBuilder::new(&graph, parse_encoding(&args.encoding));
    let cnf = builder.formula_for(args.bandwidth);
    tracing::info!(
        "encoded bound {}: {} variables, {} clauses",
        args.bandwidth,
        cnf.num_vars(),
        cnf.num_clauses()
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            dimacs::write_dimacs(file, &cnf)?;
        }
        None => print!("{}", dimacs::to_dimacs(&cnf)),
    }
    Ok(0)
}
