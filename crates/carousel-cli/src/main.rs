//! Carousel CLI - minimum cyclic bandwidth of a graph via a SAT oracle.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "Minimum cyclic bandwidth of a graph via SAT", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimize the cyclic bandwidth of a graph
    Solve(commands::solve::SolveArgs),
    /// Decide feasibility of a single bound
    Check(commands::check::CheckArgs),
    /// Print the structural upper-bound estimate
    Bound(commands::bound::BoundArgs),
    /// Export the CNF encoding as DIMACS
    Encode(commands::encode::EncodeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let code = match cli.command {
        Commands::Solve(args) => commands::solve::run(args)?,
        Commands::Check(args) => commands::check::run(args)?,
        Commands::Bound(args) => commands::bound::run(args)?,
        Commands::Encode(args) => commands::encode::run(args)?,
    };
    std::process::exit(code)
}
