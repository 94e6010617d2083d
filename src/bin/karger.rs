use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use karger_mincut::{GraphLoader, KargerConfig, MinCutEstimator, ParsePolicy};

/// Estimate the minimum cut of an undirected graph with Karger's algorithm.
#[derive(Parser)]
#[command(name = "karger", version)]
struct Cli {
    /// Adjacency list: one line per vertex, its label followed by its neighbors
    input: PathBuf,

    /// Number of contraction trials (default: ceil(V^2 ln V))
    #[arg(long)]
    trials: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Spread trials over all cores
    #[arg(long)]
    parallel: bool,

    /// Reject malformed tokens instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let policy = if cli.strict {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Lenient
    };
    let mut graph = match GraphLoader::new().policy(policy).load_path(&cli.input) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = KargerConfig { trials: cli.trials };
    let mut estimator = match cli.seed {
        Some(seed) => MinCutEstimator::with_seed(config, seed),
        None => MinCutEstimator::new(config),
    };
    let report = if cli.parallel {
        estimator.estimate_parallel(&graph)
    } else {
        estimator.estimate(&mut graph)
    };

    println!("Min Cut: {}", report.min_cut);
    ExitCode::SUCCESS
}
