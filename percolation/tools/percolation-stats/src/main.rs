#![forbid(unsafe_code)]

use clap::Parser;
use log::LevelFilter;
use percolation::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

////////////////////////////////////////////////////////////////////////////////

/// Estimates the percolation threshold of an n-by-n grid by Monte Carlo
/// simulation.
#[derive(Parser, Debug)]
#[command(author, version, about, allow_negative_numbers = true)]
struct Args {
    /// Side length of the grid.
    n: usize,

    /// Number of independent trials.
    trials: usize,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        level_filter(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let stats = match args.seed {
        Some(seed) => {
            PercolationStats::with_rng(args.n, args.trials, StdRng::seed_from_u64(seed))?
        }
        None => PercolationStats::new(args.n, args.trials)?,
    };

    print!("{stats}");

    Ok(())
}
