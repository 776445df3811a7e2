use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use cubes::SumIndex;
use taxicab::{MatchPolicy, Quadruple, Strategy, clamp_bound, same_matches};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taxicab")]
#[command(about = "Find a, b, c, d with a^3 + b^3 = c^3 + d^3")]
struct Cli {
    /// Largest number allowed in a pair; zero or below finds nothing
    #[arg(short = 'n', long, default_value_t = 20, allow_negative_numbers = true)]
    bound: i64,

    /// Search strategy to run
    #[arg(short, long, value_enum, default_value_t = Strategy::Indexed)]
    strategy: Strategy,

    /// Run every strategy and fail if their results differ
    #[arg(long)]
    verify: bool,

    /// Also report a pair matched with itself or its reversal
    #[arg(long)]
    include_trivial: bool,

    /// Print the sums reachable from two or more unordered pairs instead
    #[arg(long)]
    list_sums: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = BufWriter::new(io::stdout().lock());
    run(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let n = clamp_bound(cli.bound).with_context(|| format!("bound {} is too large", cli.bound))?;
    let policy = if cli.include_trivial { MatchPolicy::All } else { MatchPolicy::Distinct };

    if cli.list_sums {
        for taxicab in SumIndex::build(n).taxicab_sums(2) {
            let ways: Vec<String> = taxicab.ways.iter().map(|p| p.to_string()).collect();
            writeln!(out, "{} = {}", taxicab.sum, ways.join(" = "))?;
        }
        return Ok(());
    }

    let found = if cli.verify {
        let reference = Strategy::BruteForce.run(n, policy);
        for strategy in Strategy::ALL.into_iter().skip(1) {
            cross_check(&reference, strategy, &strategy.run(n, policy))?;
        }
        reference
    } else {
        cli.strategy.run(n, policy)
    };

    for quadruple in &found {
        writeln!(out, "{}", quadruple)?;
    }

    info!(bound = n, matches = found.len(), "done");
    Ok(())
}

/// Fails unless `strategy` found the same quadruples as the brute force.
fn cross_check(reference: &[Quadruple], strategy: Strategy, found: &[Quadruple]) -> Result<()> {
    ensure!(
        same_matches(reference, found),
        "{} found {} matches but {} found {}",
        Strategy::BruteForce,
        reference.len(),
        strategy,
        found.len()
    );
    info!(%strategy, matches = found.len(), "agrees with brute force");
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
