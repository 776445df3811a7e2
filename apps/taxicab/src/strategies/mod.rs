pub mod brute_force;
pub mod indexed;
pub mod parallel;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::{MatchPolicy, Quadruple};

pub use brute_force::brute_force;
pub use indexed::efficient_search;
pub use parallel::brute_force_parallel;

/// A way of finding equal sums of cubes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Four nested loops over `[1, n]^4`
    BruteForce,
    /// Group pairs by sum, then look each pair up
    Indexed,
    /// Brute force with the outer loop spread over threads
    Parallel,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::BruteForce, Strategy::Indexed, Strategy::Parallel];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::Indexed => "indexed",
            Strategy::Parallel => "parallel",
        }
    }

    /// Run this strategy for bound `n`.
    pub fn run(self, n: u32, policy: MatchPolicy) -> Vec<Quadruple> {
        match self {
            Strategy::BruteForce => brute_force(n, policy),
            Strategy::Indexed => efficient_search(n, policy),
            Strategy::Parallel => brute_force_parallel(n, policy),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| format!("unknown strategy: {}", s))
    }
}
