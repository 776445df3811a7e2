use rayon::prelude::*;
use tracing::debug;

use super::brute_force::matches_from;
use crate::{MatchPolicy, Quadruple};

/// Brute force with the `a` loop spread over the rayon pool.
///
/// Output order matches [`brute_force`](fn@super::brute_force).
pub fn brute_force_parallel(n: u32, policy: MatchPolicy) -> Vec<Quadruple> {
    let rows: Vec<Vec<Quadruple>> = (1..=n)
        .into_par_iter()
        .map(|a| {
            let mut row = Vec::new();
            matches_from(a, n, policy, &mut row);
            row
        })
        .collect();

    let found: Vec<Quadruple> = rows.into_iter().flatten().collect();
    debug!(bound = n, matches = found.len(), "parallel brute force done");
    found
}
