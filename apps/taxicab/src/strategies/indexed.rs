use cubes::{Pair, SumIndex};
use tracing::debug;

use crate::{MatchPolicy, Quadruple};

/// Find the same quadruples as [`brute_force`](fn@super::brute_force) in O(n^2)
/// lookups.
///
/// Every pair `(a, b)` is bucketed by `a^3 + b^3` first. Then for each
/// `(c, d)` the bucket at `c^3 + d^3` yields all its partners. Results are
/// ordered by `(c, d)` ascending, then by bucket order.
///
/// # Example
///
/// ```
/// use taxicab::{MatchPolicy, Quadruple, efficient_search};
///
/// let found = efficient_search(20, MatchPolicy::Distinct);
/// assert!(found.contains(&Quadruple::new(1, 12, 9, 10)));
/// assert!(found.contains(&Quadruple::new(2, 16, 15, 9)));
/// ```
pub fn efficient_search(n: u32, policy: MatchPolicy) -> Vec<Quadruple> {
    let index = SumIndex::build(n);
    let mut found = Vec::new();

    for c in 1..=n {
        for d in 1..=n {
            let cd = Pair::new(c, d);
            found.extend(
                index
                    .get(cd.sum_of_cubes())
                    .iter()
                    .map(|&ab| Quadruple::from_pairs(ab, cd))
                    .filter(|quadruple| policy.accepts(quadruple)),
            );
        }
    }

    debug!(bound = n, matches = found.len(), "indexed search done");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bound() {
        assert!(efficient_search(0, MatchPolicy::Distinct).is_empty());
    }

    #[test]
    fn test_two_has_no_distinct_matches() {
        assert!(efficient_search(2, MatchPolicy::Distinct).is_empty());
    }

    #[test]
    fn test_lookup_order() {
        let found = efficient_search(12, MatchPolicy::Distinct);
        assert_eq!(found.len(), 8);
        // (c, d) = (1, 12) is looked up first
        assert_eq!(found[0], Quadruple::new(9, 10, 1, 12));
        assert_eq!(found[1], Quadruple::new(10, 9, 1, 12));
    }

    #[test]
    fn test_all_policy_counts_every_bucket_square() {
        let n = 17;
        let expected: usize = SumIndex::build(n).iter().map(|(_, pairs)| pairs.len().pow(2)).sum();
        assert_eq!(efficient_search(n, MatchPolicy::All).len(), expected);
    }
}
