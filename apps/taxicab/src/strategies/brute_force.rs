use cubes::Pair;
use tracing::debug;

use crate::{MatchPolicy, Quadruple};

/// Check every `(a, b, c, d)` in `[1, n]^4`.
///
/// Results come out in loop order: `a` outermost, then `b`, `c`, `d`, all
/// ascending. O(n^4); kept as the reference the faster strategies are checked
/// against.
///
/// # Example
///
/// ```
/// use taxicab::{MatchPolicy, Quadruple, brute_force};
///
/// let found = brute_force(12, MatchPolicy::Distinct);
/// assert_eq!(found[0], Quadruple::new(1, 12, 9, 10));
/// assert_eq!(found.len(), 8);
/// ```
pub fn brute_force(n: u32, policy: MatchPolicy) -> Vec<Quadruple> {
    let mut found = Vec::new();
    for a in 1..=n {
        matches_from(a, n, policy, &mut found);
    }
    debug!(bound = n, matches = found.len(), "brute force done");
    found
}

/// Everything the brute force emits for a fixed `a`.
pub(crate) fn matches_from(a: u32, n: u32, policy: MatchPolicy, found: &mut Vec<Quadruple>) {
    for b in 1..=n {
        let ab = Pair::new(a, b);
        let lhs = ab.sum_of_cubes();
        for c in 1..=n {
            for d in 1..=n {
                let cd = Pair::new(c, d);
                if lhs != cd.sum_of_cubes() {
                    continue;
                }
                let quadruple = Quadruple::from_pairs(ab, cd);
                if policy.accepts(&quadruple) {
                    found.push(quadruple);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bound() {
        assert!(brute_force(0, MatchPolicy::Distinct).is_empty());
        assert!(brute_force(0, MatchPolicy::All).is_empty());
    }

    #[test]
    fn test_two_has_no_distinct_matches() {
        assert!(brute_force(2, MatchPolicy::Distinct).is_empty());
    }

    #[test]
    fn test_two_all_policy() {
        let found = brute_force(2, MatchPolicy::All);
        assert_eq!(
            found,
            vec![
                Quadruple::new(1, 1, 1, 1),
                Quadruple::new(1, 2, 1, 2),
                Quadruple::new(1, 2, 2, 1),
                Quadruple::new(2, 1, 1, 2),
                Quadruple::new(2, 1, 2, 1),
                Quadruple::new(2, 2, 2, 2),
            ]
        );
    }

    #[test]
    fn test_ramanujan_loop_order() {
        let found = brute_force(12, MatchPolicy::Distinct);
        assert_eq!(
            found,
            vec![
                Quadruple::new(1, 12, 9, 10),
                Quadruple::new(1, 12, 10, 9),
                Quadruple::new(9, 10, 1, 12),
                Quadruple::new(9, 10, 12, 1),
                Quadruple::new(10, 9, 1, 12),
                Quadruple::new(10, 9, 12, 1),
                Quadruple::new(12, 1, 9, 10),
                Quadruple::new(12, 1, 10, 9),
            ]
        );
    }
}
