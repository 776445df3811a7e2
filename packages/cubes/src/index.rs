//! Pairs grouped by their sum of cubes.

use std::collections::HashMap;

use tracing::debug;

use crate::cube::{Pair, sum_of_cubes};

/// Maps each value `x^3 + y^3` to every ordered pair `(x, y)` in `[1, n]^2`
/// producing it.
///
/// Buckets keep insertion order: `x` ascending, then `y` ascending.
///
/// # Example
///
/// ```
/// use cubes::{Pair, SumIndex};
///
/// let index = SumIndex::build(12);
/// assert_eq!(
///     index.get(1729),
///     &[Pair::new(1, 12), Pair::new(9, 10), Pair::new(10, 9), Pair::new(12, 1)]
/// );
/// assert_eq!(index.pair_count(), 144);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SumIndex {
    buckets: HashMap<u128, Vec<Pair>>,
    pairs: usize,
}

/// A sum of two cubes reachable from more than one unordered pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaxicabSum {
    pub sum: u128,
    /// Representations with `x <= y`, ordered by `x`.
    pub ways: Vec<Pair>,
}

impl SumIndex {
    /// Builds the index for bound `n`. A bound of 0 gives an empty index.
    pub fn build(n: u32) -> Self {
        let mut buckets: HashMap<u128, Vec<Pair>> = HashMap::new();
        let mut pairs = 0;

        for a in 1..=n {
            for b in 1..=n {
                buckets
                    .entry(sum_of_cubes(a, b))
                    .or_default()
                    .push(Pair::new(a, b));
                pairs += 1;
            }
        }

        debug!(bound = n, pairs, sums = buckets.len(), "built sum index");
        SumIndex { buckets, pairs }
    }

    /// Pairs whose sum of cubes is `sum`, or an empty slice.
    pub fn get(&self, sum: u128) -> &[Pair] {
        self.buckets.get(&sum).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct sums.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True if the bound was 0.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of pairs over all buckets.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    /// Every `(sum, pairs)` bucket, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u128, &[Pair])> {
        self.buckets.iter().map(|(&sum, pairs)| (sum, pairs.as_slice()))
    }

    /// Sums with at least `min_ways` unordered representations, ascending.
    ///
    /// ```
    /// use cubes::{Pair, SumIndex};
    ///
    /// let sums = SumIndex::build(20).taxicab_sums(2);
    /// assert_eq!(sums.len(), 2);
    /// assert_eq!(sums[0].sum, 1729);
    /// assert_eq!(sums[0].ways, vec![Pair::new(1, 12), Pair::new(9, 10)]);
    /// assert_eq!(sums[1].sum, 4104);
    /// ```
    pub fn taxicab_sums(&self, min_ways: usize) -> Vec<TaxicabSum> {
        let mut found: Vec<TaxicabSum> = self
            .iter()
            .filter_map(|(sum, pairs)| {
                let ways: Vec<Pair> = pairs.iter().filter(|p| p.x <= p.y).copied().collect();
                (ways.len() >= min_ways).then_some(TaxicabSum { sum, ways })
            })
            .collect();
        found.sort_by_key(|t| t.sum);
        found
    }
}
