pub mod quadruple;
pub mod strategies;

pub use quadruple::{MatchPolicy, Quadruple};
pub use strategies::{Strategy, brute_force, brute_force_parallel, efficient_search};

/// Turn a signed bound into a search bound.
///
/// Bounds at or below zero search nothing and map to 0. Returns None if the
/// bound does not fit in a `u32`.
pub fn clamp_bound(raw: i64) -> Option<u32> {
    u32::try_from(raw.max(0)).ok()
}

/// True if both result sequences hold the same quadruples, ignoring order.
pub fn same_matches(lhs: &[Quadruple], rhs: &[Quadruple]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }
    let mut lhs = lhs.to_vec();
    let mut rhs = rhs.to_vec();
    lhs.sort_unstable();
    rhs.sort_unstable();
    lhs == rhs
}
