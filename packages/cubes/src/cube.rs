//! Exact cube arithmetic.
//!
//! Cubes are computed with integer multiplication into `u128`. For any
//! `x, y <= u32::MAX` the sum `x^3 + y^3` stays below `2^97`, so no input the
//! API accepts can overflow.

use std::fmt;

/// Returns `x^3` exactly.
///
/// # Example
///
/// ```
/// use cubes::cube;
///
/// assert_eq!(cube(12), 1728);
/// assert_eq!(cube(u32::MAX), (u32::MAX as u128).pow(3));
/// ```
pub fn cube(x: u32) -> u128 {
    let x = x as u128;
    x * x * x
}

/// Returns `x^3 + y^3` exactly.
pub fn sum_of_cubes(x: u32, y: u32) -> u128 {
    cube(x) + cube(y)
}

/// An ordered pair `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub x: u32,
    pub y: u32,
}

impl Pair {
    pub fn new(x: u32, y: u32) -> Self {
        Pair { x, y }
    }

    pub fn sum_of_cubes(&self) -> u128 {
        sum_of_cubes(self.x, self.y)
    }

    pub fn reversed(&self) -> Pair {
        Pair::new(self.y, self.x)
    }

    /// True if both pairs hold the same two numbers, in either order.
    ///
    /// ```
    /// use cubes::Pair;
    ///
    /// assert!(Pair::new(1, 2).same_unordered(&Pair::new(2, 1)));
    /// assert!(Pair::new(3, 3).same_unordered(&Pair::new(3, 3)));
    /// assert!(!Pair::new(1, 12).same_unordered(&Pair::new(9, 10)));
    /// ```
    pub fn same_unordered(&self, other: &Pair) -> bool {
        self == other || *self == other.reversed()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^3 + {}^3", self.x, self.y)
    }
}
