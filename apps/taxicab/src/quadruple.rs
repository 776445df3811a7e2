use std::fmt;

use cubes::Pair;

/// Four numbers with `a^3 + b^3 == c^3 + d^3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quadruple {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl Quadruple {
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Quadruple { a, b, c, d }
    }

    pub fn from_pairs(ab: Pair, cd: Pair) -> Self {
        Quadruple::new(ab.x, ab.y, cd.x, cd.y)
    }

    pub fn left(&self) -> Pair {
        Pair::new(self.a, self.b)
    }

    pub fn right(&self) -> Pair {
        Pair::new(self.c, self.d)
    }
}

/// Prints `a== 1b== 12c== 9d== 10`.
impl fmt::Display for Quadruple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a== {}b== {}c== {}d== {}", self.a, self.b, self.c, self.d)
    }
}

/// Which pairs with equal sums count as a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Skip `(a, b, c, d)` when `{a, b}` and `{c, d}` are the same numbers,
    /// i.e. `(c, d)` is `(a, b)` or `(b, a)`.
    #[default]
    Distinct,
    /// Keep every quadruple, self-matches included.
    All,
}

impl MatchPolicy {
    pub fn accepts(self, quadruple: &Quadruple) -> bool {
        match self {
            MatchPolicy::Distinct => !quadruple.left().same_unordered(&quadruple.right()),
            MatchPolicy::All => true,
        }
    }
}
