pub mod cube;
pub mod index;

pub use cube::{Pair, cube, sum_of_cubes};
pub use index::{SumIndex, TaxicabSum};
