//! Digit subset enumeration: permutations, combinations, and subset pairs

mod combinations;
mod pairs;
mod permutations;

pub use combinations::combinations;
pub use pairs::{DigitPair, digit_pairs};
pub use permutations::sub_permutations;
