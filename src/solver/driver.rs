use log::info;

use crate::enumerate::digit_pairs;
use crate::expression::is_integer;
use crate::solver::binary::combine_pair;
use crate::solver::bootstrap::bootstrap;
use crate::solver::constants::{MAX_RESULT_VALUE, MIN_RESULT_VALUE};
use crate::solver::errors::SolverError;
use crate::solver::unary::expand_unary;
use crate::table::{ExpressionTable, Witness};
use crate::utils::{DigitMultiset, canonical_key, parse_digits};

/// Bottom-up search over digit subsets: seeds single-subset literals, then
/// for each subset size combines smaller keys with binary operators and
/// expands the new entries with unary ones, growing a single memoized
/// table. Entries for size n are complete before size n + 1 begins.
pub struct PuzzleSolver {
    digits: Vec<char>,
    multiset: DigitMultiset,
}

impl PuzzleSolver {
    /// # Errors
    ///
    /// Returns an error when the digit string is empty or contains
    /// non-digit characters.
    pub fn new(digit_string: &str) -> Result<Self, SolverError> {
        let digits = parse_digits(digit_string)?;
        let multiset = DigitMultiset::from_digits(&digits);
        Ok(Self { digits, multiset })
    }

    /// Run the full pipeline and return the witnesses for the complete
    /// digit set whose values are integers in [1, 100], ascending by value.
    pub fn solve(&self) -> Vec<Witness> {
        let mut table = ExpressionTable::new();
        bootstrap(&mut table, &self.digits);
        expand_unary(&mut table, 1);

        for n in 2..=self.digits.len() {
            let pairs = digit_pairs(&self.digits, &self.multiset, n);
            info!("size {}: {} subset pairs", n, pairs.len());

            for (left, right) in &pairs {
                let key1 = canonical_key(left);
                let key2 = canonical_key(right);
                combine_pair(&mut table, &key1, &key2);
            }
            expand_unary(&mut table, n);

            info!("size {}: {} witnesses in table", n, table.total_witnesses());
        }

        let full_key = canonical_key(&self.digits);
        let mut results: Vec<Witness> = table
            .witnesses(&full_key)
            .unwrap_or_default()
            .iter()
            .filter(|w| {
                is_integer(w.value) && w.value >= MIN_RESULT_VALUE && w.value <= MAX_RESULT_VALUE
            })
            .cloned()
            .collect();
        results.sort_by(|a, b| a.value.total_cmp(&b.value));
        results
    }
}
