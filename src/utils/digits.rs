use std::collections::HashMap;

use crate::utils::errors::UtilsError;
use crate::utils::validation::validate_digit_string;

/// # Errors
///
/// Returns an error if the string is empty or contains non-digit characters.
pub fn parse_digits(digit_string: &str) -> Result<Vec<char>, UtilsError> {
    validate_digit_string(digit_string)?;
    Ok(digit_string.chars().collect())
}

/// Canonical identifier for a digit multiset: the digits sorted ascending
/// and concatenated. Invariant under any reordering of the input.
pub fn canonical_key(digits: &[char]) -> String {
    let mut sorted = digits.to_vec();
    sorted.sort_unstable();
    sorted.into_iter().collect()
}

/// Per-digit occurrence counts of the input digits.
#[derive(Debug, Clone)]
pub struct DigitMultiset {
    counts: HashMap<char, usize>,
}

impl DigitMultiset {
    pub fn from_digits(digits: &[char]) -> Self {
        let mut counts = HashMap::new();
        for &digit in digits {
            *counts.entry(digit).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// True iff the candidate uses no digit more often than this multiset supplies it.
    pub fn allows(&self, candidate: &[char]) -> bool {
        let usage = Self::from_digits(candidate);
        usage
            .counts
            .iter()
            .all(|(digit, used)| self.counts.get(digit).is_some_and(|have| used <= have))
    }
}
