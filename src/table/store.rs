use std::collections::{HashMap, HashSet};

use log::trace;

use crate::expression::Expression;
use crate::table::constants::{MAX_FRACTION_TEXT_LEN, MAX_MAGNITUDE, ROUND_SIGNIFICANT_DIGITS};
use crate::table::witness::{OpKind, Witness};

/// Round to a fixed number of significant digits to neutralize float
/// round-off before value comparisons.
fn round_significant(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*e}", ROUND_SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Memoization store for the search: canonical digit key to the
/// deduplicated witnesses discovered for that subset. Grows monotonically;
/// `insert` is the sole mutating operation.
#[derive(Debug, Default)]
pub struct ExpressionTable {
    entries: HashMap<String, Vec<Witness>>,
    seen_values: HashMap<String, HashSet<u64>>,
}

impl ExpressionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn witnesses(&self, key: &str) -> Option<&[Witness]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Keys of exactly the given subset size, cloned so callers can keep
    /// inserting while they iterate.
    pub fn keys_of_length(&self, len: usize) -> Vec<String> {
        self.entries
            .keys()
            .filter(|key| key.len() == len)
            .cloned()
            .collect()
    }

    pub fn total_witnesses(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Evaluate a candidate and store it under the key unless it fails to
    /// evaluate, falls outside the acceptance thresholds, or duplicates the
    /// value of an earlier witness for the same key (first found wins).
    /// Returns true when the witness was kept.
    pub fn insert(&mut self, key: &str, expression: Expression, op: Option<OpKind>) -> bool {
        let value = match expression.evaluate() {
            Ok(value) => value,
            Err(err) => {
                trace!("discarding '{}': {}", expression, err);
                return false;
            }
        };

        let value = round_significant(value);
        // fold -0.0 so both zeros share one bit pattern in the dedup set
        let value = if value == 0.0 { 0.0 } else { value };

        if value.is_nan() || value.abs() >= MAX_MAGNITUDE {
            return false;
        }

        let exact_rational = expression.has_repeating();
        if !exact_rational && format!("{}", value.fract()).len() > MAX_FRACTION_TEXT_LEN {
            // long fractional tail: almost certainly round-off noise, not an answer
            return false;
        }

        let seen = self.seen_values.entry(key.to_string()).or_default();
        if !seen.insert(value.to_bits()) {
            return false;
        }

        self.entries.entry(key.to_string()).or_default().push(Witness {
            expression,
            value,
            op,
            exact_rational,
        });
        true
    }
}
