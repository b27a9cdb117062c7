use std::collections::HashSet;

use log::debug;

use crate::enumerate::combinations::combinations;
use crate::utils::{DigitMultiset, canonical_key};

/// A validated split of an n-digit combination into two disjoint parts.
pub type DigitPair = (Vec<char>, Vec<char>);

/// Expressions over n digits are built by combining expressions over two
/// smaller subsets. This enumerates the subset pairs to combine: every
/// size-n combination (deduplicated by canonical key) is split into parts
/// of size i and n-i for i = 1..=n/2, keeping a split iff its combined
/// digit usage fits the input multiset. Pairs are deduplicated by the
/// unordered pair of canonical keys, so each distinct key pair is emitted
/// exactly once per n regardless of how many position sets realize it.
pub fn digit_pairs(digits: &[char], multiset: &DigitMultiset, n: usize) -> Vec<DigitPair> {
    let mut combs = Vec::new();
    let mut seen_combs = HashSet::new();
    for comb in combinations(digits, n) {
        if seen_combs.insert(canonical_key(&comb)) {
            combs.push(comb);
        }
    }

    let mut pairs = Vec::new();
    let mut seen_pairs = HashSet::new();
    for comb in &combs {
        for i in 1..=n / 2 {
            let lefts = combinations(comb, i);
            let rights = combinations(comb, n - i);
            for left in &lefts {
                for right in &rights {
                    let mut combined = left.clone();
                    combined.extend_from_slice(right);
                    if !multiset.allows(&combined) {
                        continue;
                    }

                    let key_left = canonical_key(left);
                    let key_right = canonical_key(right);
                    let pair_key = if key_left <= key_right {
                        format!("{key_left}|{key_right}")
                    } else {
                        format!("{key_right}|{key_left}")
                    };
                    if seen_pairs.insert(pair_key) {
                        pairs.push((left.clone(), right.clone()));
                    }
                }
            }
        }
    }

    debug!("{} subset pairs of combined size {}", pairs.len(), n);
    pairs
}
