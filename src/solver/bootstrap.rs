use log::info;

use crate::enumerate::sub_permutations;
use crate::expression::Expression;
use crate::solver::constants::MAX_REPEATING_SOURCE_LEN;
use crate::table::ExpressionTable;
use crate::utils::canonical_key;

/// Seed the table with every base literal: plain numerals, decimal
/// fractions, and exact repeating decimals, one batch per sub-length
/// permutation of the input. Full-length values are left to binary
/// combination; permutations with a leading zero contribute nothing.
pub fn bootstrap(table: &mut ExpressionTable, digits: &[char]) {
    for permu in sub_permutations(digits) {
        if permu.len() == digits.len() {
            continue;
        }
        if permu.len() > 1 && permu[0] == '0' {
            continue;
        }

        let key = canonical_key(&permu);
        let text: String = permu.iter().collect();
        table.insert(&key, Expression::Numeral(text.clone()), None);

        // ".20" duplicates ".2" from the shorter permutation; skip trailing zeros
        if permu.last() == Some(&'0') {
            continue;
        }
        let decimal = format!(".{text}");
        table.insert(&key, Expression::Numeral(decimal.clone()), None);

        if decimal.len() <= MAX_REPEATING_SOURCE_LEN {
            // one variant per split point, longest repeating group first
            for split in 0..text.len() {
                if let Some(expr) = Expression::repeating(&text[..split], &text[split..]) {
                    table.insert(&key, expr, None);
                }
            }
        }
    }

    info!("bootstrap seeded {} witnesses", table.total_witnesses());
}
