use crate::expression::{BinaryFn, BinaryOp, Expression};
use crate::table::{ExpressionTable, OpKind};
use crate::utils::canonical_key;

const BINARY_OPS: [BinaryOp; 5] = [
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Pow,
];

const BINARY_FNS: [BinaryFn; 2] = [BinaryFn::Permutations, BinaryFn::Combinations];

/// Combine every witness pair across two sub-keys with every binary
/// operator and binary function, in both operand orders, inserting the
/// results under the merged canonical key. Keys with no surviving
/// witnesses are skipped.
pub fn combine_pair(table: &mut ExpressionTable, key1: &str, key2: &str) {
    let (Some(left), Some(right)) = (table.witnesses(key1), table.witnesses(key2)) else {
        return;
    };
    let left = left.to_vec();
    let right = right.to_vec();

    let merged_digits: Vec<char> = key1.chars().chain(key2.chars()).collect();
    let merged_key = canonical_key(&merged_digits);

    for w1 in &left {
        for w2 in &right {
            for op in BINARY_OPS {
                table.insert(
                    &merged_key,
                    Expression::Binary(
                        op,
                        Box::new(w1.expression.clone()),
                        Box::new(w2.expression.clone()),
                    ),
                    Some(OpKind::Binary(op)),
                );
                table.insert(
                    &merged_key,
                    Expression::Binary(
                        op,
                        Box::new(w2.expression.clone()),
                        Box::new(w1.expression.clone()),
                    ),
                    Some(OpKind::Binary(op)),
                );
            }

            for func in BINARY_FNS {
                table.insert(
                    &merged_key,
                    Expression::Call(
                        func,
                        Box::new(w1.expression.clone()),
                        Box::new(w2.expression.clone()),
                    ),
                    Some(OpKind::Call(func)),
                );
                table.insert(
                    &merged_key,
                    Expression::Call(
                        func,
                        Box::new(w2.expression.clone()),
                        Box::new(w1.expression.clone()),
                    ),
                    Some(OpKind::Call(func)),
                );
            }
        }
    }
}
