use crate::expression::{Expression, UnaryOp, is_integer};
use crate::table::{ExpressionTable, OpKind};

const UNARY_OPS: [UnaryOp; 3] = [UnaryOp::Neg, UnaryOp::Factorial, UnaryOp::Sqrt];

/// Apply every unary operator to every witness of every key of the given
/// subset size. The snapshot keeps iteration separate from insertion. A
/// witness never receives the operator that produced it (no `--x`, `x!!`,
/// or `sqrt(sqrt(x))` chains), and negation and factorial only apply to
/// whole-number values; that also keeps factorial away from the imprecise
/// values unresolved square roots produce.
pub fn expand_unary(table: &mut ExpressionTable, len: usize) {
    for key in table.keys_of_length(len) {
        let Some(snapshot) = table.witnesses(&key) else {
            continue;
        };
        let snapshot = snapshot.to_vec();

        for witness in snapshot {
            let integral = is_integer(witness.value);
            for op in UNARY_OPS {
                if witness.op == Some(OpKind::Unary(op)) {
                    continue;
                }
                if matches!(op, UnaryOp::Neg | UnaryOp::Factorial) && !integral {
                    continue;
                }
                let expr = Expression::Unary(op, Box::new(witness.expression.clone()));
                table.insert(&key, expr, Some(OpKind::Unary(op)));
            }
        }
    }
}
