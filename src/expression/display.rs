use std::fmt;

use crate::expression::ast::{BinaryFn, BinaryOp, Expression, UnaryOp};

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

impl BinaryFn {
    pub(crate) fn name(self) -> &'static str {
        match self {
            BinaryFn::Permutations => "permutations",
            BinaryFn::Combinations => "combinations",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            if expr.is_atomic() {
                write!(f, "{}", expr)
            } else {
                write!(f, "({})", expr)
            }
        }

        match self {
            Expression::Numeral(text) => write!(f, "{}", text),
            Expression::Repeating { literal, .. } => write!(f, "{}", literal),
            Expression::Unary(UnaryOp::Neg, operand) => {
                write!(f, "-")?;
                write_operand(f, operand)
            }
            Expression::Unary(UnaryOp::Factorial, operand) => {
                write_operand(f, operand)?;
                write!(f, "!")
            }
            Expression::Unary(UnaryOp::Sqrt, operand) => write!(f, "sqrt({})", operand),
            Expression::Binary(op, left, right) => {
                write_operand(f, left)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, right)
            }
            Expression::Call(func, left, right) => {
                write!(f, "{}({}, {})", func.name(), left, right)
            }
        }
    }
}
