use num_rational::Rational64;

/// Operators taking a single operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Factorial,
    Sqrt,
}

/// Infix binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Function-call style binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryFn {
    Permutations,
    Combinations,
}

/// Arithmetic expressions built from contiguous digit literals
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A digit numeral, either an integer ("12") or a decimal fraction (".12")
    Numeral(String),
    /// A repeating decimal such as ".1(2)" = 0.1222..., carried as the
    /// exact reduced fraction so it evaluates without precision loss
    Repeating { literal: String, value: Rational64 },
    Unary(UnaryOp, Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
    Call(BinaryFn, Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Build a repeating-decimal literal from the fractional digits before
    /// the repeating group and the group itself, e.g. ("1", "2") for
    /// .1(2) = 0.1222... = 11/90.
    pub fn repeating(prefix: &str, cycle: &str) -> Option<Expression> {
        if cycle.is_empty()
            || !prefix.chars().all(|c| c.is_ascii_digit())
            || !cycle.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let full: i64 = format!("{prefix}{cycle}").parse().ok()?;
        let head: i64 = if prefix.is_empty() {
            0
        } else {
            prefix.parse().ok()?
        };
        let shift = u32::try_from(prefix.len()).ok()?;
        let width = u32::try_from(prefix.len() + cycle.len()).ok()?;
        let denominator = 10_i64.checked_pow(width)? - 10_i64.checked_pow(shift)?;

        Some(Expression::Repeating {
            literal: format!(".{prefix}({cycle})"),
            value: Rational64::new(full - head, denominator),
        })
    }

    /// Literals embed into larger expressions without parentheses.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Expression::Numeral(_) | Expression::Repeating { .. })
    }

    /// True when any subexpression is an exact repeating-decimal literal.
    pub fn has_repeating(&self) -> bool {
        match self {
            Expression::Numeral(_) => false,
            Expression::Repeating { .. } => true,
            Expression::Unary(_, operand) => operand.has_repeating(),
            Expression::Binary(_, left, right) | Expression::Call(_, left, right) => {
                left.has_repeating() || right.has_repeating()
            }
        }
    }

    /// Digit characters of every literal, in reading order. Each input digit
    /// appears exactly once here for any expression the search produces.
    pub fn digits(&self) -> Vec<char> {
        fn collect(expr: &Expression, out: &mut Vec<char>) {
            match expr {
                Expression::Numeral(text) => {
                    out.extend(text.chars().filter(char::is_ascii_digit));
                }
                Expression::Repeating { literal, .. } => {
                    out.extend(literal.chars().filter(char::is_ascii_digit));
                }
                Expression::Unary(_, operand) => collect(operand, out),
                Expression::Binary(_, left, right) | Expression::Call(_, left, right) => {
                    collect(left, out);
                    collect(right, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
