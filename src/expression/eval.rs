use log::debug;
use num_traits::ToPrimitive;

use crate::expression::ast::{BinaryFn, BinaryOp, Expression, UnaryOp};
use crate::expression::errors::ExpressionError;

// Largest n with n! representable as a finite f64
const MAX_FACTORIAL_ARG: f64 = 170.0;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

#[inline]
pub(crate) fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

fn factorial(value: f64) -> Result<f64, ExpressionError> {
    if value < 0.0 {
        return Err(ExpressionError::NegativeFactorial);
    }
    if !is_integer(value) {
        return Err(ExpressionError::NonIntegerFactorial);
    }
    if value > MAX_FACTORIAL_ARG {
        return Err(ExpressionError::FactorialOverflow(value));
    }

    let n = value.round() as u64;
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }
    Ok(result)
}

fn check_combinatoric(
    name: &'static str,
    n: f64,
    k: f64,
) -> Result<(u64, u64), ExpressionError> {
    if !is_integer(n) || !is_integer(k) || n < 0.0 || k < 0.0 || k > n || n > MAX_FACTORIAL_ARG {
        return Err(ExpressionError::InvalidCombinatoric { name, n, k });
    }
    Ok((n.round() as u64, k.round() as u64))
}

/// P(n, k) = n! / (n - k)!
fn permutations(n: f64, k: f64) -> Result<f64, ExpressionError> {
    let (n, k) = check_combinatoric("permutations", n, k)?;
    let mut result = 1.0;
    for i in (n - k + 1)..=n {
        result *= i as f64;
    }
    Ok(result)
}

/// C(n, k) = n! / (k! * (n - k)!)
fn combinations(n: f64, k: f64) -> Result<f64, ExpressionError> {
    let (n, k) = check_combinatoric("combinations", n, k)?;
    let mut result = 1.0;
    for i in 1..=k {
        result = result * ((n - k + i) as f64) / (i as f64);
    }
    Ok(result)
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Raising a negative base to a fractional exponent (complex result)
    /// - Taking the square root of a negative number
    /// - Factorial of a negative, non-integer, or too-large operand
    /// - Permutations/combinations with non-integer, negative, or k > n arguments
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Numeral(text) => text
                .parse::<f64>()
                .map_err(|_| ExpressionError::MalformedNumeral(text.clone())),
            Expression::Repeating { value, .. } => Ok(value.to_f64().unwrap_or(f64::NAN)),
            Expression::Unary(UnaryOp::Neg, operand) => Ok(-operand.evaluate()?),
            Expression::Unary(UnaryOp::Factorial, operand) => factorial(operand.evaluate()?),
            Expression::Unary(UnaryOp::Sqrt, operand) => {
                let value = operand.evaluate()?;
                if value < 0.0 {
                    Err(ExpressionError::NegativeSquareRoot)
                } else {
                    Ok(value.sqrt())
                }
            }
            Expression::Binary(op, left, right) => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                match op {
                    BinaryOp::Add => Ok(left + right),
                    BinaryOp::Sub => Ok(left - right),
                    BinaryOp::Mul => Ok(left * right),
                    BinaryOp::Div => {
                        if is_zero(right) {
                            Err(ExpressionError::DivisionByZero)
                        } else {
                            Ok(left / right)
                        }
                    }
                    BinaryOp::Pow => {
                        if left < 0.0 && !is_integer(right) {
                            Err(ExpressionError::ComplexResult)
                        } else {
                            Ok(left.powf(right))
                        }
                    }
                }
            }
            Expression::Call(func, left, right) => {
                let n = left.evaluate()?;
                let k = right.evaluate()?;
                match func {
                    BinaryFn::Permutations => permutations(n, k),
                    BinaryFn::Combinations => combinations(n, k),
                }
            }
        };

        if let Err(e) = &result {
            debug!("Expression '{}' failed to evaluate: {}", self, e);
        }

        result
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{factorial, is_integer, is_zero};

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(f64::EPSILON / 2.0));
        assert!(!is_zero(f64::EPSILON * 2.0));
        assert!(!is_zero(1.0));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(1.0));
        assert!(is_integer(42.0));
        assert!(is_integer(-17.0));
        assert!(!is_integer(1.5));
        assert!(!is_integer(1.234_567));

        assert!(is_integer(2_f64.powi(53)));
        assert!(is_integer(1e15));
    }

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(5.0), Ok(120.0));
    }
}
