use num_rational::Rational64;

use crate::expression::ast::{BinaryFn, BinaryOp, Expression, UnaryOp};
use crate::expression::errors::ExpressionError;

fn numeral(text: &str) -> Expression {
    Expression::Numeral(text.to_string())
}

fn binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
    Expression::Binary(op, Box::new(left), Box::new(right))
}

#[test]
fn test_numeral_integer() {
    let result = numeral("12").evaluate();
    assert_eq!(result, Ok(12.0));
}

#[test]
fn test_numeral_decimal_fraction() {
    let result = numeral(".12").evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 0.12).abs() < 1e-12);
    }
}

#[test]
fn test_repeating_single_digit_cycle() {
    let expr = Expression::repeating("", "2");
    assert!(expr.is_some());
    if let Some(Expression::Repeating { literal, value }) = &expr {
        assert_eq!(literal, ".(2)");
        assert_eq!(*value, Rational64::new(2, 9));
    }
    if let Some(expr) = expr {
        let result = expr.evaluate();
        assert!(result.is_ok());
        if let Ok(value) = result {
            assert!((value - 2.0 / 9.0).abs() < 1e-12);
        }
    }
}

#[test]
fn test_repeating_with_prefix() {
    // .1(2) = 0.1222... = 11/90
    let expr = Expression::repeating("1", "2");
    assert!(expr.is_some());
    if let Some(Expression::Repeating { literal, value }) = &expr {
        assert_eq!(literal, ".1(2)");
        assert_eq!(*value, Rational64::new(11, 90));
    }
}

#[test]
fn test_repeating_nine_is_exactly_one() {
    let expr = Expression::repeating("", "9");
    assert!(expr.is_some());
    if let Some(expr) = expr {
        assert_eq!(expr.evaluate(), Ok(1.0));
    }
}

#[test]
fn test_repeating_rejects_empty_cycle() {
    assert!(Expression::repeating("12", "").is_none());
}

#[test]
fn test_binary_arithmetic() {
    assert_eq!(binary(BinaryOp::Add, numeral("1"), numeral("2")).evaluate(), Ok(3.0));
    assert_eq!(binary(BinaryOp::Sub, numeral("1"), numeral("2")).evaluate(), Ok(-1.0));
    assert_eq!(binary(BinaryOp::Mul, numeral("3"), numeral("4")).evaluate(), Ok(12.0));
    assert_eq!(binary(BinaryOp::Div, numeral("8"), numeral("2")).evaluate(), Ok(4.0));
    assert_eq!(binary(BinaryOp::Pow, numeral("2"), numeral("5")).evaluate(), Ok(32.0));
}

#[test]
fn test_division_by_zero() {
    let result = binary(BinaryOp::Div, numeral("1"), numeral("0")).evaluate();
    assert_eq!(result, Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_negative_base_fractional_exponent() {
    let negative_two = Expression::Unary(UnaryOp::Neg, Box::new(numeral("2")));
    let result = binary(BinaryOp::Pow, negative_two, numeral(".5")).evaluate();
    assert_eq!(result, Err(ExpressionError::ComplexResult));
}

#[test]
fn test_sqrt() {
    let expr = Expression::Unary(UnaryOp::Sqrt, Box::new(numeral("49")));
    assert_eq!(expr.evaluate(), Ok(7.0));
}

#[test]
fn test_sqrt_of_negative() {
    let operand = Expression::Unary(UnaryOp::Neg, Box::new(numeral("4")));
    let expr = Expression::Unary(UnaryOp::Sqrt, Box::new(operand));
    assert_eq!(expr.evaluate(), Err(ExpressionError::NegativeSquareRoot));
}

#[test]
fn test_factorial() {
    let expr = Expression::Unary(UnaryOp::Factorial, Box::new(numeral("5")));
    assert_eq!(expr.evaluate(), Ok(120.0));
}

#[test]
fn test_factorial_of_negative() {
    let operand = Expression::Unary(UnaryOp::Neg, Box::new(numeral("3")));
    let expr = Expression::Unary(UnaryOp::Factorial, Box::new(operand));
    assert_eq!(expr.evaluate(), Err(ExpressionError::NegativeFactorial));
}

#[test]
fn test_factorial_of_non_integer() {
    let expr = Expression::Unary(UnaryOp::Factorial, Box::new(numeral(".5")));
    assert_eq!(expr.evaluate(), Err(ExpressionError::NonIntegerFactorial));
}

#[test]
fn test_factorial_overflow() {
    let expr = Expression::Unary(UnaryOp::Factorial, Box::new(numeral("171")));
    assert_eq!(expr.evaluate(), Err(ExpressionError::FactorialOverflow(171.0)));
}

#[test]
fn test_permutations() {
    let expr = Expression::Call(
        BinaryFn::Permutations,
        Box::new(numeral("5")),
        Box::new(numeral("2")),
    );
    assert_eq!(expr.evaluate(), Ok(20.0));
}

#[test]
fn test_combinations() {
    let expr = Expression::Call(
        BinaryFn::Combinations,
        Box::new(numeral("5")),
        Box::new(numeral("2")),
    );
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 10.0).abs() < 1e-9);
    }
}

#[test]
fn test_combinatorics_reject_k_greater_than_n() {
    let expr = Expression::Call(
        BinaryFn::Permutations,
        Box::new(numeral("2")),
        Box::new(numeral("5")),
    );
    assert!(expr.evaluate().is_err());
}

#[test]
fn test_combinatorics_reject_non_integer() {
    let expr = Expression::Call(
        BinaryFn::Combinations,
        Box::new(numeral(".5")),
        Box::new(numeral("2")),
    );
    assert!(expr.evaluate().is_err());
}

#[test]
fn test_display_flat_binary() {
    let expr = binary(BinaryOp::Add, numeral("1"), numeral("2"));
    assert_eq!(format!("{}", expr), "1 + 2");
}

#[test]
fn test_display_parenthesizes_nested_operands() {
    let sum = binary(BinaryOp::Add, numeral("1"), numeral("2"));
    let expr = binary(BinaryOp::Mul, sum, numeral("3"));
    assert_eq!(format!("{}", expr), "(1 + 2) * 3");
}

#[test]
fn test_display_unary() {
    let neg = Expression::Unary(UnaryOp::Neg, Box::new(numeral("5")));
    assert_eq!(format!("{}", neg), "-5");

    let fact = Expression::Unary(UnaryOp::Factorial, Box::new(numeral("3")));
    assert_eq!(format!("{}", fact), "3!");

    let sum = binary(BinaryOp::Add, numeral("1"), numeral("2"));
    let fact_of_sum = Expression::Unary(UnaryOp::Factorial, Box::new(sum));
    assert_eq!(format!("{}", fact_of_sum), "(1 + 2)!");

    let sqrt = Expression::Unary(UnaryOp::Sqrt, Box::new(numeral("4")));
    assert_eq!(format!("{}", sqrt), "sqrt(4)");
}

#[test]
fn test_display_call() {
    let expr = Expression::Call(
        BinaryFn::Permutations,
        Box::new(numeral("5")),
        Box::new(numeral("2")),
    );
    assert_eq!(format!("{}", expr), "permutations(5, 2)");
}

#[test]
fn test_display_repeating_literal() {
    let expr = Expression::repeating("1", "2");
    assert!(expr.is_some());
    if let Some(expr) = expr {
        assert_eq!(format!("{}", expr), ".1(2)");
    }
}

#[test]
fn test_has_repeating() {
    let plain = binary(BinaryOp::Add, numeral("1"), numeral("2"));
    assert!(!plain.has_repeating());

    let repeating = Expression::repeating("", "3");
    assert!(repeating.is_some());
    if let Some(repeating) = repeating {
        let mixed = binary(BinaryOp::Mul, numeral("9"), repeating);
        assert!(mixed.has_repeating());
    }
}

#[test]
fn test_digits_in_reading_order() {
    let sqrt = Expression::Unary(UnaryOp::Sqrt, Box::new(numeral("3")));
    let expr = binary(BinaryOp::Add, numeral("12"), sqrt);
    assert_eq!(expr.digits(), vec!['1', '2', '3']);
}

#[test]
fn test_digits_of_repeating_literal() {
    let expr = Expression::repeating("2", "02");
    assert!(expr.is_some());
    if let Some(expr) = expr {
        assert_eq!(expr.digits(), vec!['2', '0', '2']);
    }
}
