use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Malformed numeral: {0}")]
    MalformedNumeral(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Complex result from negative base with fractional exponent")]
    ComplexResult,
    #[error("Square root of a negative number")]
    NegativeSquareRoot,
    #[error("Factorial of a negative number")]
    NegativeFactorial,
    #[error("Factorial of a non-integer")]
    NonIntegerFactorial,
    #[error("Factorial operand too large: {0}")]
    FactorialOverflow(f64),
    #[error("Invalid arguments for {name}: ({n}, {k})")]
    InvalidCombinatoric { name: &'static str, n: f64, k: f64 },
}
