//! Centum - find arithmetic expressions over a year's digits
//!
//! Given a string of digits (by default the four digits of a year), this
//! library searches for arithmetic expressions that use each digit exactly
//! once and evaluate to every attainable integer in [1, 100]. Expressions
//! combine contiguous numerals, decimal fractions, and repeating decimals
//! with the operators +, -, *, /, ^, !, unary negation, square root, and
//! the permutations/combinations functions.

pub mod enumerate;
pub mod expression;
pub mod solver;
pub mod table;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use solver::{PuzzleSolver, SolverError};
pub use table::{ExpressionTable, OpKind, Witness};
pub use utils::{UtilsError, validate_digit_string};

/// Find a witnessing expression for every attainable integer in [1, 100]
/// over the given digits, ascending by value.
///
/// This is a convenience wrapper that builds a solver and runs the full
/// search.
///
/// # Errors
///
/// Returns an error if the digit string is empty or contains non-digit
/// characters.
///
/// # Examples
///
/// ```
/// use centum::solve_digits;
///
/// let results = solve_digits("12")?;
/// assert!(results.iter().any(|w| w.value == 3.0));
/// # Ok::<(), centum::SolverError>(())
/// ```
pub fn solve_digits(digits: &str) -> Result<Vec<Witness>, SolverError> {
    let solver = PuzzleSolver::new(digits)?;
    Ok(solver.solve())
}
