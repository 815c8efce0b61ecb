//! Rebus - A library for solving cryptarithm puzzles
//!
//! A cryptarithm is an equation whose digits were replaced by letters, such as
//! `SEND + MORE = MONEY`. This library parses such equations (with `+ - * /`,
//! brackets, literal digits and letters of any script) and lazily enumerates
//! every assignment of distinct digits that makes the arithmetic true.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod symbols;
pub mod utils;

// Re-export the main public API
pub use expression::{ExpressionError, SyntaxError};
pub use iterator::SolutionIterator;
pub use solver::{Solution, Solver, SolverError};
pub use utils::UtilsError;

/// Find the first solution of an equation in search order
///
/// This is a convenience function that builds a solver and pulls a single
/// solution from it.
///
/// # Arguments
///
/// * `equation` - Equation text such as `"SEND + MORE = MONEY"`
///
/// # Returns
///
/// * `Ok(Some(Solution))` - If the equation has a solution
/// * `Ok(None)` - If no assignment of digits satisfies the equation
/// * `Err(SolverError)` - If the equation text is malformed
///
/// # Errors
///
/// This function will return an error if:
/// * The text does not contain exactly one `=`
/// * A side starts with an operator other than a unary minus
/// * Brackets are unbalanced or an operator is unknown or lacks operands
///
/// # Examples
///
/// ```
/// use rebus::find_solution;
///
/// match find_solution("AB / BC = 9") {
///     Ok(Some(solution)) => println!("Found: {}", solution),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solution(equation: &str) -> Result<Option<Solution>, SolverError> {
    let mut solver = Solver::new(equation)?;
    Ok(solver.solutions().next())
}

/// Collect every solution of an equation in search order
///
/// # Errors
///
/// Returns an error if the equation text is malformed, see [`find_solution`].
pub fn solve_all(equation: &str) -> Result<Vec<Solution>, SolverError> {
    let mut solver = Solver::new(equation)?;
    Ok(solver.solutions().collect())
}
