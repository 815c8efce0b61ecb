use thiserror::Error;

use crate::utils::UtilsError;

/// Malformed expression text, detected while parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Incorrect equation. Empty expression")]
    EmptyExpression,
    #[error(
        "Incorrect equation. Incorrect or redundant operator {0} at the beginning of an expression"
    )]
    LeadingOperator(String),
    #[error("Incorrect equation. Unknown operator \"{0}\"")]
    UnknownOperator(String),
    #[error("Incorrect equation. Incorrect brackets placement")]
    MismatchedBrackets,
    #[error("Incorrect equation. Operator {0} is missing an operand")]
    MissingOperand(String),
    #[error("Incorrect equation. Operands without an operator between them")]
    MissingOperator,
}

/// Why an expression has no value under the current assignment
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Evaluation stack underflow")]
    StackUnderflow,
    #[error("Symbol '{0}' has no digit assigned")]
    Unassigned(char),
    #[error("Invalid number: {0}")]
    Number(#[from] UtilsError),
}
