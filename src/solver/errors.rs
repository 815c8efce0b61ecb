use thiserror::Error;

use crate::expression::SyntaxError;
use crate::utils::UtilsError;

/// Errors raised while building a solver from equation text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("{0}")]
    SyntaxError(#[from] SyntaxError),
    #[error("{0}")]
    UtilsError(#[from] UtilsError),
}
