use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Incorrect equation. No sign equals (=)")]
    MissingEquals,
    #[error("Incorrect equation. Expected exactly one sign equals (=), found {0}")]
    TooManyEquals(usize),
    #[error("Number has no digits")]
    EmptyNumber,
    #[error("Number contains a digit outside 0-9")]
    InvalidDigit,
}
