use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Removes every whitespace character, including the ones inside a number.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits an equation into its left and right sides around the only `=`.
///
/// Whitespace is stripped before splitting.
///
/// # Errors
///
/// Returns an error if the text contains no `=` or more than one.
pub fn split_equation(text: &str) -> Result<(String, String), UtilsError> {
    let compact = strip_whitespace(text);
    debug!("Splitting equation: '{}'", compact);

    let equals = compact.matches('=').count();
    match equals {
        0 => {
            warn!("Equation has no equals sign: '{}'", text);
            Err(UtilsError::MissingEquals)
        }
        1 => {
            let (left, right) = compact
                .split_once('=')
                .ok_or(UtilsError::MissingEquals)?;
            Ok((left.to_string(), right.to_string()))
        }
        n => {
            warn!("Equation has {} equals signs: '{}'", n, text);
            Err(UtilsError::TooManyEquals(n))
        }
    }
}
