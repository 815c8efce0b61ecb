use num_bigint::{BigInt, Sign};

use crate::utils::errors::UtilsError;

/// Folds decimal digits, most significant first, into one number.
///
/// # Errors
///
/// Returns an error if there are no digits or one of them is not below ten.
pub fn digits_to_number<I>(digits: I) -> Result<BigInt, UtilsError>
where
    I: IntoIterator<Item = u8>,
{
    let digits: Vec<u8> = digits.into_iter().collect();
    if digits.is_empty() {
        return Err(UtilsError::EmptyNumber);
    }

    BigInt::from_radix_be(Sign::Plus, &digits, 10).ok_or(UtilsError::InvalidDigit)
}
