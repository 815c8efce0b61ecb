use num_bigint::BigInt;

use crate::utils::{UtilsError, digits_to_number, split_equation, strip_whitespace};

#[test]
fn test_strip_whitespace() {
    assert_eq!(strip_whitespace(" SEND +\tMORE\n= MONEY "), "SEND+MORE=MONEY");
    assert_eq!(strip_whitespace("A B"), "AB");
}

#[test]
fn test_split_equation() {
    let result = split_equation("SEND + MORE = MONEY");
    assert_eq!(
        result,
        Ok(("SEND+MORE".to_string(), "MONEY".to_string()))
    );
}

#[test]
fn test_split_equation_missing_equals() {
    assert_eq!(split_equation("A + B"), Err(UtilsError::MissingEquals));
}

#[test]
fn test_split_equation_too_many_equals() {
    assert_eq!(
        split_equation("A = B = C"),
        Err(UtilsError::TooManyEquals(2))
    );
}

#[test]
fn test_split_equation_keeps_empty_sides() {
    assert_eq!(
        split_equation("=AB"),
        Ok((String::new(), "AB".to_string()))
    );
}

#[test]
fn test_digits_to_number() {
    assert_eq!(digits_to_number([1u8, 0, 0, 3, 8]), Ok(BigInt::from(10038)));
    assert_eq!(digits_to_number([0u8, 5]), Ok(BigInt::from(5)));
    assert_eq!(digits_to_number([7u8]), Ok(BigInt::from(7)));
    assert_eq!(digits_to_number([0u8, 0]), Ok(BigInt::from(0)));
}

#[test]
fn test_digits_to_number_empty() {
    assert_eq!(digits_to_number(Vec::<u8>::new()), Err(UtilsError::EmptyNumber));
}

#[test]
fn test_digits_to_number_long() {
    let result = digits_to_number(std::iter::repeat_n(9u8, 40));
    let expected = "9".repeat(40).parse::<BigInt>();
    assert!(expected.is_ok());
    if let Ok(expected) = expected {
        assert_eq!(result, Ok(expected));
    }
}

#[test]
fn test_digits_to_number_invalid_digit() {
    assert_eq!(digits_to_number([1u8, 12]), Err(UtilsError::InvalidDigit));
}
