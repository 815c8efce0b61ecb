//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::digits_to_number;
pub use errors::UtilsError;
pub use validation::{split_equation, strip_whitespace};

#[cfg(test)]
mod tests;
