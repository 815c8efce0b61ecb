// Configuration constants for the iterator module
pub const DIGIT_COUNT: usize = 10;
