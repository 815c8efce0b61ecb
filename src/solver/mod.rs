mod core;
mod equation;
mod errors;
mod solution;

pub use self::core::Solver;
pub use equation::{DecodedEquation, Equation};
pub use errors::SolverError;
pub use solution::Solution;
