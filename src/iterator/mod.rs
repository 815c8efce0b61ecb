pub mod constants;
mod core;
pub mod state;

pub use self::core::SolutionIterator;
pub use state::AssignmentState;

#[cfg(test)]
mod tests;
