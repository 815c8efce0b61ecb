//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod parser;

pub use ast::{CodedExpression, CodedNumber, Operator, Rpn, Token};
pub use display::Decoded;
pub use errors::{ExpressionError, SyntaxError};
