use std::fmt;

use log::trace;

use crate::expression::CodedExpression;
use crate::symbols::SymbolTable;

/// Two coded expressions joined by `=`
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    left: CodedExpression,
    right: CodedExpression,
}

impl Equation {
    pub fn new(left: CodedExpression, right: CodedExpression) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &CodedExpression {
        &self.left
    }

    pub fn right(&self) -> &CodedExpression {
        &self.right
    }

    /// True when both sides have a value under the current assignment and
    /// the values are equal. Division by zero on either side is simply a
    /// mismatch.
    pub fn holds(&self, table: &SymbolTable) -> bool {
        let left = match self.left.evaluate(table) {
            Ok(value) => value,
            Err(e) => {
                trace!("Left side undefined: {}", e);
                return false;
            }
        };
        match self.right.evaluate(table) {
            Ok(right) => left == right,
            Err(e) => {
                trace!("Right side undefined: {}", e);
                false
            }
        }
    }

    pub fn display<'a>(&'a self, table: &'a SymbolTable) -> DecodedEquation<'a> {
        DecodedEquation {
            equation: self,
            table,
        }
    }
}

/// Helper for printing an equation with the digits currently assigned
pub struct DecodedEquation<'a> {
    equation: &'a Equation,
    table: &'a SymbolTable,
}

impl fmt::Display for DecodedEquation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} = {}",
            self.equation.left.display(self.table),
            self.equation.right.display(self.table)
        )
    }
}
