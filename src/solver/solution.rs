use std::fmt;

use indexmap::IndexMap;

use crate::solver::equation::Equation;
use crate::symbols::SymbolTable;

/// One solved assignment, frozen at the moment it was found
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    decoded_equation: String,
    digits: IndexMap<char, u8>,
}

impl Solution {
    /// Snapshot the current assignment. Letters are listed in the order they
    /// first appear in the equation.
    pub(crate) fn capture(equation: &Equation, table: &SymbolTable) -> Self {
        let digits = table
            .slots()
            .iter()
            .filter_map(|slot| slot.digit().map(|digit| (slot.symbol(), digit)))
            .collect();

        Self {
            decoded_equation: equation.display(table).to_string(),
            digits,
        }
    }

    /// The equation with every letter replaced by its digit, tokens separated
    /// by single spaces.
    pub fn decoded_equation(&self) -> &str {
        &self.decoded_equation
    }

    pub fn digits(&self) -> &IndexMap<char, u8> {
        &self.digits
    }

    pub fn digit(&self, symbol: char) -> Option<u8> {
        self.digits.get(&symbol).copied()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {{", self.decoded_equation)?;
        for (idx, (symbol, digit)) in self.digits.iter().enumerate() {
            if idx != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", symbol, digit)?;
        }
        write!(f, "}}")
    }
}
