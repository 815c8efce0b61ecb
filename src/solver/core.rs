use std::fmt;

use log::{debug, warn};

use crate::expression::CodedExpression;
use crate::iterator::SolutionIterator;
use crate::iterator::constants::DIGIT_COUNT;
use crate::solver::equation::Equation;
use crate::solver::errors::SolverError;
use crate::symbols::SymbolTable;
use crate::utils::split_equation;

/// Cryptarithm solver for one equation
#[derive(Debug, Clone)]
pub struct Solver {
    table: SymbolTable,
    equation: Equation,
}

impl Solver {
    /// Parse an equation such as `SEND + MORE = MONEY`.
    ///
    /// Whitespace is ignored. Letters of any script stand for digits, ASCII
    /// digits are literals, and `+ - * /` with brackets are allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not contain exactly one `=` or if
    /// either side is not a well-formed expression.
    pub fn new(text: &str) -> Result<Self, SolverError> {
        debug!("Building solver for '{}'", text);

        let (left, right) = split_equation(text)?;
        let mut table = SymbolTable::new();
        let left = CodedExpression::parse(&left, &mut table)?;
        let right = CodedExpression::parse(&right, &mut table)?;

        if table.len() > DIGIT_COUNT {
            warn!(
                "Equation has {} distinct letters but only {} digits exist; no solution is possible",
                table.len(),
                DIGIT_COUNT
            );
        }
        debug!("Equation has {} distinct letters", table.len());

        Ok(Self {
            table,
            equation: Equation::new(left, right),
        })
    }

    /// Lazily enumerate every solution in search order.
    ///
    /// Each call starts a fresh search; dropping the iterator stops it.
    pub fn solutions(&mut self) -> SolutionIterator<'_> {
        SolutionIterator::new(&mut self.table, &self.equation)
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.table
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.equation.display(&self.table))
    }
}
