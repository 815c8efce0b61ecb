use std::fmt;

use crate::expression::ast::{CodedExpression, CodedNumber, Token};
use crate::symbols::{Symbol, SymbolTable};

/// Helper for printing an expression with the digits currently assigned.
///
/// Letters without a digit are printed as themselves.
pub struct Decoded<'a> {
    expression: &'a CodedExpression,
    table: &'a SymbolTable,
}

impl CodedExpression {
    pub fn display<'a>(&'a self, table: &'a SymbolTable) -> Decoded<'a> {
        Decoded {
            expression: self,
            table,
        }
    }
}

fn fmt_number(f: &mut fmt::Formatter, number: &CodedNumber, table: &SymbolTable) -> fmt::Result {
    for &symbol in number.symbols() {
        match symbol {
            Symbol::Literal(digit) => write!(f, "{}", digit)?,
            Symbol::Slot(id) => match table.slot(id) {
                Some(slot) => match slot.digit() {
                    Some(digit) => write!(f, "{}", digit)?,
                    None => write!(f, "{}", slot.symbol())?,
                },
                None => write!(f, "?")?,
            },
        }
    }
    Ok(())
}

impl fmt::Display for Decoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, token) in self.expression.tokens().iter().enumerate() {
            if idx != 0 {
                write!(f, " ")?;
            }
            match token {
                Token::Number(number) => fmt_number(f, number, self.table)?,
                Token::Operator(op) => write!(f, "{}", op.as_char())?,
                Token::Negate => write!(f, "-")?,
                Token::Open => write!(f, "(")?,
                Token::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}
