use log::trace;
use num_bigint::{BigInt, Sign};

use crate::expression::ast::{CodedExpression, CodedNumber, Operator, Rpn};
use crate::expression::errors::ExpressionError;
use crate::symbols::{Slot, Symbol, SymbolTable};
use crate::utils::digits_to_number;

impl Operator {
    /// # Errors
    ///
    /// Returns an error on division by zero.
    pub fn apply(self, left: BigInt, right: BigInt) -> Result<BigInt, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right.sign() == Sign::NoSign {
                    return Err(ExpressionError::DivisionByZero);
                }
                // Integer division truncates toward zero.
                Ok(left / right)
            }
        }
    }
}

impl CodedNumber {
    /// Signed value of the digits currently behind this number.
    ///
    /// # Errors
    ///
    /// Returns an error if some letter has no digit yet.
    pub fn value(&self, table: &SymbolTable) -> Result<BigInt, ExpressionError> {
        if let Some(&symbol) = self
            .symbols
            .iter()
            .find(|&&s| table.digit_of(s).is_none())
        {
            let name = match symbol {
                Symbol::Slot(id) => table.slot(id).map_or('?', Slot::symbol),
                Symbol::Literal(digit) => char::from(b'0' + digit),
            };
            return Err(ExpressionError::Unassigned(name));
        }

        let magnitude = digits_to_number(self.symbols.iter().filter_map(|&s| table.digit_of(s)))?;
        Ok(if self.negative { -magnitude } else { magnitude })
    }
}

impl CodedExpression {
    /// # Errors
    ///
    /// Returns an error when the expression has no value under the current
    /// assignment: division by zero or an unassigned letter.
    pub fn evaluate(&self, table: &SymbolTable) -> Result<BigInt, ExpressionError> {
        if let [Rpn::Number(number)] = self.rpn.as_slice() {
            return number.value(table);
        }

        let mut stack: Vec<BigInt> = Vec::with_capacity(self.rpn.len());
        for step in &self.rpn {
            match step {
                Rpn::Number(number) => stack.push(number.value(table)?),
                Rpn::Operator(op) => {
                    let right = stack.pop();
                    let left = stack.pop();
                    let (Some(left), Some(right)) = (left, right) else {
                        return Err(ExpressionError::StackUnderflow);
                    };
                    stack.push(op.apply(left, right)?);
                }
            }
        }

        let result = stack.pop().ok_or(ExpressionError::StackUnderflow)?;
        trace!("Expression evaluated to {}", result);
        Ok(result)
    }
}
