use crate::symbols::Symbol;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn priority(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// A multi-digit operand written with letters and literal digits
#[derive(Debug, Clone, PartialEq)]
pub struct CodedNumber {
    pub(crate) symbols: Vec<Symbol>,
    pub(crate) negative: bool,
}

impl CodedNumber {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Set when a leading unary minus was folded into this number.
    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

/// One element of an expression as it was written
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(CodedNumber),
    Operator(Operator),
    /// Leading unary minus; its sign lives in the following number
    Negate,
    Open,
    Close,
}

/// One step of the evaluation order (reverse Polish notation)
#[derive(Debug, Clone, PartialEq)]
pub enum Rpn {
    Number(CodedNumber),
    Operator(Operator),
}

/// One side of an equation
#[derive(Debug, Clone, PartialEq)]
pub struct CodedExpression {
    pub(crate) tokens: Vec<Token>,
    pub(crate) rpn: Vec<Rpn>,
}

impl CodedExpression {
    /// Tokens in written order, used for display.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Precedence-resolved evaluation order.
    pub fn rpn(&self) -> &[Rpn] {
        &self.rpn
    }
}
