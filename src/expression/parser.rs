use log::{debug, warn};

use crate::expression::ast::{CodedExpression, CodedNumber, Operator, Rpn, Token};
use crate::expression::errors::SyntaxError;
use crate::symbols::{Symbol, SymbolTable};

/// Raw pieces of one side of an equation
#[derive(Debug, Clone, PartialEq)]
enum Lexeme {
    Word(String),
    Mark(char),
}

/// Entries of the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Open,
    Operator(Operator),
}

/// Split on non-alphanumeric characters, each of which becomes its own mark.
fn tokenize(text: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() {
            word.push(c);
            continue;
        }
        if !word.is_empty() {
            lexemes.push(Lexeme::Word(std::mem::take(&mut word)));
        }
        if !c.is_whitespace() {
            lexemes.push(Lexeme::Mark(c));
        }
    }
    if !word.is_empty() {
        lexemes.push(Lexeme::Word(word));
    }

    lexemes
}

impl CodedNumber {
    /// Resolve every character through the table. The first slot, if the
    /// number opens with a letter, is flagged as non-zero.
    pub fn parse(word: &str, table: &mut SymbolTable) -> Self {
        let symbols: Vec<Symbol> = word.chars().map(|c| table.get(c)).collect();

        if let Some(&Symbol::Slot(id)) = symbols.first()
            && let Some(slot) = table.slot_mut(id)
        {
            slot.mark_non_zero();
        }

        Self {
            symbols,
            negative: false,
        }
    }
}

impl CodedExpression {
    /// Parse one side of an equation, registering its letters in `table`.
    ///
    /// # Errors
    ///
    /// Returns an error when the expression is empty, starts with an operator
    /// other than a unary minus before a number, has unbalanced brackets,
    /// contains an unknown operator, or has operators without operands.
    pub fn parse(text: &str, table: &mut SymbolTable) -> Result<Self, SyntaxError> {
        debug!("Parsing expression: '{}'", text);

        let lexemes = tokenize(text);
        if lexemes.is_empty() {
            warn!("Empty expression");
            return Err(SyntaxError::EmptyExpression);
        }

        let mut tokens = Vec::with_capacity(lexemes.len());
        let mut rpn = Vec::with_capacity(lexemes.len());
        let mut stack: Vec<Pending> = Vec::new();
        let mut negate_next = false;

        for (idx, lexeme) in lexemes.iter().enumerate() {
            let mark = match lexeme {
                Lexeme::Word(word) => {
                    let mut number = CodedNumber::parse(word, table);
                    number.negative = std::mem::take(&mut negate_next);
                    tokens.push(Token::Number(number.clone()));
                    rpn.push(Rpn::Number(number));
                    continue;
                }
                Lexeme::Mark(mark) => *mark,
            };

            if idx == 0 {
                if mark == '-' && matches!(lexemes.get(1), Some(Lexeme::Word(_))) {
                    negate_next = true;
                    tokens.push(Token::Negate);
                    continue;
                }
                if mark != '(' {
                    warn!("Expression '{}' starts with operator '{}'", text, mark);
                    return Err(SyntaxError::LeadingOperator(mark.to_string()));
                }
            }

            match mark {
                '(' => {
                    stack.push(Pending::Open);
                    tokens.push(Token::Open);
                }
                ')' => {
                    close_bracket(&mut stack, &mut rpn)?;
                    tokens.push(Token::Close);
                }
                _ => {
                    let op = Operator::from_char(mark).ok_or_else(|| {
                        warn!("Unknown operator '{}' in '{}'", mark, text);
                        SyntaxError::UnknownOperator(mark.to_string())
                    })?;
                    push_operator(op, &mut stack, &mut rpn);
                    tokens.push(Token::Operator(op));
                }
            }
        }

        while let Some(pending) = stack.pop() {
            match pending {
                Pending::Operator(op) => rpn.push(Rpn::Operator(op)),
                Pending::Open => {
                    warn!("Unclosed bracket in '{}'", text);
                    return Err(SyntaxError::MismatchedBrackets);
                }
            }
        }

        check_arity(&rpn)?;
        debug!("Parsed expression into {} evaluation steps", rpn.len());
        Ok(Self { tokens, rpn })
    }
}

/// Emit stacked operators of equal or higher priority, then stack `op`.
fn push_operator(op: Operator, stack: &mut Vec<Pending>, rpn: &mut Vec<Rpn>) {
    while let Some(&Pending::Operator(top)) = stack.last()
        && top.priority() >= op.priority()
    {
        stack.pop();
        rpn.push(Rpn::Operator(top));
    }
    stack.push(Pending::Operator(op));
}

/// Emit operators up to the matching open bracket, which is discarded.
fn close_bracket(stack: &mut Vec<Pending>, rpn: &mut Vec<Rpn>) -> Result<(), SyntaxError> {
    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Open => return Ok(()),
            Pending::Operator(op) => rpn.push(Rpn::Operator(op)),
        }
    }
    warn!("Closing bracket without a matching opening one");
    Err(SyntaxError::MismatchedBrackets)
}

/// Every operator needs two values and exactly one value must remain.
fn check_arity(rpn: &[Rpn]) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    for step in rpn {
        match step {
            Rpn::Number(_) => depth += 1,
            Rpn::Operator(op) => {
                if depth < 2 {
                    return Err(SyntaxError::MissingOperand(op.as_char().to_string()));
                }
                depth -= 1;
            }
        }
    }

    match depth {
        0 => Err(SyntaxError::EmptyExpression),
        1 => Ok(()),
        _ => Err(SyntaxError::MissingOperator),
    }
}
