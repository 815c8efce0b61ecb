/// Index of a slot inside its [`SymbolTable`](crate::symbols::SymbolTable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The unknown digit behind one letter
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    symbol: char,
    digit: Option<u8>,
    non_zero: bool,
}

impl Slot {
    pub fn new(symbol: char) -> Self {
        Self {
            symbol,
            digit: None,
            non_zero: false,
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn digit(&self) -> Option<u8> {
        self.digit
    }

    /// True when the letter opens some number of the equation.
    pub fn is_non_zero(&self) -> bool {
        self.non_zero
    }

    pub(crate) fn mark_non_zero(&mut self) {
        self.non_zero = true;
    }

    pub(crate) fn assign(&mut self, digit: u8) {
        self.digit = Some(digit);
    }

    pub(crate) fn clear(&mut self) {
        self.digit = None;
    }
}
