use std::collections::HashMap;

use log::debug;

use super::slot::{Slot, SlotId};

/// What a single character of a number stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A literal decimal digit written in the equation
    Literal(u8),
    /// A letter, resolved to its shared slot
    Slot(SlotId),
}

/// Registry giving every distinct letter one slot.
///
/// Slots are kept in first-appearance order, which is also the order the
/// search assigns them in.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    slots: Vec<Slot>,
    index: HashMap<char, SlotId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a character: ASCII digits pass through as literals, anything
    /// else gets the slot cached for it (created on first sight).
    pub fn get(&mut self, symbol: char) -> Symbol {
        if let Some(digit) = symbol.to_digit(10) {
            return Symbol::Literal(digit as u8);
        }

        if let Some(&id) = self.index.get(&symbol) {
            return Symbol::Slot(id);
        }

        let id = SlotId(self.slots.len());
        debug!("New slot #{} for symbol '{}'", id.index(), symbol);
        self.slots.push(Slot::new(symbol));
        self.index.insert(symbol, id);
        Symbol::Slot(id)
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.index())
    }

    pub(crate) fn slot_mut(&mut self, id: SlotId) -> Option<&mut Slot> {
        self.slots.get_mut(id.index())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current digit of a symbol, `None` for an unassigned slot.
    pub fn digit_of(&self, symbol: Symbol) -> Option<u8> {
        match symbol {
            Symbol::Literal(digit) => Some(digit),
            Symbol::Slot(id) => self.slot(id).and_then(Slot::digit),
        }
    }

    /// Forget every assignment.
    pub(crate) fn clear_digits(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}
