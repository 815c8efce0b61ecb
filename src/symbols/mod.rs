//! Symbol table shared by every expression of one equation

mod slot;
mod table;

pub use slot::{Slot, SlotId};
pub use table::{Symbol, SymbolTable};

#[cfg(test)]
mod tests;
