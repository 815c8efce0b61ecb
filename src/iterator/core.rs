use std::iter::FusedIterator;

use log::{debug, trace};

use crate::solver::{Equation, Solution};
use crate::symbols::{Slot, SlotId, SymbolTable};

use super::state::AssignmentState;

/// Pull-based depth-first search over digit assignments.
///
/// Letters are assigned in first-appearance order, digits tried in ascending
/// order. No work happens between calls to `next`.
#[derive(Debug)]
pub struct SolutionIterator<'a> {
    table: &'a mut SymbolTable,
    equation: &'a Equation,
    state: AssignmentState,
}

impl<'a> SolutionIterator<'a> {
    pub fn new(table: &'a mut SymbolTable, equation: &'a Equation) -> Self {
        table.clear_digits();
        let state = AssignmentState::new(table.len());

        debug!("Starting search over {} letters", table.len());

        Self {
            table,
            equation,
            state,
        }
    }

    fn check_leaf(&self) -> Option<Solution> {
        if self.equation.holds(self.table) {
            let solution = Solution::capture(self.equation, self.table);
            debug!("Found solution: {}", solution.decoded_equation());
            Some(solution)
        } else {
            None
        }
    }

    fn assign(&mut self, id: SlotId, digit: u8) {
        if let Some(slot) = self.table.slot_mut(id) {
            slot.assign(digit);
        }
    }

    /// Unassign a slot and return the digit it held.
    fn release(&mut self, id: SlotId) -> Option<u8> {
        let slot = self.table.slot_mut(id)?;
        let digit = slot.digit();
        slot.clear();
        digit
    }
}

impl Iterator for SolutionIterator<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_exhausted() {
            return None;
        }

        let count = self.table.len();
        if count == 0 {
            // Nothing to assign: the equation either holds or it does not.
            self.state.mark_exhausted();
            return self.check_leaf();
        }

        loop {
            let depth = self.state.depth;
            let id = SlotId(depth);
            let non_zero = self.table.slot(id).is_some_and(Slot::is_non_zero);
            let from = self.state.next_candidate.get(depth).copied().unwrap_or(0);

            match self.state.next_free_digit(from, non_zero) {
                Some(digit) => {
                    if let Some(next) = self.state.next_candidate.get_mut(depth) {
                        *next = digit + 1;
                    }
                    self.assign(id, digit);
                    trace!("Depth {}: trying {}", depth, digit);

                    if depth + 1 == count {
                        if let Some(solution) = self.check_leaf() {
                            return Some(solution);
                        }
                    } else {
                        self.state.descend(digit);
                    }
                }
                None => {
                    self.release(id);
                    if depth == 0 {
                        debug!("Search exhausted");
                        self.state.mark_exhausted();
                        return None;
                    }
                    let parent = self.release(SlotId(depth - 1));
                    self.state.ascend(parent);
                }
            }
        }
    }
}

impl FusedIterator for SolutionIterator<'_> {}
