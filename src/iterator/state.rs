use super::constants::DIGIT_COUNT;

/// Bookkeeping for the depth-first digit search
#[derive(Debug, Clone)]
pub struct AssignmentState {
    pub(crate) used: [bool; DIGIT_COUNT],
    pub(crate) depth: usize,
    pub(crate) next_candidate: Vec<u8>,
    pub(crate) exhausted: bool,
}

impl AssignmentState {
    pub fn new(slot_count: usize) -> Self {
        Self {
            used: [false; DIGIT_COUNT],
            depth: 0,
            next_candidate: vec![0; slot_count],
            exhausted: false,
        }
    }

    /// Smallest unused digit not below `from`, skipping zero when required.
    pub fn next_free_digit(&self, from: u8, non_zero: bool) -> Option<u8> {
        (from..DIGIT_COUNT as u8).find(|&digit| {
            !self.used[usize::from(digit)] && !(non_zero && digit == 0)
        })
    }

    /// Reserve `digit` and move one slot deeper.
    pub fn descend(&mut self, digit: u8) {
        self.used[usize::from(digit)] = true;
        self.depth += 1;
        if let Some(next) = self.next_candidate.get_mut(self.depth) {
            *next = 0;
        }
    }

    /// Move one slot up and give back the digit it held.
    pub fn ascend(&mut self, digit: Option<u8>) {
        self.depth = self.depth.saturating_sub(1);
        if let Some(digit) = digit {
            self.used[usize::from(digit)] = false;
        }
    }

    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl Default for AssignmentState {
    fn default() -> Self {
        Self::new(0)
    }
}
