//! A single letter cell of the grid

use crate::core::Verdict;

/// Visual state of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Neutral,
    /// Letter scored against the secret word
    Scored(Verdict),
    /// Row was rejected as not-a-word
    Flash,
}

/// One position of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: usize,
    letter: Option<char>,
    state: CellState,
    resolved: bool,
}

impl Cell {
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self {
            position,
            letter: None,
            state: CellState::Neutral,
            resolved: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Whether the row border has been switched to its resolved look
    #[inline]
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// A cell of an already submitted row; keys no longer touch it
    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        !matches!(self.state, CellState::Neutral)
    }

    pub(crate) const fn set_letter(&mut self, letter: char) {
        self.letter = Some(letter);
    }

    pub(crate) const fn clear(&mut self) {
        self.letter = None;
    }

    pub(crate) const fn score(&mut self, verdict: Verdict) {
        self.state = CellState::Scored(verdict);
        self.resolved = true;
    }

    pub(crate) const fn flash(&mut self) {
        self.state = CellState::Flash;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty_and_neutral() {
        let cell = Cell::new(7);
        assert_eq!(cell.position(), 7);
        assert!(cell.is_empty());
        assert_eq!(cell.state(), CellState::Neutral);
        assert!(!cell.is_locked());
        assert!(!cell.is_resolved());
    }

    #[test]
    fn scoring_locks_and_resolves() {
        let mut cell = Cell::new(0);
        cell.set_letter('a');
        cell.score(Verdict::Present);
        assert_eq!(cell.state(), CellState::Scored(Verdict::Present));
        assert!(cell.is_locked());
        assert!(cell.is_resolved());
        assert_eq!(cell.letter(), Some('a'));
    }

    #[test]
    fn flash_locks_without_resolving() {
        let mut cell = Cell::new(3);
        cell.set_letter('z');
        cell.flash();
        assert!(cell.is_locked());
        assert!(!cell.is_resolved());
    }
}
