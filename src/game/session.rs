//! Session state: the grid, the cursor and the hidden word
//!
//! All game state lives in one owned `Session`. The controller and the
//! evaluator are the only code that mutates it.

use super::cell::Cell;
use crate::core::{ScoringRule, WORD_LEN, Word};

/// Number of rows in a standard game
pub const DEFAULT_ROWS: usize = 6;

/// A row handed to the validity check, waiting for its verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Row index (0-based)
    pub row: usize,
    /// Cursor position Enter was pressed at (the row end)
    pub origin: usize,
    /// Row letters in reading order, lower-cased
    pub guess: Word,
}

/// Owned state of one game
#[derive(Debug, Clone)]
pub struct Session {
    cells: Vec<Cell>,
    cursor: usize,
    game_over: bool,
    attempts: usize,
    secret: Word,
    rule: ScoringRule,
    pending: Option<Submission>,
}

impl Session {
    /// Create a session with `rows` empty rows (at least one)
    ///
    /// # Examples
    /// ```
    /// use wordgrid::core::Word;
    /// use wordgrid::game::Session;
    ///
    /// let session = Session::new(Word::new("crane").unwrap(), 6);
    /// assert_eq!(session.len(), 30);
    /// assert_eq!(session.cursor(), 0);
    /// ```
    #[must_use]
    pub fn new(secret: Word, rows: usize) -> Self {
        let len = rows.max(1) * WORD_LEN;
        Self {
            cells: (0..len).map(Cell::new).collect(),
            cursor: 0,
            game_over: false,
            attempts: 0,
            secret,
            rule: ScoringRule::default(),
            pending: None,
        }
    }

    #[must_use]
    pub const fn with_rule(mut self, rule: ScoringRule) -> Self {
        self.rule = rule;
        self
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true: a session always has at least one row
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len() / WORD_LEN
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Cells of a row, or an empty slice past the end of the grid
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * WORD_LEN;
        self.cells.get(start..start + WORD_LEN).unwrap_or(&[])
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of letters scored so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.rule
    }

    #[inline]
    #[must_use]
    pub const fn pending(&self) -> Option<&Submission> {
        self.pending.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Every row has been used up without a win
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !self.game_over && self.pending.is_none() && self.cells.iter().all(Cell::is_locked)
    }

    /// Keys may mutate the grid
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        !self.game_over && self.pending.is_none()
    }

    /// Abandon the pending submission after the validity check failed
    ///
    /// The cursor returns to the submitted row's end, so the attempt is not
    /// consumed and the player can press Enter again.
    pub fn cancel_submission(&mut self) -> Option<Submission> {
        let submission = self.pending.take()?;
        self.cursor = submission.origin;
        Some(submission)
    }

    #[inline]
    pub(crate) const fn row_of(position: usize) -> usize {
        position / WORD_LEN
    }

    #[inline]
    pub(crate) const fn is_row_start(position: usize) -> bool {
        position % WORD_LEN == 0
    }

    #[inline]
    pub(crate) const fn is_row_end(position: usize) -> bool {
        (position + 1) % WORD_LEN == 0
    }

    pub(crate) const fn secret(&self) -> &Word {
        &self.secret
    }

    pub(crate) fn cell_mut(&mut self, position: usize) -> Option<&mut Cell> {
        self.cells.get_mut(position)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = row * WORD_LEN;
        self.cells
            .get_mut(start..start + WORD_LEN)
            .unwrap_or(&mut [])
    }

    pub(crate) fn move_cursor(&mut self, position: usize) {
        if position < self.cells.len() {
            self.cursor = position;
        }
    }

    pub(crate) fn begin_submission(&mut self, submission: Submission) {
        self.pending = Some(submission);
    }

    pub(crate) const fn take_pending(&mut self) -> Option<Submission> {
        self.pending.take()
    }

    pub(crate) const fn record_scored_row(&mut self) {
        self.attempts += WORD_LEN;
    }

    pub(crate) const fn finish(&mut self) {
        self.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(rows: usize) -> Session {
        Session::new(Word::new("crane").unwrap(), rows)
    }

    #[test]
    fn grid_size_follows_rows() {
        assert_eq!(session(6).len(), 30);
        assert_eq!(session(6).rows(), 6);
        assert_eq!(session(1).len(), 5);
    }

    #[test]
    fn zero_rows_clamped_to_one() {
        let s = session(0);
        assert_eq!(s.rows(), 1);
        assert!(!s.is_empty());
    }

    #[test]
    fn cells_know_their_positions() {
        let s = session(2);
        for (i, cell) in s.cells().iter().enumerate() {
            assert_eq!(cell.position(), i);
        }
        assert_eq!(s.row(1)[0].position(), 5);
        assert!(s.row(2).is_empty());
    }

    #[test]
    fn row_boundaries() {
        assert!(Session::is_row_start(0));
        assert!(Session::is_row_start(10));
        assert!(!Session::is_row_start(4));
        assert!(Session::is_row_end(4));
        assert!(Session::is_row_end(29));
        assert!(!Session::is_row_end(5));
        assert_eq!(Session::row_of(14), 2);
    }

    #[test]
    fn move_cursor_stays_in_bounds() {
        let mut s = session(1);
        s.move_cursor(4);
        assert_eq!(s.cursor(), 4);
        s.move_cursor(5);
        assert_eq!(s.cursor(), 4);
    }

    #[test]
    fn cancel_submission_restores_origin() {
        let mut s = session(2);
        s.begin_submission(Submission {
            row: 0,
            origin: 4,
            guess: Word::new("slate").unwrap(),
        });
        s.move_cursor(5);
        assert!(!s.accepts_input());

        let cancelled = s.cancel_submission().unwrap();
        assert_eq!(cancelled.row, 0);
        assert_eq!(s.cursor(), 4);
        assert!(s.accepts_input());
        assert!(s.cancel_submission().is_none());
    }

    #[test]
    fn fresh_session_is_not_exhausted() {
        let s = session(6);
        assert!(!s.is_exhausted());
        assert!(!s.is_game_over());
        assert_eq!(s.attempts(), 0);
    }
}
