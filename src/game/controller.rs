//! Grid controller: key actions to cell and cursor transitions
//!
//! Every operation takes the position the key was pressed at (normally the
//! session cursor) and returns an [`Effect`] describing what changed.

use super::cell::Cell;
use super::input::Action;
use super::session::{Session, Submission};
use crate::core::letter::is_letter;
use crate::core::{WORD_LEN, Word};
use tracing::{debug, info};

/// Outcome of a single key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed (game over, pending check, locked cell, no-op key)
    Ignored,
    /// Non-letter key swallowed before it reached a cell
    Suppressed,
    /// Letter written into a cell
    Written { position: usize, letter: char },
    /// Cell emptied
    Cleared { position: usize },
    /// Row handed to the validity check
    Submitted(Submission),
}

/// Apply a decoded action at the current cursor
pub fn apply(session: &mut Session, action: Action) -> Effect {
    let position = session.cursor();
    match action {
        Action::Letter(key) => on_letter_key(session, key, position),
        Action::Backspace => on_backspace(session, position),
        Action::Enter => on_enter(session, position),
        Action::Suppress => on_non_letter_key(),
    }
}

/// Write a letter and advance the cursor, sticking at the end of a row
pub fn on_letter_key(session: &mut Session, key: char, position: usize) -> Effect {
    if !is_letter(key) {
        return on_non_letter_key();
    }
    if !editable(session, position) {
        return Effect::Ignored;
    }

    if let Some(cell) = session.cell_mut(position) {
        cell.set_letter(key);
    }

    let next = position + 1;
    if next < session.len() && next % WORD_LEN != 0 {
        session.move_cursor(next);
    } else {
        session.move_cursor(position);
    }

    debug!(position, %key, cursor = session.cursor(), "letter written");
    Effect::Written {
        position,
        letter: key,
    }
}

/// Swallow anything that is not a letter, Backspace or Enter
#[must_use]
pub const fn on_non_letter_key() -> Effect {
    Effect::Suppressed
}

/// Clear the current cell, or the previous one within the same row
pub fn on_backspace(session: &mut Session, position: usize) -> Effect {
    if !editable(session, position) {
        return Effect::Ignored;
    }

    let filled = session.cell(position).is_some_and(|cell| !cell.is_empty());
    if filled {
        if let Some(cell) = session.cell_mut(position) {
            cell.clear();
        }
        session.move_cursor(position);
        debug!(position, "cell cleared");
        return Effect::Cleared { position };
    }

    if Session::is_row_start(position) {
        session.move_cursor(position);
        return Effect::Ignored;
    }

    let previous = position - 1;
    if let Some(cell) = session.cell_mut(previous) {
        cell.clear();
    }
    session.move_cursor(previous);
    debug!(position = previous, "previous cell cleared");
    Effect::Cleared { position: previous }
}

/// Submit a complete row from its last cell
pub fn on_enter(session: &mut Session, position: usize) -> Effect {
    if !editable(session, position) || !Session::is_row_end(position) {
        return Effect::Ignored;
    }

    let row = Session::row_of(position);
    let letters: Option<String> = session
        .row(row)
        .iter()
        .map(Cell::letter)
        .collect();
    let Some(text) = letters else {
        debug!(row, "enter ignored on incomplete row");
        return Effect::Ignored;
    };
    let Ok(guess) = Word::new(text) else {
        return Effect::Ignored;
    };

    let submission = Submission {
        row,
        origin: position,
        guess,
    };
    info!(row, guess = %submission.guess, "row submitted");
    session.begin_submission(submission.clone());

    if position + 1 < session.len() {
        session.move_cursor(position + 1);
    }

    Effect::Submitted(submission)
}

fn editable(session: &Session, position: usize) -> bool {
    session.accepts_input() && session.cell(position).is_some_and(|cell| !cell.is_locked())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::evaluator::resolve;

    fn session() -> Session {
        Session::new(Word::new("crane").unwrap(), 6)
    }

    fn type_word(session: &mut Session, word: &str) {
        for c in word.chars() {
            apply(session, Action::Letter(c));
        }
    }

    fn row_text(session: &Session, row: usize) -> String {
        session
            .row(row)
            .iter()
            .map(|cell| cell.letter().unwrap_or('_'))
            .collect()
    }

    #[test]
    fn letter_writes_and_advances() {
        let mut s = session();
        let effect = apply(&mut s, Action::Letter('c'));
        assert_eq!(
            effect,
            Effect::Written {
                position: 0,
                letter: 'c'
            }
        );
        assert_eq!(s.cursor(), 1);
        assert_eq!(s.cell(0).unwrap().letter(), Some('c'));
    }

    #[test]
    fn cursor_sticks_at_row_end() {
        let mut s = session();
        type_word(&mut s, "crane");
        assert_eq!(s.cursor(), 4);

        // Further letters overwrite the last cell instead of spilling over
        apply(&mut s, Action::Letter('x'));
        assert_eq!(s.cursor(), 4);
        assert_eq!(row_text(&s, 0), "cranx");
        assert!(s.row(1).iter().all(Cell::is_empty));
    }

    #[test]
    fn non_letter_keys_are_suppressed() {
        let mut s = session();
        assert_eq!(apply(&mut s, Action::Suppress), Effect::Suppressed);
        assert_eq!(on_letter_key(&mut s, '7', 0), Effect::Suppressed);
        assert_eq!(on_letter_key(&mut s, '!', 0), Effect::Suppressed);
        assert!(s.cell(0).unwrap().is_empty());
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn backspace_clears_filled_cell_in_place() {
        let mut s = session();
        type_word(&mut s, "crane");
        let effect = apply(&mut s, Action::Backspace);
        assert_eq!(effect, Effect::Cleared { position: 4 });
        assert_eq!(s.cursor(), 4);
        assert_eq!(row_text(&s, 0), "cran_");
    }

    #[test]
    fn backspace_on_empty_cell_clears_previous() {
        let mut s = session();
        type_word(&mut s, "cr");
        assert_eq!(s.cursor(), 2);
        let effect = apply(&mut s, Action::Backspace);
        assert_eq!(effect, Effect::Cleared { position: 1 });
        assert_eq!(s.cursor(), 1);
        assert_eq!(row_text(&s, 0), "c____");
    }

    #[test]
    fn backspace_at_first_cell_never_goes_below_zero() {
        let mut s = session();
        for _ in 0..3 {
            assert_eq!(apply(&mut s, Action::Backspace), Effect::Ignored);
            assert_eq!(s.cursor(), 0);
        }
    }

    #[test]
    fn backspace_does_not_cross_into_previous_row() {
        let mut s = session();
        type_word(&mut s, "slate");
        apply(&mut s, Action::Enter);
        resolve(&mut s, true);
        assert_eq!(s.cursor(), 5);

        assert_eq!(apply(&mut s, Action::Backspace), Effect::Ignored);
        assert_eq!(s.cursor(), 5);
        assert_eq!(row_text(&s, 0), "slate");
    }

    #[test]
    fn enter_on_incomplete_row_is_noop() {
        let mut s = session();
        type_word(&mut s, "cra");
        assert_eq!(apply(&mut s, Action::Enter), Effect::Ignored);
        assert!(!s.is_pending());
        assert_eq!(s.cursor(), 3);
    }

    #[test]
    fn enter_requires_every_cell_of_the_row() {
        let mut s = session();
        on_letter_key(&mut s, 'e', 4);
        assert_eq!(on_enter(&mut s, 4), Effect::Ignored);
        assert!(!s.is_pending());
    }

    #[test]
    fn enter_away_from_row_end_is_noop() {
        let mut s = session();
        type_word(&mut s, "crane");
        assert_eq!(on_enter(&mut s, 2), Effect::Ignored);
    }

    #[test]
    fn enter_submits_in_reading_order_and_advances() {
        let mut s = session();
        type_word(&mut s, "SLaTe");
        let Effect::Submitted(submission) = apply(&mut s, Action::Enter) else {
            panic!("row should have been submitted");
        };
        assert_eq!(submission.row, 0);
        assert_eq!(submission.origin, 4);
        assert_eq!(submission.guess.text(), "slate");
        assert_eq!(s.cursor(), 5);
        assert!(s.is_pending());
    }

    #[test]
    fn input_ignored_while_pending() {
        let mut s = session();
        type_word(&mut s, "slate");
        apply(&mut s, Action::Enter);

        assert_eq!(apply(&mut s, Action::Letter('a')), Effect::Ignored);
        assert_eq!(apply(&mut s, Action::Backspace), Effect::Ignored);
        assert_eq!(apply(&mut s, Action::Enter), Effect::Ignored);
        assert!(s.cell(5).unwrap().is_empty());
    }

    #[test]
    fn locked_cells_ignore_keys() {
        let mut s = Session::new(Word::new("crane").unwrap(), 1);
        type_word(&mut s, "slate");
        apply(&mut s, Action::Enter);
        // Last row: the cursor has nowhere to go
        assert_eq!(s.cursor(), 4);
        resolve(&mut s, true);

        assert_eq!(apply(&mut s, Action::Letter('q')), Effect::Ignored);
        assert_eq!(apply(&mut s, Action::Backspace), Effect::Ignored);
        assert_eq!(apply(&mut s, Action::Enter), Effect::Ignored);
        assert_eq!(row_text(&s, 0), "slate");
    }

    #[test]
    fn out_of_range_position_ignored() {
        let mut s = session();
        assert_eq!(on_letter_key(&mut s, 'a', 30), Effect::Ignored);
        assert_eq!(on_backspace(&mut s, 99), Effect::Ignored);
        assert_eq!(on_enter(&mut s, 34), Effect::Ignored);
    }
}
