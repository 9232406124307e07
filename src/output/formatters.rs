//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use crate::game::{Cell, CellState};
use colored::{ColoredString, Colorize};

/// Paint a letter the way its verdict is shown on the board
#[must_use]
pub fn paint_letter(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Exact => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// A scored guess as coloured letter tiles
#[must_use]
pub fn format_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.verdicts())
        .map(|(c, &verdict)| paint_letter(c, verdict).to_string())
        .collect()
}

/// One grid cell, with `_` for an empty one
#[must_use]
pub fn format_cell(cell: &Cell, focused: bool) -> ColoredString {
    let letter = cell.letter().unwrap_or('_');
    match cell.state() {
        CellState::Scored(verdict) => paint_letter(letter, verdict),
        CellState::Flash => format!(" {} ", letter.to_ascii_uppercase()).red().bold(),
        CellState::Neutral if focused => format!("[{}]", letter.to_ascii_uppercase()).cyan(),
        CellState::Neutral => format!(" {} ", letter.to_ascii_uppercase()).normal(),
    }
}

/// A full grid row
#[must_use]
pub fn format_row(cells: &[Cell], cursor: Option<usize>) -> String {
    cells
        .iter()
        .map(|cell| format_cell(cell, cursor == Some(cell.position())).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringRule;
    use crate::game::{Action, Session, apply};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn guess_tiles_show_uppercase_letters() {
        plain();
        let guess = Word::new("allow").unwrap();
        let secret = Word::new("apple").unwrap();
        let feedback = Feedback::calculate(&guess, &secret, ScoringRule::Membership);
        assert_eq!(format_guess(&guess, &feedback), " A  L  L  O  W ");
    }

    #[test]
    fn empty_row_shows_placeholders_and_cursor() {
        plain();
        let mut session = Session::new(Word::new("crane").unwrap(), 2);
        apply(&mut session, Action::Letter('c'));
        let row = format_row(session.row(0), Some(session.cursor()));
        assert_eq!(row, " C [_] _  _  _ ");
    }
}
