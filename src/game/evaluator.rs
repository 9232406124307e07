//! Guess evaluator: resolves a submitted row once the validity check answers

use super::session::Session;
use crate::core::{Feedback, Word};
use tracing::info;

/// What happened to a submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The guess is the secret word; the game is over
    Won { row: usize, feedback: Feedback },
    /// A real word, but not the secret
    Scored {
        row: usize,
        guess: Word,
        feedback: Feedback,
    },
    /// Not a word; the row flashes and nothing is scored
    Rejected { row: usize },
}

impl Resolution {
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::Won { row, .. } | Self::Scored { row, .. } | Self::Rejected { row } => *row,
        }
    }
}

/// Resolve the pending submission with the validity service's answer
///
/// Returns `None` when nothing is pending.
///
/// # Examples
/// ```
/// use wordgrid::core::Word;
/// use wordgrid::game::{Action, Resolution, Session, apply, resolve};
///
/// let mut session = Session::new(Word::new("crane").unwrap(), 6);
/// for c in "crane".chars() {
///     apply(&mut session, Action::Letter(c));
/// }
/// apply(&mut session, Action::Enter);
///
/// let resolution = resolve(&mut session, true).unwrap();
/// assert!(matches!(resolution, Resolution::Won { row: 0, .. }));
/// assert!(session.is_game_over());
/// ```
pub fn resolve(session: &mut Session, valid: bool) -> Option<Resolution> {
    let submission = session.take_pending()?;
    let row = submission.row;

    if !valid {
        for cell in session.row_mut(row) {
            cell.flash();
        }
        info!(row, "guess rejected as not a word");
        return Some(Resolution::Rejected { row });
    }

    let feedback = Feedback::calculate(&submission.guess, session.secret(), session.rule());
    for (cell, &verdict) in session.row_mut(row).iter_mut().zip(feedback.verdicts()) {
        cell.score(verdict);
    }
    session.record_scored_row();

    if submission.guess == *session.secret() {
        session.finish();
        info!(row, attempts = session.attempts(), "secret word found");
        Some(Resolution::Won { row, feedback })
    } else {
        info!(row, feedback = %feedback, "guess scored");
        Some(Resolution::Scored {
            row,
            guess: submission.guess,
            feedback,
        })
    }
}
