//! Offline scoring of a guess against a known word

use crate::core::{Feedback, ScoringRule, Word, WordError};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub rule: ScoringRule,
    pub feedback: Feedback,
}

/// Score `guess` against `secret` without any service round-trip
///
/// # Errors
///
/// Returns an error if either word is not a 5-letter word.
pub fn score_guess(guess: &str, secret: &str, rule: ScoringRule) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let feedback = Feedback::calculate(&guess, &secret, rule);

    Ok(ScoreResult {
        guess,
        secret,
        rule,
        feedback,
    })
}
