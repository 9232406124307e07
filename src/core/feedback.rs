//! Per-letter feedback calculation and representation
//!
//! Each letter of a guess receives one of three verdicts:
//! - Exact: letter in the same position of the secret word
//! - Present: letter somewhere else in the secret word
//! - Absent: letter not in the secret word

use super::Word;
use super::word::WORD_LEN;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Exact,
    Present,
    Absent,
}

impl Verdict {
    /// Emoji square for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// How repeated guess letters are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// Plain membership check: every non-exact letter found anywhere in the
    /// secret is Present, however often it repeats in the guess.
    #[default]
    Membership,
    /// Official Wordle rule: Present verdicts are capped by the number of
    /// unmatched occurrences left in the secret.
    Standard,
}

/// Verdicts for the five letters of a guess, in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LEN]);

impl Feedback {
    /// All exact (the guess is the secret)
    pub const PERFECT: Self = Self([Verdict::Exact; WORD_LEN]);

    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LEN]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `secret` with the given rule
    ///
    /// # Examples
    /// ```
    /// use wordgrid::core::{Feedback, ScoringRule, Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret, ScoringRule::Membership);
    ///
    /// assert_eq!(feedback.verdict(2), Verdict::Exact);
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word, rule: ScoringRule) -> Self {
        match rule {
            ScoringRule::Membership => Self::membership(guess, secret),
            ScoringRule::Standard => Self::standard(guess, secret),
        }
    }

    fn membership(guess: &Word, secret: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LEN];

        for (i, (&g, &w)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            result[i] = if g == w {
                Verdict::Exact
            } else if secret.has_letter(g) {
                Verdict::Present
            } else {
                Verdict::Absent
            };
        }

        Self(result)
    }

    fn standard(guess: &Word, secret: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LEN];
        let mut secret_available = secret.char_counts();

        // First pass: exact matches consume their letter
        for (i, (&g, &w)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == w {
                result[i] = Verdict::Exact;
                if let Some(count) = secret_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters drawn from what is left
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Verdict::Exact {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&g)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Verdict at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn verdict(&self, position: usize) -> Verdict {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as an emoji row like "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Exact, Present};

    fn score(guess: &str, secret: &str, rule: ScoringRule) -> Feedback {
        Feedback::calculate(
            &Word::new(guess).unwrap(),
            &Word::new(secret).unwrap(),
            rule,
        )
    }

    #[test]
    fn all_exact_is_perfect() {
        let feedback = score("crane", "crane", ScoringRule::Membership);
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count(Exact), 5);
    }

    #[test]
    fn all_absent() {
        let feedback = score("abcde", "fghij", ScoringRule::Membership);
        assert_eq!(feedback.verdicts(), &[Absent; 5]);
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn membership_marks_every_repeated_letter_present() {
        // APPLE holds a single L, yet both L's of ALLOW are Present
        let feedback = score("allow", "apple", ScoringRule::Membership);
        assert_eq!(
            feedback.verdicts(),
            &[Exact, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn standard_caps_present_by_secret_count() {
        let feedback = score("allow", "apple", ScoringRule::Standard);
        assert_eq!(feedback.verdicts(), &[Exact, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn standard_exact_takes_priority_over_present() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining O
        let feedback = score("robot", "floor", ScoringRule::Standard);
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn membership_is_position_wise() {
        // Changing another position of the guess never changes verdict i
        let secret = "crane";
        let base = score("trace", secret, ScoringRule::Membership);
        let varied = score("tzzce", secret, ScoringRule::Membership);
        assert_eq!(base.verdict(0), varied.verdict(0));
        assert_eq!(base.verdict(3), varied.verdict(3));
        assert_eq!(base.verdict(4), varied.verdict(4));
    }

    #[test]
    fn scoring_is_deterministic() {
        let first = score("speed", "erase", ScoringRule::Membership);
        let second = score("speed", "erase", ScoringRule::Membership);
        assert_eq!(first, second);
        assert_eq!(first.verdicts(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn emoji_rendering() {
        let feedback = Feedback::new([Exact, Present, Absent, Exact, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(format!("{feedback}"), "🟩🟨⬜🟩🟨");
    }
}
