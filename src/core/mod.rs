//! Core domain types for the word game
//!
//! Pure types with no knowledge of the grid, the terminal or the network.

mod feedback;
pub mod letter;
mod word;

pub use feedback::{Feedback, ScoringRule, Verdict};
pub use word::{WORD_LEN, Word, WordError};
