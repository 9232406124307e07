//! Runtime configuration
//!
//! Collected once by the binary (command line and environment) and passed
//! down explicitly; nothing below this reads the environment itself.

use crate::core::ScoringRule;
use crate::game::DEFAULT_ROWS;
use std::path::PathBuf;
use std::time::Duration;

/// Word-of-the-day endpoint
pub const DEFAULT_WORD_URL: &str = "https://words.dev-apis.com/word-of-the-day";

/// Word validation endpoint
pub const DEFAULT_VALIDATE_URL: &str = "https://words.dev-apis.com/validate-word";

/// HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for one run of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_url: String,
    pub validate_url: String,
    /// Ask for a random word (`?random=1`) instead of the daily one
    pub random: bool,
    pub rows: usize,
    pub rule: ScoringRule,
    pub timeout: Duration,
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_url: DEFAULT_WORD_URL.to_string(),
            validate_url: DEFAULT_VALIDATE_URL.to_string(),
            random: true,
            rows: DEFAULT_ROWS,
            rule: ScoringRule::Membership,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: default_log_file(),
        }
    }
}

/// `wordgrid.log` in the system temp directory
#[must_use]
pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join(concat!(env!("CARGO_PKG_NAME"), ".log"))
}
