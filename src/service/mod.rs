//! Remote word services
//!
//! The game depends on two opaque services: one hands out the secret word,
//! the other says whether a guess is a real word. Both sit behind the
//! [`WordService`] trait so the game can be driven without a network.

pub mod gate;
mod http;

pub use http::{HttpWordService, ValidateRequest, ValidateResponse, WordResponse};

use crate::core::{Word, WordError};
use std::future::Future;
use thiserror::Error;

/// Failure talking to a word service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered with HTTP {0}")]
    Status(u16),
    #[error("server sent an unusable word {word:?}: {source}")]
    MalformedWord { word: String, source: WordError },
}

/// Source of the secret word and judge of guess validity
pub trait WordService: Send + Sync {
    /// Fetch the secret word for a new session
    fn fetch_secret(&self) -> impl Future<Output = Result<Word, ServiceError>> + Send;

    /// Ask whether `guess` (lower-cased) is a real word
    fn validate(&self, guess: &str) -> impl Future<Output = Result<bool, ServiceError>> + Send;
}
