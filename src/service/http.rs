//! HTTP client for the word-of-the-day and validate-word endpoints

use super::{ServiceError, WordService};
use crate::config::GameConfig;
use crate::core::Word;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Body of the word-of-the-day response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordResponse {
    pub word: String,
}

/// Body posted to the validation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateRequest<'a> {
    pub word: &'a str,
}

/// Body of the validation response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ValidateResponse {
    #[serde(rename = "validWord")]
    pub valid_word: bool,
}

/// [`WordService`] backed by the remote JSON API
#[derive(Debug, Clone)]
pub struct HttpWordService {
    client: Client,
    word_url: String,
    validate_url: String,
    random: bool,
}

impl HttpWordService {
    /// Build a client from the game configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (for
    /// example when no TLS backend is available).
    pub fn new(config: &GameConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            word_url: config.word_url.clone(),
            validate_url: config.validate_url.clone(),
            random: config.random,
        })
    }
}

impl WordService for HttpWordService {
    async fn fetch_secret(&self) -> Result<Word, ServiceError> {
        let mut request = self.client.get(&self.word_url);
        if self.random {
            request = request.query(&[("random", "1")]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %self.word_url, "word-of-the-day request failed");
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body: WordResponse = response.json().await?;
        debug!("secret word received");
        Word::new(body.word.as_str()).map_err(|source| ServiceError::MalformedWord {
            word: body.word,
            source,
        })
    }

    async fn validate(&self, guess: &str) -> Result<bool, ServiceError> {
        let response = self
            .client
            .post(&self.validate_url)
            .json(&ValidateRequest { word: guess })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %self.validate_url, "validate-word request failed");
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body: ValidateResponse = response.json().await?;
        debug!(guess, valid = body.valid_word, "validity received");
        Ok(body.valid_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_request_wire_format() {
        let body = serde_json::to_value(ValidateRequest { word: "crane" }).unwrap();
        assert_eq!(body, json!({ "word": "crane" }));
    }

    #[test]
    fn validate_response_reads_camel_case_flag() {
        let body: ValidateResponse =
            serde_json::from_value(json!({ "word": "crane", "validWord": true })).unwrap();
        assert!(body.valid_word);

        let body: ValidateResponse = serde_json::from_str(r#"{"validWord":false}"#).unwrap();
        assert!(!body.valid_word);
    }

    #[test]
    fn validate_response_requires_flag() {
        assert!(serde_json::from_str::<ValidateResponse>(r#"{"valid":true}"#).is_err());
    }

    #[test]
    fn word_response_ignores_extra_fields() {
        let body: WordResponse =
            serde_json::from_value(json!({ "word": "HUMPH", "puzzleNumber": 3 })).unwrap();
        assert_eq!(body.word, "HUMPH");
        assert_eq!(Word::new(body.word).unwrap().text(), "humph");
    }

    #[test]
    fn client_builds_from_default_config() {
        let service = HttpWordService::new(&GameConfig::default()).unwrap();
        assert_eq!(service.word_url, crate::config::DEFAULT_WORD_URL);
        assert!(service.random);
    }
}
