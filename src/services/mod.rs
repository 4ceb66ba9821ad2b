//! Word sourcing and validation collaborators
//!
//! The game core never fetches anything. These traits describe what it
//! needs from the outside; [`ApiClient`] talks to the wordle.click HTTP API
//! and [`Dictionary`] answers from the embedded word lists.

mod api;
mod dictionary;

pub use api::{ApiClient, ApiStats};
pub use dictionary::{Dictionary, daily_index};

use crate::config::GameConfig;
use crate::core::{Language, Word, WordError};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },
    #[error("received an unusable word '{word}': {source}")]
    BadWord {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("no words available for language {0}")]
    EmptyWordList(Language),
    #[error("could not read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of the day's target word
#[async_trait]
pub trait WordProvider: Send + Sync {
    async fn target_word(&self, language: Language) -> Result<Word, ServiceError>;
}

/// Dictionary check for submitted words
#[async_trait]
pub trait WordValidator: Send + Sync {
    async fn is_valid(&self, word: &Word, language: Language) -> Result<bool, ServiceError>;
}

/// The pair of collaborators a game runs against
#[derive(Clone)]
pub struct Services {
    pub provider: Arc<dyn WordProvider>,
    pub validator: Arc<dyn WordValidator>,
}

impl Services {
    pub fn new(provider: Arc<dyn WordProvider>, validator: Arc<dyn WordValidator>) -> Self {
        Self {
            provider,
            validator,
        }
    }

    /// Build the collaborators described by `config`
    ///
    /// Offline mode uses the embedded dictionary, optionally replacing the
    /// configured language's list with `config.word_list`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the custom word
    /// list cannot be read.
    pub fn from_config(config: &GameConfig) -> Result<Self, ServiceError> {
        if config.offline {
            let mut dictionary = Dictionary::embedded();
            if let Some(path) = &config.word_list {
                dictionary = dictionary.with_file(config.language, path)?;
            }
            let dictionary = Arc::new(dictionary);
            return Ok(Self::new(dictionary.clone(), dictionary));
        }

        let client = Arc::new(ApiClient::new(
            config.api_base_url.clone(),
            config.request_timeout(),
        )?);
        Ok(Self::new(client.clone(), client))
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
