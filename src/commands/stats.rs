//! Word-list statistics
//!
//! Asks the API, or counts the offline dictionary when running offline.

use crate::config::GameConfig;
use crate::core::Language;
use crate::services::{ApiClient, Dictionary, ServiceError};

/// Where the numbers came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsSource {
    Api { url: String, version: String },
    Offline,
}

/// Word-list statistics for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub language: Language,
    pub total_words: usize,
    pub source: StatsSource,
}

/// Collect word-list statistics for `language`
///
/// # Errors
///
/// Returns an error if the API cannot be reached, answers with an error, or
/// the configured word list cannot be read.
pub async fn collect_stats(
    config: &GameConfig,
    language: Language,
) -> Result<StatsReport, ServiceError> {
    if config.offline {
        let mut dictionary = Dictionary::embedded();
        if let Some(path) = &config.word_list
            && language == config.language
        {
            dictionary = dictionary.with_file(language, path)?;
        }
        return Ok(StatsReport {
            language,
            total_words: dictionary.len(language),
            source: StatsSource::Offline,
        });
    }

    let client = ApiClient::new(config.api_base_url.clone(), config.request_timeout())?;
    let stats = client.stats(language).await?;
    Ok(StatsReport {
        language,
        total_words: stats.total_words,
        source: StatsSource::Api {
            url: client.base_url().to_string(),
            version: stats.api_version,
        },
    })
}
