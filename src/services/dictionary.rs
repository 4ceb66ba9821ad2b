//! Offline word provider and validator backed by word lists

use super::{ServiceError, WordProvider, WordValidator};
use crate::core::{Language, Word};
use crate::wordlists::{self, loader};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use md5::{Digest, Md5};
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default)]
struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    fn new(words: Vec<Word>) -> Self {
        let index = words.iter().copied().collect();
        Self { words, index }
    }
}

/// Word lists per language
///
/// The daily word is a pure function of language and date, so every player
/// gets the same word on the same day without a server, and the same word the
/// API picks from the same list.
#[derive(Debug, Clone)]
pub struct Dictionary {
    lists: FxHashMap<Language, WordList>,
}

impl Dictionary {
    /// Dictionary over the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let lists = Language::ALL
            .into_iter()
            .map(|language| {
                let words = loader::words_from_slice(wordlists::embedded(language), language);
                (language, WordList::new(words))
            })
            .collect();
        Self { lists }
    }

    /// Replace the list of one language
    #[must_use]
    pub fn with_words(mut self, language: Language, words: Vec<Word>) -> Self {
        self.lists.insert(language, WordList::new(words));
        self
    }

    /// Replace the list of one language with the contents of a file
    ///
    /// # Errors
    /// Returns `ServiceError::Io` if the file cannot be read.
    pub fn with_file(self, language: Language, path: &Path) -> Result<Self, ServiceError> {
        let words = loader::load_from_file(path, language)?;
        debug!(path = %path.display(), count = words.len(), %language, "loaded word list");
        Ok(self.with_words(language, words))
    }

    #[must_use]
    pub fn words(&self, language: Language) -> &[Word] {
        self.lists
            .get(&language)
            .map_or(&[][..], |list| list.words.as_slice())
    }

    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.words(language).len()
    }

    #[must_use]
    pub fn is_empty(&self, language: Language) -> bool {
        self.words(language).is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word, language: Language) -> bool {
        self.lists
            .get(&language)
            .is_some_and(|list| list.index.contains(word))
    }

    /// The target word for a given day
    #[must_use]
    pub fn word_for_date(&self, language: Language, date: NaiveDate) -> Option<Word> {
        let words = self.words(language);
        daily_index(language, date, words.len()).map(|index| words[index])
    }
}

/// Index of the day's word in a list of `len` words
///
/// The first four bytes of the MD5 of `wordle-{lang}-{YYYY-MM-DD}`, read as a
/// big-endian `u32`, modulo `len`. Returns `None` for an empty list.
#[must_use]
pub fn daily_index(language: Language, date: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let seed = format!("wordle-{}-{}", language.code(), date.format("%Y-%m-%d"));
    let digest = Md5::digest(seed.as_bytes());
    let value = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    Some((u64::from(value) % len as u64) as usize)
}

#[async_trait]
impl WordProvider for Dictionary {
    async fn target_word(&self, language: Language) -> Result<Word, ServiceError> {
        let today = Local::now().date_naive();
        self.word_for_date(language, today)
            .ok_or(ServiceError::EmptyWordList(language))
    }
}

#[async_trait]
impl WordValidator for Dictionary {
    async fn is_valid(&self, word: &Word, language: Language) -> Result<bool, ServiceError> {
        if self.is_empty(language) {
            return Err(ServiceError::EmptyWordList(language));
        }
        Ok(self.contains(word, language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn embedded_dictionary_has_both_languages() {
        let dict = Dictionary::embedded();
        assert_eq!(dict.len(Language::En), wordlists::WORDS_EN_COUNT);
        assert_eq!(dict.len(Language::Es), wordlists::WORDS_ES_COUNT);
    }

    #[test]
    fn contains_is_per_language() {
        let dict = Dictionary::embedded();
        assert!(dict.contains(&word("house"), Language::En));
        assert!(!dict.contains(&word("house"), Language::Es));
        assert!(dict.contains(&word("niños"), Language::Es));
        assert!(!dict.contains(&word("zzzzz"), Language::En));
    }

    #[test]
    fn word_for_date_is_deterministic_and_in_list() {
        let dict = Dictionary::embedded();
        let day = date(2025, 3, 14);
        for language in Language::ALL {
            let first = dict.word_for_date(language, day).unwrap();
            let again = dict.word_for_date(language, day).unwrap();
            assert_eq!(first, again);
            assert!(dict.contains(&first, language));
        }
    }

    #[test]
    fn daily_index_matches_api_selection() {
        // md5("wordle-en-2025-03-14") starts 04686c47, md5("wordle-es-2025-01-01") 2776b7ae
        assert_eq!(daily_index(Language::En, date(2025, 3, 14), 465), Some(122));
        assert_eq!(daily_index(Language::Es, date(2025, 1, 1), 174), Some(118));
        assert_eq!(daily_index(Language::En, date(2025, 3, 14), 0), None);
    }

    #[test]
    fn word_for_date_picks_from_embedded_list() {
        let dict = Dictionary::embedded();
        assert_eq!(
            dict.word_for_date(Language::En, date(2025, 3, 14)),
            Some(word("drama"))
        );
        assert_eq!(
            dict.word_for_date(Language::Es, date(2025, 1, 1)),
            Some(word("otoño"))
        );
    }

    #[test]
    fn word_for_date_varies_over_days() {
        let dict = Dictionary::embedded();
        let words: FxHashSet<Word> = (1..=28)
            .filter_map(|d| dict.word_for_date(Language::En, date(2025, 2, d)))
            .collect();
        assert!(words.len() > 1);
    }

    #[test]
    fn empty_list_has_no_daily_word() {
        let dict = Dictionary::embedded().with_words(Language::En, Vec::new());
        assert_eq!(dict.word_for_date(Language::En, date(2025, 1, 1)), None);
        assert!(dict.word_for_date(Language::Es, date(2025, 1, 1)).is_some());
    }

    #[test]
    fn with_words_replaces_one_language() {
        let dict = Dictionary::embedded().with_words(Language::En, vec![word("crane")]);
        assert_eq!(dict.words(Language::En), &[word("crane")]);
        assert_eq!(
            dict.word_for_date(Language::En, date(2030, 6, 1)),
            Some(word("crane"))
        );
        assert!(!dict.contains(&word("house"), Language::En));
    }

    #[tokio::test]
    async fn provider_returns_todays_word() {
        let dict = Dictionary::embedded();
        let target = dict.target_word(Language::Es).await.unwrap();
        assert!(dict.contains(&target, Language::Es));
    }

    #[tokio::test]
    async fn provider_fails_on_empty_list() {
        let dict = Dictionary::embedded().with_words(Language::Es, Vec::new());
        assert!(matches!(
            dict.target_word(Language::Es).await,
            Err(ServiceError::EmptyWordList(Language::Es))
        ));
    }

    #[tokio::test]
    async fn validator_checks_membership() {
        let dict = Dictionary::embedded();
        assert!(dict.is_valid(&word("mouse"), Language::En).await.unwrap());
        assert!(!dict.is_valid(&word("xxxxx"), Language::En).await.unwrap());
    }

    #[tokio::test]
    async fn validator_fails_on_empty_list() {
        let dict = Dictionary::embedded().with_words(Language::En, Vec::new());
        assert!(dict.is_valid(&word("mouse"), Language::En).await.is_err());
    }
}
