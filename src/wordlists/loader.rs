//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Language, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load words for `language` from a file, one word per line
///
/// Returns the valid words, skipping blank lines and entries that are not
/// five letters of the language's alphabet.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_click::core::Language;
/// use wordle_click::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_es.txt", Language::Es).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, language: Language) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines(), language))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_click::core::Language;
/// use wordle_click::wordlists::{WORDS_EN, loader::words_from_slice};
///
/// let words = words_from_slice(WORDS_EN, Language::En);
/// assert_eq!(words.len(), WORDS_EN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], language: Language) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), language)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, language: Language) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::in_language(line, language).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input, Language::En);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].to_string(), "CRANE");
        assert_eq!(words[2].to_string(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "niños", "slate"];
        let words = words_from_slice(input, Language::En);

        // NIÑOS is not English
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].to_string(), "CRANE");
        assert_eq!(words[1].to_string(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, Language::Es).is_empty());
    }

    #[test]
    fn load_from_file_reads_one_word_per_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sueño\n\n  playa  \nbad\nTIGRE").unwrap();

        let words = load_from_file(file.path(), Language::Es).unwrap();
        let texts: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(texts, vec!["SUEÑO", "PLAYA", "TIGRE"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here.txt", Language::En).is_err());
    }
}
