//! Five-letter word representation
//!
//! A Word is a fixed array of [`Letter`]s, so a wrong length can never reach
//! the evaluator through this type.

use super::{Language, Letter};
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word of a game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [Letter; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a letter")]
    InvalidCharacter(char),
    #[error("Letter {letter} is not part of the {language} alphabet")]
    OutsideAlphabet { letter: Letter, language: Language },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Letters are normalised to uppercase; `Ñ` is accepted regardless of
    /// language. Use [`Word::in_language`] to also check the alphabet.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than `A..=Z` or `Ñ`
    ///
    /// # Examples
    /// ```
    /// use wordle_click::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = [Letter::ENYE; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = Letter::new(ch)?;
        }

        Ok(Self { letters })
    }

    /// Create a Word and check every letter against `language`'s alphabet
    ///
    /// # Errors
    /// Same as [`Word::new`], plus `WordError::OutsideAlphabet`.
    pub fn in_language(text: &str, language: Language) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        match word.letters.iter().find(|&&l| !language.contains(l)) {
            Some(&letter) => Err(WordError::OutsideAlphabet { letter, language }),
            None => Ok(word),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Number of times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: Letter) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// Check if every letter is playable in `language`
    #[must_use]
    pub fn fits(&self, language: Language) -> bool {
        self.letters.iter().all(|&l| language.contains(l))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
