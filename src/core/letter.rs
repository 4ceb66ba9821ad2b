//! Letters and the per-language alphabets they belong to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WordError;

/// A single uppercase letter
///
/// Covers `A..=Z` plus `Ñ`. Whether a letter is playable depends on the
/// [`Language`] of the session; see [`Language::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// The Spanish eñe
    pub const ENYE: Self = Self('Ñ');

    /// Create a letter, normalising to uppercase
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacter` for anything outside `A..=Z` and `Ñ`.
    ///
    /// # Examples
    /// ```
    /// use wordle_click::core::Letter;
    ///
    /// assert_eq!(Letter::new('q').unwrap().as_char(), 'Q');
    /// assert_eq!(Letter::new('ñ').unwrap(), Letter::ENYE);
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, WordError> {
        let mut upper = ch.to_uppercase();
        let normalised = match (upper.next(), upper.next()) {
            (Some(c), None) => c,
            _ => return Err(WordError::InvalidCharacter(ch)),
        };

        if normalised.is_ascii_uppercase() || normalised == 'Ñ' {
            Ok(Self(normalised))
        } else {
            Err(WordError::InvalidCharacter(ch))
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Letter {
    type Error = WordError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

/// Word-list language, which also fixes the playable alphabet
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, `A..=Z`
    En,
    /// Spanish, `A..=Z` plus `Ñ`
    #[default]
    Es,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Es];

    /// Two-letter code used by the word API (`en`, `es`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    /// Check whether `letter` belongs to this language's alphabet
    #[must_use]
    pub fn contains(self, letter: Letter) -> bool {
        match self {
            Self::En => letter.as_char().is_ascii_uppercase(),
            Self::Es => letter.as_char().is_ascii_uppercase() || letter == Letter::ENYE,
        }
    }

    /// Every letter of the alphabet, in keyboard-independent order
    #[must_use]
    pub fn alphabet(self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = ('A'..='Z').map(Letter).collect();
        if self == Self::Es {
            letters.insert(14, Letter::ENYE); // after N
        }
        letters
    }

    /// The language after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "spanish" | "español" | "espanol" => Ok(Self::Es),
            other => Err(format!("Unsupported language: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalises_to_uppercase() {
        assert_eq!(Letter::new('a').unwrap().as_char(), 'A');
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'Z');
        assert_eq!(Letter::new('ñ').unwrap(), Letter::ENYE);
    }

    #[test]
    fn letter_rejects_non_letters() {
        assert_eq!(Letter::new('1'), Err(WordError::InvalidCharacter('1')));
        assert_eq!(Letter::new(' '), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(Letter::new('é'), Err(WordError::InvalidCharacter('é')));
        // 'ß' uppercases to two characters
        assert!(Letter::new('ß').is_err());
    }

    #[test]
    fn english_alphabet_excludes_enye() {
        assert!(Language::En.contains(Letter::new('q').unwrap()));
        assert!(!Language::En.contains(Letter::ENYE));
        assert_eq!(Language::En.alphabet().len(), 26);
    }

    #[test]
    fn spanish_alphabet_includes_enye_after_n() {
        let alphabet = Language::Es.alphabet();
        assert_eq!(alphabet.len(), 27);
        assert_eq!(alphabet[13].as_char(), 'N');
        assert_eq!(alphabet[14], Letter::ENYE);
        assert_eq!(alphabet[15].as_char(), 'O');
        assert!(Language::Es.contains(Letter::ENYE));
    }

    #[test]
    fn language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
        assert_eq!("Spanish".parse::<Language>(), Ok(Language::Es));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn language_next_cycles() {
        assert_eq!(Language::En.next(), Language::Es);
        assert_eq!(Language::Es.next(), Language::En);
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}
