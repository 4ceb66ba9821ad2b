//! Word lists for both languages
//!
//! Provides the embedded dictionaries plus the short fallback lists used when
//! the daily word cannot be fetched.

mod embedded;
pub mod loader;

use crate::core::{Language, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;

pub use embedded::{WORDS_EN, WORDS_EN_COUNT, WORDS_ES, WORDS_ES_COUNT};

/// Targets used when the word provider fails (English)
pub const FALLBACK_EN: &[&str] = &["HOUSE", "WATER", "PLANT", "MUSIC", "LIGHT"];

/// Targets used when the word provider fails (Spanish)
pub const FALLBACK_ES: &[&str] = &["PLAYA", "MUSGO", "LUCES", "NIÑOS", "TIGRE"];

/// The embedded dictionary for a language
#[must_use]
pub const fn embedded(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => WORDS_EN,
        Language::Es => WORDS_ES,
    }
}

/// Pick a random fallback target for `language`
///
/// # Panics
/// Will not panic - the fallback lists are non-empty and checked by tests.
#[must_use]
pub fn fallback_target<R: Rng + ?Sized>(language: Language, rng: &mut R) -> Word {
    let list = match language {
        Language::En => FALLBACK_EN,
        Language::Es => FALLBACK_ES,
    };
    let text = list.choose(rng).expect("fallback lists are non-empty");
    Word::in_language(text, language).expect("fallback words are valid")
}
