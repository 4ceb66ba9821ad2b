//! Evaluate one guess against a target
//!
//! Handy for checking tricky repeated-letter cases without playing a game.

use crate::core::{Feedback, Language, Word, WordError};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target` in `language`
///
/// # Errors
///
/// Returns an error if either word is not 5 letters of the language's alphabet.
pub fn check_guess(guess: &str, target: &str, language: Language) -> Result<CheckResult, WordError> {
    let guess = Word::in_language(guess, language)?;
    let target = Word::in_language(target, language)?;

    Ok(CheckResult {
        guess,
        target,
        feedback: Feedback::calculate(&guess, &target),
    })
}
