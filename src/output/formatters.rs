//! Formatting utilities for terminal output
//!
//! Plain strings only; coloring is left to the caller.

use crate::core::{Language, Letter};
use crate::game::{GameError, GameEvent, GameSession, GameStatus, Guess, MAX_ATTEMPTS};

/// QWERTY rows; Spanish gets Ñ after L
#[must_use]
pub fn keyboard_rows(language: Language) -> Vec<Vec<Letter>> {
    let middle = match language {
        Language::En => "ASDFGHJKL",
        Language::Es => "ASDFGHJKLÑ",
    };
    ["QWERTYUIOP", middle, "ZXCVBNM"]
        .into_iter()
        .map(|row| row.chars().filter_map(|c| Letter::new(c).ok()).collect())
        .collect()
}

/// Attempts counter, e.g. `2/6`
#[must_use]
pub fn attempts_label(session: &GameSession) -> String {
    format!("{}/{MAX_ATTEMPTS}", session.attempts().len())
}

/// Spoiler-free summary of a finished game
///
/// ```text
/// Wordle Click (EN) 3/6
///
/// ⬜🟩🟩🟩🟩
/// ⬜⬜🟨⬜⬜
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(attempts: &[Guess], status: GameStatus, language: Language) -> String {
    let score = match status {
        GameStatus::Won => attempts.len().to_string(),
        GameStatus::Lost | GameStatus::Playing => "X".to_string(),
    };
    let grid: Vec<String> = attempts.iter().map(|g| g.feedback().to_emoji()).collect();
    format!(
        "Wordle Click ({}) {score}/{MAX_ATTEMPTS}\n\n{}",
        language.code().to_uppercase(),
        grid.join("\n")
    )
}

/// Celebration line for a win after `attempts` guesses
#[must_use]
pub const fn win_message(attempts: usize) -> &'static str {
    match attempts {
        1 => "Hole in one!",
        2 => "Magnificent!",
        3 => "Splendid!",
        4 => "Great job!",
        5 => "Nice work!",
        _ => "Phew!",
    }
}

/// Message for an event worth telling the player about
///
/// Letter entry and keyboard updates are visible on the board and return
/// `None`.
#[must_use]
pub fn event_message(event: &GameEvent, attempts: usize) -> Option<String> {
    match event {
        GameEvent::GuessRejected { reason } => Some(GameError::from(*reason).to_string()),
        GameEvent::GameEnded {
            status: GameStatus::Won,
            ..
        } => Some(format!(
            "{} Solved in {attempts}/{MAX_ATTEMPTS}",
            win_message(attempts)
        )),
        GameEvent::GameEnded { target, .. } => Some(format!("Out of attempts. The word was {target}")),
        _ => None,
    }
}

/// Message for a failed session operation, unless an event already reports it
#[must_use]
pub fn error_message(err: GameError) -> Option<String> {
    if err.as_rejection().is_some() {
        None
    } else {
        Some(err.to_string())
    }
}
