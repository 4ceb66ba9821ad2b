//! Wordle Click
//!
//! A daily five-letter word puzzle in English and Spanish, played in the
//! terminal. Six attempts, colored feedback per letter, and a keyboard that
//! remembers the best thing learned about every key.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_click::core::{Language, Letter, Word};
//! use wordle_click::game::{GameSession, GameStatus, WordVerdict};
//!
//! let target = Word::new("house").unwrap();
//! let mut session = GameSession::new(target, Language::En);
//!
//! for ch in "mouse".chars() {
//!     session.add_letter(Letter::new(ch).unwrap()).unwrap();
//! }
//! let outcome = session.submit_guess(|_| WordVerdict::Accepted).unwrap();
//! assert_eq!(outcome.feedback.to_string(), "-GGGG");
//! assert_eq!(session.status(), GameStatus::Playing);
//! ```

// Letters, words and guess evaluation
pub mod core;

// Session state machine and keyboard tracking
pub mod game;

// Target word providers and validators
pub mod services;

// Word lists
pub mod wordlists;

// Player configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
