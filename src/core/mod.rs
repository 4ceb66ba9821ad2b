//! Core domain types for the word puzzle
//!
//! Letters, words and guess evaluation. Everything here is pure and
//! synchronous; sessions and collaborators build on top of it.

mod feedback;
mod letter;
mod word;

pub use feedback::{Classification, Feedback};
pub use letter::{Language, Letter};
pub use word::{WORD_LENGTH, Word, WordError};
