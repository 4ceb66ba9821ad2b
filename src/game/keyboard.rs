//! Best-known status per letter, used to colour the input keyboard

use crate::core::{Classification, Feedback, Letter, Word};
use rustc_hash::FxHashMap;

/// Tracks the best classification observed for every letter in a session
///
/// Letters that were never part of an evaluated guess are unknown
/// (`get` returns `None`). Updates only ever upgrade a letter, following
/// Correct > Present > Absent > unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStates {
    states: FxHashMap<Letter, Classification>,
}

impl KeyStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `classification` for `letter` if it outranks the tracked one
    ///
    /// Returns `true` when the tracked state changed.
    pub fn update(&mut self, letter: Letter, classification: Classification) -> bool {
        if Some(classification) <= self.get(letter) {
            return false;
        }
        self.states.insert(letter, classification);
        true
    }

    /// Apply every position of an evaluated guess
    ///
    /// Returns the upgrades that took effect, in position order.
    pub fn fold(&mut self, word: &Word, feedback: &Feedback) -> Vec<(Letter, Classification)> {
        word.letters()
            .iter()
            .zip(feedback.classifications())
            .filter_map(|(&letter, &classification)| {
                self.update(letter, classification)
                    .then_some((letter, classification))
            })
            .collect()
    }

    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<Classification> {
        self.states.get(&letter).copied()
    }

    pub fn reset(&mut self) {
        self.states.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Letter, Classification)> + '_ {
        self.states.iter().map(|(&l, &c)| (l, c))
    }
}
