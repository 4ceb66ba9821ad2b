//! Game session state machine
//!
//! A session owns the target word, the 6×5 letter grid, the cursors and the
//! keyboard tracker for exactly one game. It never talks to the outside world:
//! word validity is handed in as a [`WordVerdict`], and everything worth
//! rendering is queued as a [`GameEvent`].

use super::{GameError, GameEvent, KeyStates, RejectReason};
use crate::core::{Feedback, Language, Letter, WORD_LENGTH, Word};
use std::fmt;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Session generation counter
///
/// Every reset produces a session with a strictly larger epoch, so a result
/// computed for an older session can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Epoch(u64);

impl Epoch {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// An evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Answer of the word validator for a submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordVerdict {
    Accepted,
    Rejected,
    /// The validator could not be reached and the policy refuses to guess
    Unavailable,
}

/// A full row waiting for its validity verdict
///
/// Only [`GameSession::prepare_submission`] creates these. The epoch and row
/// tie the verdict back to the exact session state it was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingGuess {
    epoch: Epoch,
    row: usize,
    word: Word,
}

impl PendingGuess {
    #[must_use]
    pub const fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub row: usize,
    pub word: Word,
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// One game: target, grid, cursors, status and keyboard state
#[derive(Debug, Clone)]
pub struct GameSession {
    epoch: Epoch,
    language: Language,
    target: Word,
    attempts: Vec<Guess>,
    grid: [[Option<Letter>; WORD_LENGTH]; MAX_ATTEMPTS],
    current_row: usize,
    current_col: usize,
    status: GameStatus,
    keys: KeyStates,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a session at the first epoch
    ///
    /// # Panics
    /// If `target` uses a letter outside `language`'s alphabet. Callers get
    /// targets from [`resolve_target`](super::resolve_target), which checks this.
    #[must_use]
    pub fn new(target: Word, language: Language) -> Self {
        Self::with_epoch(target, language, Epoch::default())
    }

    fn with_epoch(target: Word, language: Language, epoch: Epoch) -> Self {
        assert!(
            target.fits(language),
            "target {target} is outside the {language} alphabet"
        );
        Self {
            epoch,
            language,
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            grid: [[None; WORD_LENGTH]; MAX_ATTEMPTS],
            current_row: 0,
            current_col: 0,
            status: GameStatus::Playing,
            keys: KeyStates::new(),
            events: Vec::new(),
        }
    }

    /// Replace this session with a fresh game for `target`, same language
    ///
    /// # Panics
    /// If `target` uses a letter outside the session's alphabet.
    pub fn reset(&mut self, target: Word) {
        self.reset_with_language(target, self.language);
    }

    /// Replace this session with a fresh game in another language
    ///
    /// Nothing carries over except the epoch, which moves forward. Queued
    /// events of the old game are discarded.
    ///
    /// # Panics
    /// If `target` uses a letter outside `language`'s alphabet.
    pub fn reset_with_language(&mut self, target: Word, language: Language) {
        *self = Self::with_epoch(target, language, self.epoch.next());
    }

    /// Type a letter into the next free cell of the current row
    ///
    /// # Errors
    /// `GameOver` once the game ended, `OutsideAlphabet` for letters the
    /// session language does not use, `RowFull` when 5 letters are typed.
    pub fn add_letter(&mut self, letter: Letter) -> Result<(), GameError> {
        self.ensure_playing()?;
        if !self.language.contains(letter) {
            return Err(GameError::OutsideAlphabet {
                letter,
                language: self.language,
            });
        }
        if self.current_col >= WORD_LENGTH {
            return Err(GameError::RowFull);
        }

        let (row, col) = (self.current_row, self.current_col);
        self.grid[row][col] = Some(letter);
        self.current_col += 1;
        self.events.push(GameEvent::LetterEntered { row, col, letter });
        Ok(())
    }

    /// Remove the last typed letter of the current row
    ///
    /// # Errors
    /// `GameOver` once the game ended, `RowEmpty` when nothing is typed.
    pub fn delete_letter(&mut self) -> Result<(), GameError> {
        self.ensure_playing()?;
        if self.current_col == 0 {
            return Err(GameError::RowEmpty);
        }

        self.current_col -= 1;
        let (row, col) = (self.current_row, self.current_col);
        self.grid[row][col] = None;
        self.events.push(GameEvent::LetterDeleted { row, col });
        Ok(())
    }

    /// Submit the current row, asking `verdict` whether the word is valid
    ///
    /// Synchronous form of [`prepare_submission`](Self::prepare_submission)
    /// followed by [`complete_submission`](Self::complete_submission).
    ///
    /// # Errors
    /// See those two methods.
    pub fn submit_guess(
        &mut self,
        verdict: impl FnOnce(&Word) -> WordVerdict,
    ) -> Result<SubmitOutcome, GameError> {
        let pending = self.prepare_submission()?;
        let verdict = verdict(pending.word());
        self.complete_submission(pending, verdict)
    }

    /// Capture the current row for validation
    ///
    /// Does not change the grid, cursors or attempts.
    ///
    /// # Errors
    /// `GameOver` once the game ended; `IncompleteGuess` (also emitted as a
    /// rejection event) when the row has fewer than 5 letters.
    pub fn prepare_submission(&mut self) -> Result<PendingGuess, GameError> {
        self.ensure_playing()?;
        let Some(word) = self.current_word() else {
            return Err(self.reject(RejectReason::IncompleteGuess));
        };

        Ok(PendingGuess {
            epoch: self.epoch,
            row: self.current_row,
            word,
        })
    }

    /// Apply the validator's verdict for a pending guess
    ///
    /// On acceptance the guess is evaluated and recorded, the keyboard is
    /// updated, the status may become terminal, and the cursors move to the
    /// next row. Every other outcome leaves the session untouched.
    ///
    /// # Errors
    /// - `StaleSubmission`: the pending guess was prepared for an earlier
    ///   session, or the row changed since
    /// - `GameOver`: the game already ended
    /// - `InvalidWord` / `ValidationUnavailable`: the verdict refused the word
    pub fn complete_submission(
        &mut self,
        pending: PendingGuess,
        verdict: WordVerdict,
    ) -> Result<SubmitOutcome, GameError> {
        if pending.epoch != self.epoch {
            return Err(GameError::StaleSubmission);
        }
        self.ensure_playing()?;
        if pending.row != self.current_row || self.current_word() != Some(pending.word) {
            return Err(GameError::StaleSubmission);
        }

        match verdict {
            WordVerdict::Accepted => Ok(self.record(pending.word)),
            WordVerdict::Rejected => Err(self.reject(RejectReason::InvalidWord)),
            WordVerdict::Unavailable => Err(self.reject(RejectReason::ValidationUnavailable)),
        }
    }

    fn record(&mut self, word: Word) -> SubmitOutcome {
        let row = self.current_row;
        let feedback = Feedback::calculate(&word, &self.target);

        self.attempts.push(Guess { word, feedback });
        self.events.push(GameEvent::GuessEvaluated { row, feedback });
        for (letter, classification) in self.keys.fold(&word, &feedback) {
            self.events.push(GameEvent::KeyStateChanged {
                letter,
                classification,
            });
        }

        self.status = if word == self.target {
            GameStatus::Won
        } else if self.attempts.len() == MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        self.current_row += 1;
        self.current_col = 0;

        if self.status.is_over() {
            self.events.push(GameEvent::GameEnded {
                status: self.status,
                target: self.target,
            });
        }

        SubmitOutcome {
            row,
            word,
            feedback,
            status: self.status,
        }
    }

    fn reject(&mut self, reason: RejectReason) -> GameError {
        self.events.push(GameEvent::GuessRejected { reason });
        reason.into()
    }

    const fn ensure_playing(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    /// The current row as a word, once all 5 cells are filled
    #[must_use]
    pub fn current_word(&self) -> Option<Word> {
        if self.status.is_over() || self.current_col < WORD_LENGTH {
            return None;
        }
        let row = &self.grid[self.current_row];
        let mut letters = [Letter::ENYE; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(row) {
            *slot = (*cell)?;
        }
        Some(Word::from_letters(letters))
    }

    /// Drain the queued events, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub const fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Guess] {
        &self.attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Cells of a grid row (0-5)
    ///
    /// # Panics
    /// Panics if row >= 6
    #[must_use]
    pub const fn row(&self, row: usize) -> &[Option<Letter>; WORD_LENGTH] {
        &self.grid[row]
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keys(&self) -> &KeyStates {
        &self.keys
    }
}
