//! Events emitted by a session for the presentation layer

use super::GameStatus;
use crate::core::{Classification, Feedback, Letter, Word};

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The current row is not full
    IncompleteGuess,
    /// The word validator does not know the word
    InvalidWord,
    /// The word validator failed and the policy rejects in that case
    ValidationUnavailable,
}

/// Something a presentation layer may want to render
///
/// Events are queued in emission order and drained with
/// [`GameSession::take_events`](super::GameSession::take_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    LetterEntered {
        row: usize,
        col: usize,
        letter: Letter,
    },
    LetterDeleted {
        row: usize,
        col: usize,
    },
    GuessRejected {
        reason: RejectReason,
    },
    GuessEvaluated {
        row: usize,
        feedback: Feedback,
    },
    KeyStateChanged {
        letter: Letter,
        classification: Classification,
    },
    GameEnded {
        status: GameStatus,
        target: Word,
    },
}
