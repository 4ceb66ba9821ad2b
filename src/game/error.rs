use super::RejectReason;
use crate::core::{Language, Letter};

/// Reasons a session operation did not change anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Game over")]
    GameOver,
    #[error("The current row is full")]
    RowFull,
    #[error("The current row is empty")]
    RowEmpty,
    #[error("Letter {letter} is not part of the {language} alphabet")]
    OutsideAlphabet { letter: Letter, language: Language },
    #[error("Word must be 5 letters")]
    IncompleteGuess,
    #[error("Word not in word list")]
    InvalidWord,
    #[error("Word list unavailable, try again")]
    ValidationUnavailable,
    #[error("Submission belongs to a previous game")]
    StaleSubmission,
}

impl GameError {
    /// The rejection this error was reported as, if any
    ///
    /// Rejections are also queued as [`GameEvent::GuessRejected`](super::GameEvent).
    #[must_use]
    pub const fn as_rejection(self) -> Option<RejectReason> {
        match self {
            Self::IncompleteGuess => Some(RejectReason::IncompleteGuess),
            Self::InvalidWord => Some(RejectReason::InvalidWord),
            Self::ValidationUnavailable => Some(RejectReason::ValidationUnavailable),
            _ => None,
        }
    }
}

impl From<RejectReason> for GameError {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::IncompleteGuess => Self::IncompleteGuess,
            RejectReason::InvalidWord => Self::InvalidWord,
            RejectReason::ValidationUnavailable => Self::ValidationUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_round_trip() {
        for reason in [
            RejectReason::IncompleteGuess,
            RejectReason::InvalidWord,
            RejectReason::ValidationUnavailable,
        ] {
            assert_eq!(GameError::from(reason).as_rejection(), Some(reason));
        }
        assert_eq!(GameError::StaleSubmission.as_rejection(), None);
        assert_eq!(GameError::RowFull.as_rejection(), None);
    }
}
