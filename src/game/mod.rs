//! Game state: one session per game, plus the async glue around it

mod controller;
mod error;
mod events;
mod keyboard;
mod session;

pub use controller::{Game, check_word, resolve_target};
pub use error::GameError;
pub use events::{GameEvent, RejectReason};
pub use keyboard::KeyStates;
pub use session::{
    Epoch, GameSession, GameStatus, Guess, MAX_ATTEMPTS, PendingGuess, SubmitOutcome, WordVerdict,
};
