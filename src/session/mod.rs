//! Game session state machine and per-session bookkeeping

mod game;
mod hints;

pub use game::{GameSession, GameStatus, GuessRecord, MAX_ATTEMPTS, SessionError};
pub use hints::KeyHints;
