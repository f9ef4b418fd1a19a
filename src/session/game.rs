//! Attempt-bounded game session state machine
//!
//! The only stateful part of the engine. Front ends drive it through
//! `submit_guess` and read explicit return values back; there is no
//! observer plumbing and no global current-game state.

use super::hints::KeyHints;
use crate::core::{Equation, Feedback, ValidationError};
use rand::prelude::IndexedRandom;
use std::fmt;

/// Maximum number of scored guesses per game
pub const MAX_ATTEMPTS: u32 = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Guesses are still accepted
    InProgress,
    /// A guess scored all-correct (terminal)
    Won,
    /// The attempt budget ran out without a win (terminal)
    Lost,
}

/// Error type for session operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `start_new_game` was given no candidates; a caller sequencing bug
    EmptyCorpus,
    /// A guess arrived after the session left `InProgress`; a caller
    /// sequencing bug
    SessionTerminated,
    /// The guess failed validation; session state is untouched and further
    /// guesses are welcome
    InvalidGuess(ValidationError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "corpus contains no candidate equations"),
            Self::SessionTerminated => {
                write!(f, "the game is over; start a new game to keep playing")
            }
            Self::InvalidGuess(err) => write!(f, "invalid guess: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidGuess(err)
    }
}

/// One scored guess: the equation and the feedback it earned
///
/// Appended to session history in submission order, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    equation: Equation,
    feedback: Feedback,
}

impl GuessRecord {
    /// The guessed equation
    #[must_use]
    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// The feedback the guess earned
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// One play-through: target, attempt budget, history, and status
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Equation,
    attempts_remaining: u32,
    history: Vec<GuessRecord>,
    status: GameStatus,
    hints: KeyHints,
}

impl GameSession {
    /// Start a session with a target drawn uniformly from the corpus
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyCorpus`] if the corpus has no candidates.
    pub fn new(corpus: &[Equation]) -> Result<Self, SessionError> {
        let target = corpus
            .choose(&mut rand::rng())
            .ok_or(SessionError::EmptyCorpus)?
            .clone();
        Ok(Self::with_target(target))
    }

    /// Start a session with a fixed target
    ///
    /// Used by tests and by front ends that disable random selection.
    #[must_use]
    pub fn with_target(target: Equation) -> Self {
        Self {
            target,
            attempts_remaining: MAX_ATTEMPTS,
            history: Vec::new(),
            status: GameStatus::InProgress,
            hints: KeyHints::default(),
        }
    }

    /// Reset this session for a fresh play-through
    ///
    /// Draws a new target, restores the attempt budget, clears history and
    /// keyboard hints. The only way back from a terminal status.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyCorpus`] if the corpus has no candidates.
    pub fn start_new_game(&mut self, corpus: &[Equation]) -> Result<(), SessionError> {
        *self = Self::new(corpus)?;
        Ok(())
    }

    /// Validate and score one guess
    ///
    /// A rejected guess consumes no attempt and leaves every piece of session
    /// state unchanged. An accepted guess is scored, recorded, and counted,
    /// then the status transitions: `Won` on an all-correct feedback, `Lost`
    /// when the budget hits zero, otherwise still `InProgress`.
    ///
    /// # Errors
    /// [`SessionError::SessionTerminated`] if the session is not in progress,
    /// or [`SessionError::InvalidGuess`] carrying the validation failure.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Feedback, SessionError> {
        if self.status != GameStatus::InProgress {
            return Err(SessionError::SessionTerminated);
        }

        let guess = Equation::parse(raw)?;
        let feedback = Feedback::score(&guess, &self.target);

        self.hints.absorb(&guess, feedback);
        self.history.push(GuessRecord {
            equation: guess,
            feedback,
        });
        self.attempts_remaining -= 1;

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.attempts_remaining == 0 {
            self.status = GameStatus::Lost;
        }

        Ok(feedback)
    }

    /// Current status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the session has left `InProgress`
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// Guesses left in the budget
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// The attempt budget this session started with
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        MAX_ATTEMPTS
    }

    /// Scored guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Keyboard hints folded from every scored guess
    #[must_use]
    pub const fn hints(&self) -> &KeyHints {
        &self.hints
    }

    /// The target, revealed only once the session is over
    ///
    /// Returns `None` while `InProgress` so a front end cannot leak the
    /// answer mid-game.
    #[must_use]
    pub fn target(&self) -> Option<&Equation> {
        if self.is_over() { Some(&self.target) } else { None }
    }
}
