//! Numberle
//!
//! A Wordle-style puzzle where the hidden target is a short arithmetic
//! equation. The engine validates guesses, scores them character by
//! character, and tracks the attempt-bounded session state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use numberle::core::{Equation, Feedback};
//! use numberle::session::GameSession;
//!
//! let target = Equation::parse("6+4=2*5").unwrap();
//! let mut session = GameSession::with_target(target);
//!
//! let feedback = session.submit_guess("3+7=2*5").unwrap();
//! assert_eq!(feedback.count_correct(), 5);
//! ```

// Core domain types: evaluation, validation, scoring
pub mod core;

// Game session state machine
pub mod session;

// Equation corpora (embedded list and file loader)
pub mod equations;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
