//! Core domain types for the equation rules engine
//!
//! Expression evaluation, equation validation, and feedback scoring.
//! Everything here is pure: no I/O, no session state, identical inputs
//! always produce identical results.

mod equation;
mod evaluator;
mod feedback;

pub use equation::{EQUATION_LENGTH, Equation, ValidationError};
pub use evaluator::{EPSILON, EvaluationError, approx_eq, evaluate};
pub use feedback::{Feedback, FeedbackTag};
