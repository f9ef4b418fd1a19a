//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckResult, CheckedSides, check_equation};
pub use play::run_play;
