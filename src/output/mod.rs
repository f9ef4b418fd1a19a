//! Terminal output formatting
//!
//! Display utilities for feedback tiles, keyboard hints, and command results.

pub mod display;
pub mod formatters;

pub use display::print_check_result;
pub use formatters::{
    KEYBOARD_SYMBOLS, feedback_tiles, feedback_to_emoji, format_value, keyboard_line,
};
