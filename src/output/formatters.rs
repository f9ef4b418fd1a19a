//! Formatting utilities for terminal output

use crate::core::{Equation, Feedback, FeedbackTag};
use crate::session::KeyHints;
use colored::Colorize;

/// Every symbol a guess can contain, in keyboard display order
pub const KEYBOARD_SYMBOLS: &[u8] = b"0123456789+-*/=";

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .tags()
        .iter()
        .map(|tag| match tag {
            FeedbackTag::Correct => '🟩',
            FeedbackTag::Misplaced => '🟨',
            FeedbackTag::Absent => '⬜',
        })
        .collect()
}

/// Render a guess as colored tiles, one per character
#[must_use]
pub fn feedback_tiles(guess: &Equation, feedback: Feedback) -> String {
    let mut line = String::new();
    for (&symbol, tag) in guess.chars().iter().zip(feedback.tags()) {
        let tile = format!(" {} ", symbol as char);
        let colored_tile = match tag {
            FeedbackTag::Correct => tile.black().on_green(),
            FeedbackTag::Misplaced => tile.black().on_yellow(),
            FeedbackTag::Absent => tile.white().on_bright_black(),
        };
        line.push_str(&colored_tile.to_string());
    }
    line
}

/// Render the symbol keyboard colored by the best verdict seen so far
#[must_use]
pub fn keyboard_line(hints: &KeyHints) -> String {
    let mut line = String::new();
    for &symbol in KEYBOARD_SYMBOLS {
        let key = (symbol as char).to_string();
        let colored_key = match hints.get(symbol) {
            Some(FeedbackTag::Correct) => key.green().bold(),
            Some(FeedbackTag::Misplaced) => key.yellow(),
            Some(FeedbackTag::Absent) => key.bright_black(),
            None => key.normal(),
        };
        line.push_str(&colored_key.to_string());
        line.push(' ');
    }
    line
}

/// Format an evaluated side value, dropping a trailing `.0` for integers
#[must_use]
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < crate::core::EPSILON {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.4}")
    }
}
