//! Keyboard hint bookkeeping
//!
//! Front ends color an on-screen keyboard from the best verdict seen so far
//! for each symbol. This is a pure fold over every tag the session has
//! produced, separate from the scoring algorithm itself.

use crate::core::{Equation, Feedback, FeedbackTag};
use rustc_hash::FxHashMap;

/// Best feedback seen so far per symbol
///
/// A symbol only ever upgrades: once `Correct` it stays `Correct` even if a
/// later guess places it badly.
#[derive(Debug, Clone, Default)]
pub struct KeyHints {
    best: FxHashMap<u8, FeedbackTag>,
}

impl KeyHints {
    /// Fold one scored guess into the hints
    pub fn absorb(&mut self, guess: &Equation, feedback: Feedback) {
        for (&symbol, tag) in guess.chars().iter().zip(feedback.tags()) {
            self.best
                .entry(symbol)
                .and_modify(|best| {
                    if tag > *best {
                        *best = tag;
                    }
                })
                .or_insert(tag);
        }
    }

    /// Best verdict seen for a symbol, or `None` if never guessed
    #[must_use]
    pub fn get(&self, symbol: u8) -> Option<FeedbackTag> {
        self.best.get(&symbol).copied()
    }

    /// True before any guess has been absorbed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
