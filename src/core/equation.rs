//! Equation representation and validation
//!
//! An Equation is a fixed-length candidate that has passed the full
//! validation chain, so every constructed value is target-eligible.

use super::evaluator;
use rustc_hash::FxHashMap;
use std::fmt;

/// Fixed length of every equation, in characters
pub const EQUATION_LENGTH: usize = 7;

/// Error type for rejected candidate equations
///
/// Checks run in this order and short-circuit on the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Length differs from [`EQUATION_LENGTH`]
    BadLength(usize),
    /// No `=`, more than one `=`, or `=` at either end
    MissingEquals,
    /// No arithmetic operator anywhere in the candidate
    MissingOperator,
    /// The two sides do not evaluate to the same value, or a side does not
    /// evaluate at all
    Unbalanced,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => {
                write!(f, "Equation must be exactly {EQUATION_LENGTH} characters, got {len}")
            }
            Self::MissingEquals => {
                write!(f, "Equation needs exactly one '=', not at either end")
            }
            Self::MissingOperator => {
                write!(f, "Equation needs at least one of + - * /")
            }
            Self::Unbalanced => write!(f, "The two sides are not equal"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validated equation, usable as a guess or a target
///
/// Stores the text as bytes alongside it for position lookups during scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    text: String,
    chars: [u8; EQUATION_LENGTH],
    equals_index: usize,
}

impl Equation {
    /// Validate a candidate and construct an Equation
    ///
    /// Runs the full check chain: length, `=` placement, operator presence,
    /// then semantic balance via the evaluator. Evaluator failures (division
    /// by zero, malformed side) surface as [`ValidationError::Unbalanced`],
    /// never as a raw evaluation error.
    ///
    /// Pure: identical input always yields an identical result.
    ///
    /// # Errors
    /// Returns the first failing check's [`ValidationError`].
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Equation, ValidationError};
    ///
    /// assert!(Equation::parse("6+4=2*5").is_ok());
    /// assert_eq!(Equation::parse("6+4=11"), Err(ValidationError::BadLength(6)));
    /// assert_eq!(Equation::parse("5/0=5/0"), Err(ValidationError::Unbalanced));
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe because a
    /// candidate that survives evaluation contains only ASCII digits and
    /// operators.
    pub fn parse(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text: String = text.into();

        let char_count = text.chars().count();
        if char_count != EQUATION_LENGTH {
            return Err(ValidationError::BadLength(char_count));
        }

        if text.chars().filter(|&c| c == '=').count() != 1
            || text.starts_with('=')
            || text.ends_with('=')
        {
            return Err(ValidationError::MissingEquals);
        }

        if !text.chars().any(|c| matches!(c, '+' | '-' | '*' | '/')) {
            return Err(ValidationError::MissingOperator);
        }

        let (left, right) = text
            .split_once('=')
            .ok_or(ValidationError::MissingEquals)?;
        let lhs = checked_side(left)?;
        let rhs = checked_side(right)?;
        if !evaluator::approx_eq(lhs, rhs) {
            return Err(ValidationError::Unbalanced);
        }

        let equals_index = left.len();
        let chars: [u8; EQUATION_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self {
            text,
            chars,
            equals_index,
        })
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the equation as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; EQUATION_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-6)
    ///
    /// # Panics
    /// Panics if position >= [`EQUATION_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// The expression left of `=`
    #[must_use]
    pub fn left(&self) -> &str {
        &self.text[..self.equals_index]
    }

    /// The expression right of `=`
    #[must_use]
    pub fn right(&self) -> &str {
        &self.text[self.equals_index + 1..]
    }

    /// Get the count of each character in the equation
    ///
    /// This is the multiset the scorer draws from when handling repeats.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

/// Evaluate one side, mapping any evaluator failure to `Unbalanced`
fn checked_side(side: &str) -> Result<f64, ValidationError> {
    evaluator::evaluate(side).map_err(|_| ValidationError::Unbalanced)
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_equation() {
        let eq = Equation::parse("6+4=2*5").unwrap();
        assert_eq!(eq.text(), "6+4=2*5");
        assert_eq!(eq.chars(), b"6+4=2*5");
        assert_eq!(eq.left(), "6+4");
        assert_eq!(eq.right(), "2*5");
    }

    #[test]
    fn parse_bad_length() {
        assert_eq!(Equation::parse(""), Err(ValidationError::BadLength(0)));
        assert_eq!(Equation::parse("1+1=2"), Err(ValidationError::BadLength(5)));
        assert_eq!(
            Equation::parse("10+10=20"),
            Err(ValidationError::BadLength(8))
        );
    }

    #[test]
    fn parse_missing_equals() {
        // No '=' at all
        assert_eq!(
            Equation::parse("1+2+3+4"),
            Err(ValidationError::MissingEquals)
        );
        // '=' at either end
        assert_eq!(
            Equation::parse("=1+2+34"),
            Err(ValidationError::MissingEquals)
        );
        assert_eq!(
            Equation::parse("1+2+34="),
            Err(ValidationError::MissingEquals)
        );
        // More than one '='
        assert_eq!(
            Equation::parse("1=1=1+0"),
            Err(ValidationError::MissingEquals)
        );
    }

    #[test]
    fn parse_missing_operator() {
        // Two bare numbers are rejected even though they are equal
        assert_eq!(
            Equation::parse("123=123"),
            Err(ValidationError::MissingOperator)
        );
    }

    #[test]
    fn parse_unbalanced() {
        assert_eq!(Equation::parse("6+4=2*6"), Err(ValidationError::Unbalanced));
        assert_eq!(Equation::parse("9-5=1+1"), Err(ValidationError::Unbalanced));
    }

    #[test]
    fn parse_swallows_evaluation_errors() {
        // Division by zero on both sides is Unbalanced, never a raw error
        assert_eq!(Equation::parse("5/0=5/0"), Err(ValidationError::Unbalanced));
        // Garbage characters fail to scan, also Unbalanced
        assert_eq!(Equation::parse("ab+c=de"), Err(ValidationError::Unbalanced));
        assert_eq!(Equation::parse("1+*2=33"), Err(ValidationError::Unbalanced));
    }

    #[test]
    fn parse_division_within_epsilon() {
        // 12/5 = 2.4 exactly in f64, compared with epsilon
        assert!(Equation::parse("12/5=12").is_err());
        let eq = Equation::parse("8/4=4/2").unwrap();
        assert_eq!(eq.left(), "8/4");
    }

    #[test]
    fn parse_unary_minus_sides() {
        let eq = Equation::parse("-2*3=-6").unwrap();
        assert_eq!(eq.left(), "-2*3");
        assert_eq!(eq.right(), "-6");

        let eq = Equation::parse("-49=-49").unwrap();
        assert_eq!(eq.left(), "-49");
    }

    #[test]
    fn parse_is_idempotent() {
        let a = Equation::parse("6+4=2*5");
        let b = Equation::parse("6+4=2*5");
        assert_eq!(a, b);

        let bad_a = Equation::parse("6+4=2*6");
        let bad_b = Equation::parse("6+4=2*6");
        assert_eq!(bad_a, bad_b);
    }

    #[test]
    fn char_counts_tracks_repeats() {
        let eq = Equation::parse("1+1=1+1").unwrap();
        let counts = eq.char_counts();
        assert_eq!(counts.get(&b'1'), Some(&4));
        assert_eq!(counts.get(&b'+'), Some(&2));
        assert_eq!(counts.get(&b'='), Some(&1));
    }

    #[test]
    fn equation_display() {
        let eq = Equation::parse("6+4=2*5").unwrap();
        assert_eq!(format!("{eq}"), "6+4=2*5");
    }
}
