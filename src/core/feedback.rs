//! Per-guess feedback calculation and representation
//!
//! Feedback encodes the per-position verdicts of a guess using base-3:
//! - 0 = Absent (character not in the target)
//! - 1 = Misplaced (character in the target, wrong position)
//! - 2 = Correct (character in the correct position)
//!
//! The seven digits are stored as a single u16 value (0-2186), where each
//! position contributes digit × 3^position to the total.

use super::equation::{EQUATION_LENGTH, Equation};

/// Per-position verdict for one character of a guess
///
/// Ordered weakest to strongest so keyboard hints can upgrade with `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeedbackTag {
    /// Character does not appear in the target (grey)
    Absent,
    /// Character appears in the target but not at this position (yellow)
    Misplaced,
    /// Character is at this exact position in the target (green)
    Correct,
}

/// Feedback for one scored guess
///
/// Represents the colored verdicts as a single value.
/// Value range: 0-2186 (3^7 - 1 = 2187 possible feedbacks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u16);

impl Feedback {
    /// All correct (winning guess): every base-3 digit is 2, so 3^7 - 1
    pub const PERFECT: Self = Self(2186);

    /// Create feedback from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 2187
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        debug_assert!(value < 2187, "Feedback value must be < 2187");
        Self(value)
    }

    /// Get the raw feedback value (0-2186)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if this is a winning feedback (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 2186
    }

    /// Score `guess` against `target`
    ///
    /// The canonical two-pass multiset algorithm, which handles repeated
    /// digits and operators correctly:
    /// 1. First pass: mark exact position matches and remove each from the
    ///    pool of available target characters
    /// 2. Second pass: left to right, mark misplaced characters from the
    ///    remaining pool; whatever the pool cannot cover is absent
    ///
    /// The number of Correct plus Misplaced verdicts for any character never
    /// exceeds that character's occurrence count in the target.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Equation, Feedback};
    ///
    /// let guess = Equation::parse("3+7=2*5").unwrap();
    /// let target = Equation::parse("6+4=2*5").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// assert_eq!(feedback.count_correct(), 5);
    /// assert_eq!(feedback.count_misplaced(), 0);
    /// ```
    #[must_use]
    pub fn score(guess: &Equation, target: &Equation) -> Self {
        let mut result = [0u8; EQUATION_LENGTH];
        let mut available = target.char_counts();

        // First pass: exact position matches
        // Allow: index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..EQUATION_LENGTH {
            if guess.chars()[i] == target.chars()[i] {
                result[i] = 2;

                // Remove from available pool
                let symbol = guess.chars()[i];
                if let Some(count) = available.get_mut(&symbol) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but still in the pool
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..EQUATION_LENGTH {
            if result[i] == 0 {
                let symbol = guess.chars()[i];
                if let Some(count) = available.get_mut(&symbol)
                    && *count > 0
                {
                    result[i] = 1;
                    *count -= 1;
                }
            }
        }

        Self::from_digits(&result)
    }

    /// Decode into per-position tags, position 0 first
    #[must_use]
    pub fn tags(self) -> [FeedbackTag; EQUATION_LENGTH] {
        let mut tags = [FeedbackTag::Absent; EQUATION_LENGTH];
        let mut val = self.0;

        for tag in &mut tags {
            *tag = match val % 3 {
                2 => FeedbackTag::Correct,
                1 => FeedbackTag::Misplaced,
                _ => FeedbackTag::Absent,
            };
            val /= 3;
        }

        tags
    }

    /// Encode per-position tags back into a feedback value
    #[must_use]
    pub fn from_tags(tags: [FeedbackTag; EQUATION_LENGTH]) -> Self {
        let mut digits = [0u8; EQUATION_LENGTH];
        for (digit, tag) in digits.iter_mut().zip(tags) {
            *digit = match tag {
                FeedbackTag::Absent => 0,
                FeedbackTag::Misplaced => 1,
                FeedbackTag::Correct => 2,
            };
        }
        Self::from_digits(&digits)
    }

    /// Count the number of correct (green) verdicts
    #[must_use]
    pub fn count_correct(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..EQUATION_LENGTH {
            if val % 3 == 2 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Count the number of misplaced (yellow) verdicts
    #[must_use]
    pub fn count_misplaced(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..EQUATION_LENGTH {
            if val % 3 == 1 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Encode base-3 digits (position 0 first) into a feedback value
    fn from_digits(digits: &[u8; EQUATION_LENGTH]) -> Self {
        let mut value = 0u16;
        let mut multiplier = 1u16;
        for &digit in digits {
            value += u16::from(digit) * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(text: &str) -> Equation {
        Equation::parse(text).unwrap()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert_eq!(Feedback::PERFECT.value(), 2186);
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_correct(), 7);
        assert_eq!(Feedback::PERFECT.count_misplaced(), 0);
    }

    #[test]
    fn score_identity_is_all_correct() {
        // Any target scored against itself is a win
        for text in ["6+4=2*5", "1+1=1+1", "8/2/2=2", "9-3=2*3"] {
            let target = eq(text);
            assert_eq!(Feedback::score(&target, &target), Feedback::PERFECT);
        }
    }

    #[test]
    fn score_duplicate_characters() {
        // Target 1+1=1+1, guess 2+1=1+2:
        // '2' absent, '+' correct, '1' correct, '=' correct,
        // '1' correct, '+' correct, '2' absent
        let target = eq("1+1=1+1");
        let guess = eq("2+1=1+2");
        let feedback = Feedback::score(&guess, &target);

        use FeedbackTag::{Absent, Correct};
        assert_eq!(
            feedback.tags(),
            [Absent, Correct, Correct, Correct, Correct, Correct, Absent]
        );
    }

    #[test]
    fn score_never_over_credits_a_character() {
        // Target has two '2's; a guess with four '2's gets at most two
        // Correct+Misplaced verdicts for '2'
        let target = eq("2+2=1+3");
        let guess = eq("2*2=2*2");
        let feedback = Feedback::score(&guess, &target);

        let tags = feedback.tags();
        let credited = (0..EQUATION_LENGTH)
            .filter(|&i| guess.chars()[i] == b'2' && tags[i] != FeedbackTag::Absent)
            .count();
        assert!(credited <= 2);
    }

    #[test]
    fn score_misplaced_consumes_pool_left_to_right() {
        // Target 6+4=2*5, guess 4+6=2*5: the 4 and 6 are both misplaced
        let target = eq("6+4=2*5");
        let guess = eq("4+6=2*5");
        let feedback = Feedback::score(&guess, &target);

        use FeedbackTag::{Correct, Misplaced};
        assert_eq!(
            feedback.tags(),
            [
                Misplaced, Correct, Misplaced, Correct, Correct, Correct, Correct
            ]
        );
    }

    #[test]
    fn score_all_absent_positions() {
        let target = eq("6+4=2*5");
        let guess = eq("9-1=8*1");
        let feedback = Feedback::score(&guess, &target);

        let tags = feedback.tags();
        assert_eq!(tags[0], FeedbackTag::Absent); // '9' not in target
        assert_eq!(tags[1], FeedbackTag::Absent); // '-' not in target
        assert_eq!(tags[3], FeedbackTag::Correct); // '=' lines up
        assert_eq!(tags[5], FeedbackTag::Correct); // '*' lines up
    }

    #[test]
    fn tags_round_trip() {
        let target = eq("1+1=1+1");
        let guess = eq("2+1=1+2");
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(Feedback::from_tags(feedback.tags()), feedback);
        assert_eq!(Feedback::from_tags(Feedback::PERFECT.tags()), Feedback::PERFECT);
    }

    #[test]
    fn base3_encoding_matches_hand_computation() {
        // Guess 4+6=2*5 vs 6+4=2*5: digits 1,2,1,2,2,2,2 (position 0 first)
        // 1 + 2*3 + 1*9 + 2*27 + 2*81 + 2*243 + 2*729 = 2176
        let target = eq("6+4=2*5");
        let guess = eq("4+6=2*5");
        let feedback = Feedback::score(&guess, &target);
        assert_eq!(feedback.value(), 2176);
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.count_misplaced(), 2);
    }

    #[test]
    fn tag_ordering_supports_upgrades() {
        assert!(FeedbackTag::Correct > FeedbackTag::Misplaced);
        assert!(FeedbackTag::Misplaced > FeedbackTag::Absent);
    }
}
