//! One-shot equation check
//!
//! Validates a candidate equation and reports the evaluated side values,
//! or the reason the candidate was rejected.

use crate::core::{Equation, ValidationError, evaluate};

/// Outcome of checking a single candidate
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    /// The candidate as entered (trimmed)
    pub text: String,
    /// The evaluated sides, or the first failing validation check
    pub outcome: Result<CheckedSides, ValidationError>,
}

/// The two sides of a valid equation and their shared value
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedSides {
    pub left: String,
    pub right: String,
    pub value: f64,
}

/// Run the full validation chain on one candidate
#[must_use]
pub fn check_equation(raw: &str) -> CheckResult {
    let text = raw.trim().to_string();

    let outcome = match Equation::parse(text.as_str()) {
        Ok(equation) => match evaluate(equation.left()) {
            Ok(value) => Ok(CheckedSides {
                left: equation.left().to_string(),
                right: equation.right().to_string(),
                value,
            }),
            // A validated equation always evaluates; keep the error typed anyway
            Err(_) => Err(ValidationError::Unbalanced),
        },
        Err(err) => Err(err),
    };

    CheckResult { text, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_valid_equation() {
        let result = check_equation("6+4=2*5");
        let sides = result.outcome.unwrap();
        assert_eq!(sides.left, "6+4");
        assert_eq!(sides.right, "2*5");
        assert!((sides.value - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn check_trims_surrounding_whitespace() {
        let result = check_equation("  6+4=2*5\n");
        assert_eq!(result.text, "6+4=2*5");
        assert!(result.outcome.is_ok());
    }

    #[test]
    fn check_reports_first_failing_check() {
        assert_eq!(
            check_equation("6+4=10").outcome,
            Err(ValidationError::BadLength(6))
        );
        assert_eq!(
            check_equation("1+2+3+4").outcome,
            Err(ValidationError::MissingEquals)
        );
        assert_eq!(
            check_equation("123=123").outcome,
            Err(ValidationError::MissingOperator)
        );
        assert_eq!(
            check_equation("6+4=2*6").outcome,
            Err(ValidationError::Unbalanced)
        );
    }
}
