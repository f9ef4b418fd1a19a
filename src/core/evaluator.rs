//! Arithmetic expression evaluation
//!
//! Evaluates one side of an equation (no `=`): digits and the four binary
//! operators, with `*` and `/` binding tighter than `+` and `-`, and
//! left-to-right association within a precedence level. A `-` at the start
//! of an operand is folded into that operand's sign.

use std::fmt;

/// Tolerance for comparing evaluated expression values
///
/// Division produces non-integer intermediates, so balance checks must never
/// use exact floating equality.
pub const EPSILON: f64 = 1e-6;

/// Compare two evaluated values within [`EPSILON`]
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Error type for expression evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    /// A division operand evaluated to exactly zero
    DivisionByZero,
    /// The string does not match the token grammar (empty operand runs,
    /// characters outside digits and `+ - * /`)
    MalformedExpression,
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::MalformedExpression => write!(f, "not a valid arithmetic expression"),
        }
    }
}

impl std::error::Error for EvaluationError {}

/// Evaluate an arithmetic expression
///
/// Multiplications and divisions are folded into a running term before the
/// enclosing addition or subtraction is applied, so `2+3*4` is 14, not 20.
///
/// # Errors
/// Returns [`EvaluationError::DivisionByZero`] if a division operand is zero,
/// or [`EvaluationError::MalformedExpression`] if the string does not scan.
///
/// # Examples
/// ```
/// use numberle::core::evaluate;
///
/// assert_eq!(evaluate("6+4").unwrap(), 10.0);
/// assert_eq!(evaluate("1+2*3").unwrap(), 7.0);
/// assert!(evaluate("5/0").is_err());
/// ```
// Operands are integer-valued digit runs, so the zero check is exact
#[allow(clippy::float_cmp)]
pub fn evaluate(expr: &str) -> Result<f64, EvaluationError> {
    let bytes = expr.as_bytes();
    let mut pos = 0;

    let mut total = 0.0;
    let mut pending = b'+'; // applied when the current term closes
    let mut term = parse_operand(bytes, &mut pos)?;

    while pos < bytes.len() {
        let op = bytes[pos];
        pos += 1;
        let operand = parse_operand(bytes, &mut pos)?;

        match op {
            b'*' => term *= operand,
            b'/' => {
                if operand == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                term /= operand;
            }
            b'+' | b'-' => {
                total = apply(total, pending, term);
                pending = op;
                term = operand;
            }
            _ => return Err(EvaluationError::MalformedExpression),
        }
    }

    Ok(apply(total, pending, term))
}

/// Apply a closed term to the running total with `+` or `-`
fn apply(total: f64, op: u8, term: f64) -> f64 {
    if op == b'-' { total - term } else { total + term }
}

/// Parse one operand: an optional leading `-` followed by a digit run
///
/// Called only at position 0 or directly after an operator, which is exactly
/// where a `-` is unary.
fn parse_operand(bytes: &[u8], pos: &mut usize) -> Result<f64, EvaluationError> {
    let mut sign = 1.0;
    if *pos < bytes.len() && bytes[*pos] == b'-' {
        sign = -1.0;
        *pos += 1;
    }

    let start = *pos;
    let mut value = 0.0;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        value = value * 10.0 + f64::from(bytes[*pos] - b'0');
        *pos += 1;
    }

    if *pos == start {
        return Err(EvaluationError::MalformedExpression);
    }

    Ok(sign * value)
}
