//! Equation corpora
//!
//! Provides the embedded default corpus compiled into the binary and a
//! loader for external corpus files.

mod embedded;
pub mod loader;

pub use embedded::{EQUATIONS, EQUATIONS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EQUATION_LENGTH, Equation};

    #[test]
    fn equations_count_matches_const() {
        assert_eq!(EQUATIONS.len(), EQUATIONS_COUNT);
    }

    #[test]
    fn embedded_equations_are_well_formed() {
        for &equation in EQUATIONS {
            assert_eq!(
                equation.len(),
                EQUATION_LENGTH,
                "Equation '{equation}' is not {EQUATION_LENGTH} characters"
            );
            assert!(
                Equation::parse(equation).is_ok(),
                "Equation '{equation}' is not target-eligible"
            );
        }
    }

    #[test]
    fn embedded_list_is_not_empty() {
        assert!(EQUATIONS_COUNT > 0);
    }
}
