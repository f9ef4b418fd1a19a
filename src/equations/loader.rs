//! Corpus loading utilities
//!
//! Turns equation text (a file or the embedded list) into validated
//! `Equation` values. The engine itself never touches a path; it receives
//! the already-parsed list.

use crate::core::Equation;
use std::fs;
use std::io;
use std::path::Path;

/// Load a corpus from a file
///
/// One candidate per line. Blank lines and lines that fail validation are
/// skipped, so only target-eligible equations come back.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use numberle::equations::loader::load_from_file;
///
/// let corpus = load_from_file("data/equations.txt").unwrap();
/// println!("Loaded {} equations", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Equation>> {
    let content = fs::read_to_string(path)?;

    let equations = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Equation::parse(trimmed).ok()
            }
        })
        .collect();

    Ok(equations)
}

/// Convert an embedded string slice to validated equations
///
/// # Examples
/// ```
/// use numberle::equations::loader::equations_from_slice;
/// use numberle::equations::EQUATIONS;
///
/// let corpus = equations_from_slice(EQUATIONS);
/// assert_eq!(corpus.len(), EQUATIONS.len());
/// ```
#[must_use]
pub fn equations_from_slice(slice: &[&str]) -> Vec<Equation> {
    slice
        .iter()
        .filter_map(|&s| Equation::parse(s).ok())
        .collect()
}
