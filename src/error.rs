//! Error types for the Quine-McCluskey minimizer
//!
//! Validation failures are reported before any algorithm phase runs. The
//! [`MinimizeError::UnreachableCoverage`] variant is different: it signals a
//! broken internal invariant rather than bad input.

use std::fmt;
use std::io;
use std::sync::Arc;

pub use crate::input::error::InputError;

/// Largest number of variables accepted by the minimizer
pub const MAX_VARIABLES: usize = 8;

/// Which input list an offending term came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// A term the function must evaluate true on
    Minterm,
    /// A term whose value is unconstrained
    DontCare,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermKind::Minterm => write!(f, "Minterm"),
            TermKind::DontCare => write!(f, "Don't care term"),
        }
    }
}

/// The main error type for minimization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// Variable count outside `1..=8`
    InvalidConfiguration {
        /// The rejected variable count
        num_vars: usize,
    },

    /// A minterm or don't-care outside `0..=max`
    OutOfRangeTerm {
        /// The offending value, as supplied by the caller
        term: i64,
        /// The list the value came from
        kind: TermKind,
        /// Largest valid term for the configured variable count
        max: u32,
    },

    /// Custom variable labels don't match the variable count
    LabelCountMismatch {
        /// Number of variables
        expected: usize,
        /// Number of labels supplied
        actual: usize,
    },

    /// The same custom variable label was given twice
    DuplicateLabel {
        /// The repeated label
        label: Arc<str>,
    },

    /// The cover selector ran out of candidates with minterms still uncovered
    ///
    /// Every minterm is covered by some prime implicant by construction, so this
    /// indicates a bug in prime generation or cover selection, not bad input.
    UnreachableCoverage {
        /// Minterms left without a covering implicant
        uncovered: Vec<u32>,
    },
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::InvalidConfiguration { num_vars } => write!(
                f,
                "Number of variables must be between 1 and {}, got {}",
                MAX_VARIABLES, num_vars
            ),
            MinimizeError::OutOfRangeTerm { term, kind, max } => write!(
                f,
                "{} {} out of range (valid range: 0..={})",
                kind, term, max
            ),
            MinimizeError::LabelCountMismatch { expected, actual } => write!(
                f,
                "Variable label count ({}) doesn't match variable count ({})",
                actual, expected
            ),
            MinimizeError::DuplicateLabel { label } => {
                write!(f, "Variable label '{}' is used more than once", label)
            }
            MinimizeError::UnreachableCoverage { uncovered } => write!(
                f,
                "Internal error: no prime implicant covers minterms {:?}",
                uncovered
            ),
        }
    }
}

impl std::error::Error for MinimizeError {}

impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        match err {
            MinimizeError::UnreachableCoverage { .. } => io::Error::other(err),
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}
