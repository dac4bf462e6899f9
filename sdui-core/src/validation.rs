//! Validation result type
//!
//! Validation is fail-soft: every applicable check runs and every failure
//! is reported, so a single result can carry an unbounded number of
//! messages for an arbitrarily deep tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of validating a descriptor tree
///
/// Either `Success`, or `Failure` holding an ordered, non-empty list of
/// human-readable error strings. The non-empty invariant holds by
/// construction: [`ValidationResult::from_errors`] maps an empty list to
/// `Success` and is the only intended way to build a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// All applicable checks passed
    Success,
    /// One or more checks failed
    Failure(Vec<String>),
}

impl ValidationResult {
    /// Build a result from accumulated error messages
    ///
    /// An empty list means every check passed.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self::Success
        } else {
            Self::Failure(errors)
        }
    }

    /// Whether validation passed
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether validation failed
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Accumulated error messages, empty on success
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success => &[],
            Self::Failure(errors) => errors,
        }
    }

    /// Number of accumulated errors
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().len()
    }

    /// One-line summary of the outcome
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Success => "Validation passed".to_string(),
            Self::Failure(errors) => {
                format!("Validation failed with {} errors", errors.len())
            }
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for error in self.errors() {
            writeln!(f, "  {error}")?;
        }
        Ok(())
    }
}
