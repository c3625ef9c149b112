//! Error types for distribution fitting
//!
//! Provides a unified error type for all distfit crates.

use crate::range::Range;
use thiserror::Error;

/// Core error type for distribution modelling and goodness-of-fit testing
///
/// Every variant is a caller-visible argument error: nothing here is retried,
/// and nothing describes an internal failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter or query argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Sample support does not fit inside the domain of a model family
    #[error("{family} is not applicable: sample range {sample} is outside domain {domain}")]
    OutOfDomain {
        family: &'static str,
        sample: Range,
        domain: Range,
    },

    /// A parameter estimate derived from the sample is invalid
    #[error("Cannot estimate {parameter} of {family} for the dataset")]
    Estimation {
        family: &'static str,
        parameter: &'static str,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a probability level outside [0, 1]
    pub fn invalid_level(level: f64) -> Self {
        Self::InvalidArgument(format!("Level {level} must be in [0, 1]"))
    }

    /// Create an error for a parameter that must be strictly positive
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidArgument(format!("{name} must be positive, got {value}"))
    }

    /// Create an error for a parameter that must be finite
    pub fn non_finite(name: &str, value: f64) -> Self {
        Self::InvalidArgument(format!("{name} must be finite, got {value}"))
    }

    /// Whether this error belongs to the invalid-argument kind
    ///
    /// All current variants do; the score table relies on this to decide
    /// which fitting failures mean "family not applicable".
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::InsufficientData { .. }
                | Self::OutOfDomain { .. }
                | Self::Estimation { .. }
        )
    }

    /// Check that a probability level lies in [0, 1]
    pub fn check_level(level: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&level) {
            return Err(Self::invalid_level(level));
        }
        Ok(())
    }

    /// Check that a parameter is finite and strictly positive
    pub fn check_positive(name: &str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Self::non_finite(name, value));
        }
        if value <= 0.0 {
            return Err(Self::non_positive(name, value));
        }
        Ok(())
    }

    /// Check that a parameter is finite
    pub fn check_finite(name: &str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Self::non_finite(name, value));
        }
        Ok(())
    }

    /// Check that a probability parameter lies in [0, 1]
    pub fn check_probability(name: &str, value: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Self::InvalidArgument(format!(
                "{name} must be in [0, 1], got {value}"
            )));
        }
        Ok(())
    }
}
