//! Error types for curve operations.

use tenor_core::{Date, TenorError};
use tenor_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The curve cannot be interpolated (no rows, or malformed knots).
    #[error("Interpolation error: {reason}")]
    Interpolation {
        /// Description of the interpolation error.
        reason: String,
    },

    /// A date that has no log-time value (on or before the Unix epoch).
    #[error("Invalid curve date: {reason}")]
    InvalidDate {
        /// Description of the date problem.
        reason: String,
    },

    /// Curve dates are not strictly increasing.
    #[error("Non-monotonic curve dates at row {index}: {previous} >= {current}")]
    NonMonotonicDates {
        /// Row index where the violation occurred.
        index: usize,
        /// Date on the previous row.
        previous: Date,
        /// Date on this row.
        current: Date,
    },

    /// A curve value is NaN or infinite.
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why the value is invalid.
        reason: String,
    },
}

impl CurveError {
    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation(reason: impl Into<String>) -> Self {
        Self::Interpolation {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        Self::interpolation(err.to_string())
    }
}

impl From<TenorError> for CurveError {
    fn from(err: TenorError) -> Self {
        match err {
            TenorError::InvalidDate { message } => Self::InvalidDate { reason: message },
            other => Self::interpolation(other.to_string()),
        }
    }
}
