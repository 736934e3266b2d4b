//! Error types for the Tenor workspace.
//!
//! Higher layers wrap [`TenorError`] in their own error enums; this one only
//! covers failures in the shared domain types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type TenorResult<T> = Result<T, TenorError>;

/// The core error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TenorError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Coupon frequency that does not divide the year into whole months.
    #[error("Invalid coupon frequency: {value} payments per year")]
    InvalidFrequency {
        /// The rejected payments-per-year value.
        value: u32,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl TenorError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid frequency error.
    #[must_use]
    pub fn invalid_frequency(value: u32) -> Self {
        Self::InvalidFrequency { value }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TenorError::invalid_date("31/02/2024 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_frequency_error() {
        let err = TenorError::invalid_frequency(5);
        assert!(err.to_string().contains("5 payments per year"));
    }
}
