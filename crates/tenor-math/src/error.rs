//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
///
/// Running out of iterations is deliberately absent: solvers report that
/// through [`SolverResult::converged`](crate::solvers::SolverResult).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// The objective evaluated to NaN or infinity.
    #[error("Domain error: objective is not finite at x = {x} (value: {value})")]
    DomainError {
        /// The point where evaluation failed.
        x: f64,
        /// The non-finite value produced.
        value: f64,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates a domain error for a non-finite evaluation.
    #[must_use]
    pub fn domain_error(x: f64, value: f64) -> Self {
        Self::DomainError { x, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::insufficient_data(1, 0);
        assert!(err.to_string().contains("need at least 1"));

        let err = MathError::InvalidBracket {
            a: -0.05,
            b: 0.2,
            fa: 12.0,
            fb: 3.0,
        };
        assert!(err.to_string().contains("same sign"));
    }
}
