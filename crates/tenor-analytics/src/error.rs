//! Error types for the analytics engine.
//!
//! Failures fall into three families: the bond's schedule cannot be built,
//! a root finder has no bracket (or hit a numerical domain error), or the
//! curve cannot be read.

use tenor_bonds::BondError;
use tenor_core::TenorError;
use tenor_curves::CurveError;
use tenor_math::MathError;
use thiserror::Error;

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for analytics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// No valid cash-flow schedule for the bond.
    #[error("schedule error: {reason}")]
    Schedule {
        /// Why the schedule could not be built.
        reason: String,
    },

    /// Root finding failed: no sign change over the bracket, or the
    /// objective left its numerical domain.
    #[error("{solver} solver error: {reason}")]
    Solver {
        /// Which solver failed.
        solver: String,
        /// Why it failed.
        reason: String,
    },

    /// The curve could not be read.
    #[error("interpolation error: {reason}")]
    Interpolation {
        /// Why the curve lookup failed.
        reason: String,
    },

    /// Invalid input parameter.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl AnalyticsError {
    /// Creates a solver error.
    #[must_use]
    pub fn solver(solver: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Solver {
            solver: solver.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Wraps a math error raised by the named solver.
    #[must_use]
    pub fn from_math(solver: &str, err: MathError) -> Self {
        Self::solver(solver, err.to_string())
    }
}

impl From<BondError> for AnalyticsError {
    fn from(err: BondError) -> Self {
        match err {
            BondError::Schedule { reason } => Self::Schedule { reason },
            other => Self::invalid_input(other.to_string()),
        }
    }
}

impl From<CurveError> for AnalyticsError {
    fn from(err: CurveError) -> Self {
        Self::Interpolation {
            reason: err.to_string(),
        }
    }
}

impl From<TenorError> for AnalyticsError {
    fn from(err: TenorError) -> Self {
        Self::invalid_input(err.to_string())
    }
}
