//! Root-finding algorithms.
//!
//! Both solvers need a bracket with a sign change and fail with
//! [`MathError::InvalidBracket`](crate::MathError::InvalidBracket) otherwise.
//!
//! - [`bisection`]: halves the bracket until the residual is small
//! - [`brent`]: bisection safeguarded by secant and inverse quadratic steps
//!
//! Neither treats an exhausted iteration budget as an error. The last
//! estimate is returned with [`SolverResult::converged`] set to `false`.
//!
//! # Example
//!
//! ```rust
//! use tenor_math::solvers::{brent, SolverConfig};
//!
//! // Bond: 5% coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = brent(price_fn, 0.0, 0.20, &SolverConfig::default()).unwrap();
//! assert!(result.converged);
//! assert!(result.root > 0.05);  // YTM > coupon rate for discount bond
//! ```

mod bisection;
mod brent;

pub use bisection::bisection;
pub use brent::brent;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// True when `residual` is inside the configured tolerance.
    #[must_use]
    pub(crate) fn accepts(&self, residual: f64) -> bool {
        residual == 0.0 || residual.abs() < self.tolerance
    }
}

/// Result of a root-finding operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root (or best estimate when not converged).
    pub root: f64,
    /// Number of function evaluations after the bracket check.
    pub iterations: u32,
    /// Objective value at `root`.
    pub residual: f64,
    /// Whether the tolerance was met before the iteration budget ran out.
    pub converged: bool,
}

impl SolverResult {
    pub(crate) fn converged(root: f64, iterations: u32, residual: f64) -> Self {
        Self {
            root,
            iterations,
            residual,
            converged: true,
        }
    }

    pub(crate) fn best_effort(root: f64, iterations: u32, residual: f64) -> Self {
        Self {
            root,
            iterations,
            residual,
            converged: false,
        }
    }
}
