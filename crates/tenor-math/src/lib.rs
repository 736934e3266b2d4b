//! # Tenor Math
//!
//! Numerical building blocks for the Tenor bond analytics workspace.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketing root finders ([`bisection`], [`brent`]) that
//!   report a best-effort estimate with a convergence flag instead of failing
//!   when the iteration budget runs out
//! - **Interpolation**: Piecewise linear interpolation with flat boundaries
//!
//! [`bisection`]: solvers::bisection
//! [`brent`]: solvers::brent

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
    pub use crate::solvers::{bisection, brent, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
