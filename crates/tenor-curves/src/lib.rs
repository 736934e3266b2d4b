//! # Tenor Curves
//!
//! Dated term structure store for the Tenor bond analytics workspace.
//!
//! A [`Curve`] holds one row per tenor date with three columns: discount
//! factor, zero rate and market rate. Values between dates are read by
//! linear interpolation against `ln(seconds since the Unix epoch)` of the
//! date at UTC midnight. Queries outside the stored dates return the nearest
//! end value.
//!
//! ## Quick Start
//!
//! ```rust
//! use tenor_core::Date;
//! use tenor_curves::prelude::*;
//!
//! let curve = Curve::load(vec![
//!     CurveRow::new(Date::from_ymd(2023, 1, 1).unwrap(), 0.97, 3.0, 3.1),
//!     CurveRow::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.91, 3.2, 3.3),
//! ])
//! .unwrap();
//!
//! // Rates are stored as fractions
//! let zero = curve.interpolate(Date::from_ymd(2025, 1, 1).unwrap(), CurveColumn::ZeroRate).unwrap();
//! assert!((zero - 0.032).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod curve;
pub mod error;
pub mod point;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::Curve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::point::{CurveColumn, CurvePoint, CurveRow};
}

pub use curve::Curve;
pub use error::{CurveError, CurveResult};
pub use point::{CurveColumn, CurvePoint, CurveRow};
