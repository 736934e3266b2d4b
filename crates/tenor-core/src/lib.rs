//! # Tenor Core
//!
//! Core types and error handling for the Tenor bond analytics workspace.
//!
//! This crate provides the building blocks shared by every other crate:
//!
//! - **Types**: [`Date`] with calendar month stepping and the log-time
//!   transform used by curve interpolation, and coupon [`Frequency`]
//! - **Errors**: [`TenorError`] and the [`TenorResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let first_coupon = Date::parse_dmy("01/01/2020").unwrap();
//! let frequency = Frequency::from_payments_per_year(2).unwrap();
//! let next = first_coupon.add_months(frequency.months_per_period() as i32).unwrap();
//! assert_eq!(next, Date::from_ymd(2020, 7, 1).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{TenorError, TenorResult};
    pub use crate::types::{Date, Frequency, DAYS_PER_YEAR};
}

// Re-export commonly used types at crate root
pub use error::{TenorError, TenorResult};
pub use types::{Date, Frequency, DAYS_PER_YEAR};
