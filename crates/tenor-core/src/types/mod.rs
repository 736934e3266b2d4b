//! Domain types for bond analytics.
//!
//! - [`Date`]: Calendar date with month stepping and the log-time transform
//! - [`Frequency`]: Coupon payment frequency

mod date;
mod frequency;

pub use date::{Date, DAYS_PER_YEAR};
pub use frequency::Frequency;
