//! # Tenor Bonds
//!
//! Bond reference data and coupon schedule generation.
//!
//! This crate provides:
//!
//! - **Bond**: static fields read from a bond table, with the redemption
//!   date rule (a next call date, when present, replaces maturity)
//! - **Schedule**: remaining cash flows after an evaluation date and the
//!   accrued fraction of the running coupon period
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tenor_bonds::prelude::*;
//! use tenor_core::Date;
//!
//! let bond = BondBuilder::new()
//!     .identifier("XS0000000001")
//!     .nominal(dec!(100))
//!     .coupon_rate(dec!(5))
//!     .coupon_frequency(1)
//!     .first_coupon_date(Date::from_ymd(2020, 1, 1).unwrap())
//!     .maturity(Date::from_ymd(2025, 1, 1).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let schedule = ScheduleGenerator::generate(&bond, Date::from_ymd(2022, 6, 15).unwrap()).unwrap();
//! assert_eq!(schedule.len(), 3);
//! assert!((schedule.accrued_fraction() - 165.0 / 365.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

pub mod bond;
pub mod cashflows;
pub mod error;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond::{Bond, BondBuilder};
    pub use crate::cashflows::{CashFlow, CashFlowSchedule, CashFlowType, ScheduleGenerator};
    pub use crate::error::{BondError, BondResult};
}

pub use bond::{Bond, BondBuilder};
pub use cashflows::{CashFlow, CashFlowSchedule, CashFlowType, ScheduleGenerator};
pub use error::{BondError, BondResult};
