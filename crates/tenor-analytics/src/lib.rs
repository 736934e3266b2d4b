//! # Tenor Analytics
//!
//! Bond valuation and risk metrics against a discount curve.
//!
//! This crate provides:
//!
//! - **Pricing**: dirty and clean price from the curve's discount factors at
//!   a credit spread
//! - **Z-spread**: bisection for the parallel spread over the zero curve that
//!   reprices a bond to a target price
//! - **Yield**: Brent solve for the flat yield-to-maturity
//! - **Risk**: Macaulay and modified duration, convexity
//! - **Valuation**: the per-bond pipeline and batch runs that isolate
//!   failures per bond
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tenor_analytics::prelude::*;
//! use tenor_bonds::BondBuilder;
//! use tenor_core::Date;
//! use tenor_curves::{Curve, CurveRow};
//!
//! let evaluation = Date::from_ymd(2022, 6, 15).unwrap();
//! let curve = Curve::load(vec![
//!     CurveRow::new(Date::from_ymd(2022, 1, 1).unwrap(), 1.0, 3.0, 3.0),
//!     CurveRow::new(Date::from_ymd(2030, 1, 1).unwrap(), 0.78, 3.0, 3.0),
//! ])
//! .unwrap();
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
//! let priced = price(evaluation, &bond, &curve, 0.0).unwrap();
//! assert!((priced.dirty_price - priced.clean_price - priced.accrued_interest).abs() < 1e-12);
//!
//! let config = ValuationConfig::default();
//! let report = value_portfolio(evaluation, &[bond], &curve, &config);
//! assert_eq!(report.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

pub mod config;
pub mod error;
pub mod parallel;
pub mod pricing;
pub mod risk;
pub mod spreads;
pub mod valuation;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{
        ValuationConfig, YieldBracket, YieldCompounding, YieldSettings, ZSpreadSettings,
    };
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::pricing::{price, BondPricer, PriceResult};
    pub use crate::risk::{convexity, duration, Durations};
    pub use crate::spreads::{solve_z_spread, ZSpreadCalculator, ZSpreadKernel, ZSpreadSolution};
    pub use crate::valuation::{
        value_portfolio, BondOutcome, BondValuation, ValuationFailure, ValuationReport,
        ValuationStage, Valuator,
    };
    pub use crate::yields::{price_from_yield, solve_ytm, solve_yield, YieldSolution};
}

pub use config::ValuationConfig;
pub use error::{AnalyticsError, AnalyticsResult};
pub use valuation::{value_portfolio, BondValuation, ValuationReport, Valuator};
