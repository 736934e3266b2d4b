//! Curve pricing of a bond at a credit spread.
//!
//! Each remaining cash flow is discounted with the curve's discount factor
//! at its payment date and an additional continuously compounded spread:
//!
//! ```text
//! Dirty = Σ CF_i × DF(d_i) × exp(-s × t_i)
//! ```
//!
//! where `s = spread_bps / 10_000` and `t_i` is days / 365 from the
//! evaluation date.

use serde::{Deserialize, Serialize};

use tenor_bonds::{Bond, CashFlowSchedule, ScheduleGenerator};
use tenor_core::Date;
use tenor_curves::Curve;

use crate::error::AnalyticsResult;

/// Basis points per unit of rate.
pub const BPS_PER_UNIT: f64 = 10_000.0;

/// Price of a bond at a spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    /// Accrued interest of the running coupon period.
    pub accrued_interest: f64,
    /// Discounted value of the remaining cash flows.
    pub dirty_price: f64,
    /// `dirty_price - accrued_interest`.
    pub clean_price: f64,
}

/// Prices cash-flow schedules off a curve's discount column.
#[derive(Debug, Clone, Copy)]
pub struct BondPricer<'a> {
    curve: &'a Curve,
}

impl<'a> BondPricer<'a> {
    /// Creates a pricer over `curve`.
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self { curve }
    }

    /// Prices a schedule at `spread_bps`.
    pub fn price_schedule(
        &self,
        schedule: &CashFlowSchedule,
        spread_bps: f64,
    ) -> AnalyticsResult<PriceResult> {
        let spread = spread_bps / BPS_PER_UNIT;

        let mut dirty_price = 0.0;
        for cf in schedule {
            let df = self.curve.discount_factor(cf.date)?;
            dirty_price += cf.amount * df * (-spread * cf.years).exp();
        }

        let accrued_interest = schedule.accrued_interest();
        Ok(PriceResult {
            accrued_interest,
            dirty_price,
            clean_price: dirty_price - accrued_interest,
        })
    }
}

/// Prices `bond` at `evaluation` against `curve` with a spread in basis points.
///
/// # Errors
///
/// `AnalyticsError::Schedule` when the bond has no valid schedule,
/// `AnalyticsError::Interpolation` when the curve cannot be read.
pub fn price(
    evaluation: Date,
    bond: &Bond,
    curve: &Curve,
    spread_bps: f64,
) -> AnalyticsResult<PriceResult> {
    let schedule = ScheduleGenerator::generate(bond, evaluation)?;
    BondPricer::new(curve).price_schedule(&schedule, spread_bps)
}
