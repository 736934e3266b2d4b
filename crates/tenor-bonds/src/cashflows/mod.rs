//! Cash flow generation for bonds.
//!
//! [`ScheduleGenerator`] walks the coupon grid of a bond from its first
//! coupon date and returns a [`CashFlowSchedule`]: every payment strictly
//! after the evaluation date up to the redemption date, plus the accrued
//! fraction of the coupon period the evaluation date falls in.

mod generator;
mod schedule;

pub use generator::ScheduleGenerator;
pub use schedule::{CashFlow, CashFlowSchedule, CashFlowType};
