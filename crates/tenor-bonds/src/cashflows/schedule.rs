//! Cash flow records.

use serde::{Deserialize, Serialize};

use tenor_core::Date;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment.
    Coupon,
    /// Final coupon together with the redemption principal.
    CouponAndPrincipal,
}

/// A single future payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date.
    pub date: Date,
    /// Years from the evaluation date to `date` (days / 365).
    pub years: f64,
    /// Amount paid.
    pub amount: f64,
    /// What the amount is made of.
    pub cf_type: CashFlowType,
}

impl CashFlow {
    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(date: Date, years: f64, amount: f64) -> Self {
        Self {
            date,
            years,
            amount,
            cf_type: CashFlowType::Coupon,
        }
    }

    /// Creates the final coupon-plus-principal cash flow.
    #[must_use]
    pub fn final_payment(date: Date, years: f64, coupon: f64, principal: f64) -> Self {
        Self {
            date,
            years,
            amount: coupon + principal,
            cf_type: CashFlowType::CouponAndPrincipal,
        }
    }

    /// Returns true for the redemption payment.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        self.cf_type == CashFlowType::CouponAndPrincipal
    }
}

/// Remaining cash flows of a bond at an evaluation date.
///
/// Flow dates are strictly increasing and strictly after the evaluation
/// date. Only the last flow carries principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    pub(crate) evaluation_date: Date,
    pub(crate) previous_coupon: Date,
    pub(crate) next_coupon: Date,
    pub(crate) accrued_fraction: f64,
    pub(crate) period_coupon: f64,
    pub(crate) flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Date the schedule was generated for.
    pub fn evaluation_date(&self) -> Date {
        self.evaluation_date
    }

    /// Last coupon date on or before the evaluation date.
    pub fn previous_coupon(&self) -> Date {
        self.previous_coupon
    }

    /// First coupon date after the evaluation date.
    pub fn next_coupon(&self) -> Date {
        self.next_coupon
    }

    /// Elapsed share of the running coupon period, in `[0, 1)`.
    pub fn accrued_fraction(&self) -> f64 {
        self.accrued_fraction
    }

    /// Coupon amount paid each period.
    pub fn period_coupon(&self) -> f64 {
        self.period_coupon
    }

    /// Accrued interest: `accrued_fraction * period_coupon`.
    pub fn accrued_interest(&self) -> f64 {
        self.accrued_fraction * self.period_coupon
    }

    /// The cash flows in date order.
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Iterates over the cash flows.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.flows.iter()
    }

    /// Number of cash flows.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if there are no cash flows.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// The redemption payment.
    pub fn final_flow(&self) -> Option<&CashFlow> {
        self.flows.last()
    }

    /// Sum of undiscounted amounts.
    pub fn total_amount(&self) -> f64 {
        self.flows.iter().map(|cf| cf.amount).sum()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}
