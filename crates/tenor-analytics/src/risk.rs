//! Duration and convexity from a yield.
//!
//! ```text
//! PV_i     = CF_i / (1 + y/f)^(f × t_i)
//! D_mac    = Σ t_i × PV_i / Σ PV_i
//! D_mod    = D_mac / (1 + y/f)
//! C        = Σ PV_i × t_i × (t_i + 1/f) / (P × (1 + y/f)²)
//! ```
//!
//! Under annual compounding `f = 1`. A schedule whose present value is zero
//! has no defined duration or convexity; those functions return `None`.

use serde::{Deserialize, Serialize};

use tenor_bonds::CashFlow;

use crate::yields::discount_factor;

/// Macaulay and modified duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Durations {
    /// Present-value-weighted average time to payment, in years.
    pub macaulay: f64,
    /// Macaulay duration over `1 + y/f`.
    pub modified: f64,
}

/// Duration of `flows` at yield `ytm` (decimal), compounded `frequency`
/// times a year.
#[must_use]
pub fn duration(flows: &[CashFlow], ytm: f64, frequency: u32) -> Option<Durations> {
    let f = f64::from(frequency.max(1));

    let mut weighted = 0.0;
    let mut total = 0.0;
    for cf in flows {
        let pv = cf.amount * discount_factor(ytm, cf.years, frequency);
        weighted += cf.years * pv;
        total += pv;
    }

    if total == 0.0 || !total.is_finite() {
        return None;
    }

    let macaulay = weighted / total;
    Some(Durations {
        macaulay,
        modified: macaulay / (1.0 + ytm / f),
    })
}

/// Convexity of `flows` at yield `ytm` against `dirty_price`.
#[must_use]
pub fn convexity(flows: &[CashFlow], ytm: f64, frequency: u32, dirty_price: f64) -> Option<f64> {
    let f = f64::from(frequency.max(1));

    let mut total = 0.0;
    let mut weighted = 0.0;
    for cf in flows {
        let pv = cf.amount * discount_factor(ytm, cf.years, frequency);
        total += pv;
        weighted += pv * cf.years * (cf.years + 1.0 / f);
    }

    if total == 0.0 || dirty_price == 0.0 {
        return None;
    }

    let value = weighted / (dirty_price * (1.0 + ytm / f).powi(2));
    value.is_finite().then_some(value)
}
