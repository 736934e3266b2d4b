//! Yield-to-maturity.
//!
//! The YTM is the flat rate `y` that discounts the remaining cash flows to
//! the dirty price:
//!
//! ```text
//! Periodic:  P = Σ CF_i / (1 + y/f)^(f × t_i)
//! Annual:    P = Σ CF_i / (1 + y)^t_i
//! ```
//!
//! Solved with Brent's method over the configured bracket.

use serde::{Deserialize, Serialize};

use tenor_bonds::{Bond, CashFlow, ScheduleGenerator};
use tenor_core::Date;
use tenor_math::solvers::brent;

use crate::config::YieldSettings;
use crate::error::{AnalyticsError, AnalyticsResult};

const SOLVER: &str = "yield";

/// Outcome of a yield solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldSolution {
    /// Yield in percent.
    pub yield_pct: f64,
    /// Solver iterations.
    pub iterations: u32,
    /// Price residual at the returned yield.
    pub residual: f64,
    /// Whether the tolerance was met.
    pub converged: bool,
}

impl YieldSolution {
    /// Yield as a decimal.
    #[must_use]
    pub fn as_decimal(&self) -> f64 {
        self.yield_pct / 100.0
    }
}

/// Discount factor of a flow `years` out at yield `ytm` compounded
/// `periods` times a year.
///
/// NaN when the per-period growth factor is not positive.
#[must_use]
pub fn discount_factor(ytm: f64, years: f64, periods: u32) -> f64 {
    let f = f64::from(periods.max(1));
    let base = 1.0 + ytm / f;
    if base <= 0.0 {
        return f64::NAN;
    }
    base.powf(-f * years)
}

/// Price of `flows` at yield `ytm` (decimal).
#[must_use]
pub fn price_from_yield(flows: &[CashFlow], ytm: f64, periods: u32) -> f64 {
    flows
        .iter()
        .map(|cf| cf.amount * discount_factor(ytm, cf.years, periods))
        .sum()
}

/// Solves the yield of `flows` at `dirty_price`.
///
/// `coupon_frequency` sets the compounding periods under
/// [`YieldCompounding::Periodic`](crate::config::YieldCompounding::Periodic).
///
/// # Errors
///
/// `AnalyticsError::Solver` when the bracket does not contain a sign change
/// or the price function leaves its domain.
pub fn solve_yield(
    flows: &[CashFlow],
    coupon_frequency: u32,
    dirty_price: f64,
    settings: &YieldSettings,
) -> AnalyticsResult<YieldSolution> {
    if flows.is_empty() {
        return Err(AnalyticsError::invalid_input("no cash flows to yield"));
    }
    if !dirty_price.is_finite() || dirty_price <= 0.0 {
        return Err(AnalyticsError::solver(
            SOLVER,
            format!("dirty price {dirty_price} is not positive"),
        ));
    }

    let periods = settings.compounding.periods_per_year(coupon_frequency);
    let (lower, upper) = settings.bracket.bounds();
    let objective = |y: f64| price_from_yield(flows, y, periods) - dirty_price;

    let result = brent(objective, lower, upper, &settings.solver_config())
        .map_err(|e| AnalyticsError::from_math(SOLVER, e))?;

    log::debug!(
        "ytm {:.8} after {} iterations (converged: {})",
        result.root,
        result.iterations,
        result.converged
    );

    Ok(YieldSolution {
        yield_pct: result.root * 100.0,
        iterations: result.iterations,
        residual: result.residual,
        converged: result.converged,
    })
}

/// Solves the yield-to-maturity of `bond` at `evaluation` from its dirty price.
///
/// # Errors
///
/// `AnalyticsError::Schedule` for a bond without a valid schedule, otherwise
/// as [`solve_yield`].
pub fn solve_ytm(
    evaluation: Date,
    bond: &Bond,
    dirty_price: f64,
    settings: &YieldSettings,
) -> AnalyticsResult<YieldSolution> {
    let schedule = ScheduleGenerator::generate(bond, evaluation)?;
    solve_yield(
        schedule.flows(),
        bond.coupon_frequency(),
        dirty_price,
        settings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_core::Frequency;

    use crate::config::{YieldBracket, YieldCompounding};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flows(frequency: Frequency, coupon: f64) -> Vec<CashFlow> {
        ScheduleGenerator::generate_with(
            date(2022, 6, 15),
            date(2020, 1, 1),
            frequency,
            Some(date(2030, 1, 1)),
            coupon,
            100.0,
        )
        .unwrap()
        .flows()
        .to_vec()
    }

    #[test]
    fn test_discount_factor() {
        assert_relative_eq!(discount_factor(0.05, 1.0, 1), 1.0 / 1.05, epsilon = 1e-15);
        assert_relative_eq!(discount_factor(0.05, 1.0, 2), 1.0 / 1.025_f64.powi(2), epsilon = 1e-15);
        assert_eq!(discount_factor(0.0, 7.3, 4), 1.0);
        assert!(discount_factor(-3.0, 1.0, 2).is_nan());
    }

    #[test]
    fn test_round_trip_periodic() {
        let flows = flows(Frequency::SemiAnnual, 2.5);
        let price = price_from_yield(&flows, 0.0437, 2);

        let solution = solve_yield(&flows, 2, price, &YieldSettings::default()).unwrap();
        assert!(solution.converged);
        assert_relative_eq!(solution.yield_pct, 4.37, epsilon = 1e-6);
        assert_relative_eq!(solution.as_decimal(), 0.0437, epsilon = 1e-8);
    }

    #[test]
    fn test_round_trip_annual_compounding() {
        let flows = flows(Frequency::Quarterly, 1.25);
        let price = price_from_yield(&flows, 0.061, 1);
        let settings = YieldSettings {
            compounding: YieldCompounding::Annual,
            ..YieldSettings::default()
        };

        let solution = solve_yield(&flows, 4, price, &settings).unwrap();
        assert_relative_eq!(solution.yield_pct, 6.1, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_yield() {
        let flows = flows(Frequency::Annual, 0.0);
        let price = price_from_yield(&flows, -0.005, 1);

        let solution = solve_yield(&flows, 1, price, &YieldSettings::default()).unwrap();
        assert_relative_eq!(solution.yield_pct, -0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_narrow_bracket_rejects_distressed_price() {
        let flows = flows(Frequency::Annual, 5.0);
        let price = price_from_yield(&flows, 0.35, 1);
        let settings = YieldSettings {
            bracket: YieldBracket::Narrow,
            ..YieldSettings::default()
        };

        let result = solve_yield(&flows, 1, price, &settings);
        assert!(matches!(result, Err(AnalyticsError::Solver { .. })));

        let wide = solve_yield(&flows, 1, price, &YieldSettings::default()).unwrap();
        assert_relative_eq!(wide.yield_pct, 35.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bad_price() {
        let flows = flows(Frequency::Annual, 5.0);
        assert!(solve_yield(&flows, 1, 0.0, &YieldSettings::default()).is_err());
        assert!(solve_yield(&flows, 1, f64::INFINITY, &YieldSettings::default()).is_err());
        assert!(solve_yield(&[], 1, 100.0, &YieldSettings::default()).is_err());
    }
}
