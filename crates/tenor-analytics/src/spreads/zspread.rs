//! Z-spread (zero-volatility spread) calculation.
//!
//! The Z-spread is the constant, continuously compounded spread that, added
//! to every zero rate on the curve, reprices the bond's remaining cash flows
//! to a target dirty price:
//!
//! ```text
//! Price = Σ CF_i × exp(-r(d_i) × t_i) × exp(-z × t_i)
//! ```
//!
//! where `r(d_i)` is the curve's zero rate at the payment date and `t_i` the
//! year fraction from the evaluation date. Price falls monotonically in `z`,
//! so bisection over a fixed bracket finds the unique root when the target
//! lies between the bracket's prices.

use serde::{Deserialize, Serialize};

use tenor_bonds::{Bond, CashFlowSchedule, ScheduleGenerator};
use tenor_core::Date;
use tenor_curves::Curve;
use tenor_math::solvers::bisection;

use crate::config::ZSpreadSettings;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::BPS_PER_UNIT;

const SOLVER: &str = "z-spread";

/// Outcome of a Z-spread solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZSpreadSolution {
    /// Spread in basis points.
    pub spread_bps: f64,
    /// Bisection steps taken.
    pub iterations: u32,
    /// `PV(z) - target` at the returned spread.
    pub residual: f64,
    /// False when the iteration budget ran out first; `spread_bps` is then
    /// the last midpoint.
    pub converged: bool,
}

/// Cash flows pre-discounted on the zero curve.
///
/// Holds `CF_i × exp(-r_i × t_i)` per flow so each evaluation of
/// [`ZSpreadKernel::present_value`] costs one `exp` per flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ZSpreadKernel {
    times: Vec<f64>,
    discounted: Vec<f64>,
}

impl ZSpreadKernel {
    /// Builds the kernel for `schedule` on `curve`'s zero-rate column.
    pub fn new(schedule: &CashFlowSchedule, curve: &Curve) -> AnalyticsResult<Self> {
        let mut times = Vec::with_capacity(schedule.len());
        let mut discounted = Vec::with_capacity(schedule.len());

        for cf in schedule {
            let zero = curve.zero_rate(cf.date)?;
            times.push(cf.years);
            discounted.push(cf.amount * (-zero * cf.years).exp());
        }

        Ok(Self { times, discounted })
    }

    /// Present value at spread `z` (decimal, continuously compounded).
    #[must_use]
    pub fn present_value(&self, z: f64) -> f64 {
        self.times
            .iter()
            .zip(&self.discounted)
            .map(|(t, base)| base * (-z * t).exp())
            .sum()
    }

    /// Number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true when there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Solves for the spread that reprices to `target`.
    ///
    /// # Errors
    ///
    /// `AnalyticsError::Solver` when the bracket prices do not straddle
    /// `target`, or the target is not finite.
    pub fn solve(&self, target: f64, settings: &ZSpreadSettings) -> AnalyticsResult<ZSpreadSolution> {
        if !target.is_finite() {
            return Err(AnalyticsError::solver(
                SOLVER,
                format!("target price {target} is not finite"),
            ));
        }

        let objective = |z: f64| self.present_value(z) - target;
        let result = bisection(
            objective,
            settings.lower,
            settings.upper,
            &settings.solver_config(),
        )
        .map_err(|e| AnalyticsError::from_math(SOLVER, e))?;

        if !result.converged {
            log::debug!(
                "z-spread best effort after {} iterations: residual {:.3e}",
                result.iterations,
                result.residual
            );
        }

        Ok(ZSpreadSolution {
            spread_bps: result.root * BPS_PER_UNIT,
            iterations: result.iterations,
            residual: result.residual,
            converged: result.converged,
        })
    }
}

/// Z-spread calculator over a curve.
#[derive(Debug, Clone, Copy)]
pub struct ZSpreadCalculator<'a> {
    curve: &'a Curve,
    settings: ZSpreadSettings,
}

impl<'a> ZSpreadCalculator<'a> {
    /// Creates a calculator with default settings.
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self {
            curve,
            settings: ZSpreadSettings::default(),
        }
    }

    /// Replaces the solver settings.
    #[must_use]
    pub fn with_settings(mut self, settings: ZSpreadSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the price tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.settings.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.settings.max_iterations = max_iterations;
        self
    }

    /// Z-spread of `schedule` at `target` dirty price.
    pub fn calculate(
        &self,
        schedule: &CashFlowSchedule,
        target: f64,
    ) -> AnalyticsResult<ZSpreadSolution> {
        ZSpreadKernel::new(schedule, self.curve)?.solve(target, &self.settings)
    }

    /// Dirty price of `schedule` at `spread_bps` over the zero curve.
    pub fn price_with_spread(
        &self,
        schedule: &CashFlowSchedule,
        spread_bps: f64,
    ) -> AnalyticsResult<f64> {
        let kernel = ZSpreadKernel::new(schedule, self.curve)?;
        Ok(kernel.present_value(spread_bps / BPS_PER_UNIT))
    }
}

/// Solves the Z-spread of `bond` at `evaluation` so that its cash flows
/// reprice to `target_price` (dirty).
///
/// # Errors
///
/// `AnalyticsError::Schedule` for a bond without a valid schedule,
/// `AnalyticsError::Interpolation` for an unreadable curve and
/// `AnalyticsError::Solver` when the target is out of reach of the bracket.
pub fn solve_z_spread(
    evaluation: Date,
    bond: &Bond,
    curve: &Curve,
    target_price: f64,
    settings: &ZSpreadSettings,
) -> AnalyticsResult<ZSpreadSolution> {
    let schedule = ScheduleGenerator::generate(bond, evaluation)?;
    ZSpreadCalculator::new(curve)
        .with_settings(*settings)
        .calculate(&schedule, target_price)
}
