//! Per-bond valuation pipeline and batch runs.
//!
//! A bond goes through schedule generation, curve pricing, the Z-spread and
//! yield solvers, then duration and convexity. Each bond is independent: a
//! failure is recorded against the bond's identifier and the batch carries
//! on. A schedule or pricing failure drops the bond from the valuations; a
//! solver failure only leaves that metric, and the metrics built on it,
//! empty.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use tenor_bonds::{Bond, CashFlowSchedule, ScheduleGenerator};
use tenor_core::Date;
use tenor_curves::Curve;

use crate::config::ValuationConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::parallel::maybe_parallel_map;
use crate::pricing::BondPricer;
use crate::risk;
use crate::spreads::{ZSpreadKernel, ZSpreadSolution};
use crate::yields::{solve_yield, YieldSolution};

/// Pipeline step at which a bond failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationStage {
    /// Cash-flow schedule generation.
    Schedule,
    /// Curve pricing.
    Pricing,
    /// Z-spread solve.
    ZSpread,
    /// Yield solve.
    Yield,
}

impl fmt::Display for ValuationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValuationStage::Schedule => "schedule",
            ValuationStage::Pricing => "pricing",
            ValuationStage::ZSpread => "z-spread",
            ValuationStage::Yield => "yield",
        };
        write!(f, "{name}")
    }
}

/// A failure tagged to the bond it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationFailure {
    /// Bond identifier.
    pub identifier: String,
    /// Where the pipeline stopped.
    pub stage: ValuationStage,
    /// Error text.
    pub message: String,
}

impl ValuationFailure {
    fn new(identifier: &str, stage: ValuationStage, err: &AnalyticsError) -> Self {
        Self {
            identifier: identifier.to_string(),
            stage,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ValuationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.identifier, self.stage, self.message)
    }
}

/// Computed analytics for one bond.
///
/// Built fresh from the inputs; the source `Bond` is never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondValuation {
    /// Bond identifier.
    pub identifier: String,
    /// Evaluation date.
    pub evaluation_date: Date,
    /// Spread (bps) the curve price was computed at.
    pub pricing_spread_bps: f64,
    /// Accrued interest.
    pub accrued_interest: f64,
    /// Curve dirty price at the pricing spread.
    pub dirty_price: f64,
    /// Curve clean price at the pricing spread.
    pub clean_price: f64,
    /// Dirty price implied by the bid/ask quotes, if any.
    pub market_dirty_price: Option<f64>,
    /// Z-spread against the target price.
    pub z_spread: Option<ZSpreadSolution>,
    /// Yield to maturity against the target price.
    pub ytm: Option<YieldSolution>,
    /// Macaulay duration (years).
    pub macaulay_duration: Option<f64>,
    /// Modified duration.
    pub modified_duration: Option<f64>,
    /// Convexity.
    pub convexity: Option<f64>,
}

impl BondValuation {
    /// Price the solvers were run against: the market dirty price when
    /// quoted, else the curve dirty price.
    #[must_use]
    pub fn target_price(&self) -> f64 {
        self.market_dirty_price.unwrap_or(self.dirty_price)
    }

    /// Z-spread in basis points.
    #[must_use]
    pub fn z_spread_bps(&self) -> Option<f64> {
        self.z_spread.map(|z| z.spread_bps)
    }

    /// YTM in percent.
    #[must_use]
    pub fn ytm_pct(&self) -> Option<f64> {
        self.ytm.map(|y| y.yield_pct)
    }
}

/// Outcome of valuing one bond.
#[derive(Debug, Clone, PartialEq)]
pub struct BondOutcome {
    /// The valuation, unless the schedule or pricing step failed.
    pub valuation: Option<BondValuation>,
    /// Every failure met along the way.
    pub failures: Vec<ValuationFailure>,
}

/// Result of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    /// Valuations in input order.
    pub valuations: Vec<BondValuation>,
    /// Failures in input order.
    pub failures: Vec<ValuationFailure>,
}

impl ValuationReport {
    /// Number of bonds valued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.valuations.len()
    }

    /// Returns true if no bond was valued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valuations.is_empty()
    }

    /// Returns true if any bond recorded a failure.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Valuation of the bond with `identifier`.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<&BondValuation> {
        self.valuations.iter().find(|v| v.identifier == identifier)
    }

    /// Failures recorded for the bond with `identifier`.
    pub fn failures_for<'a>(
        &'a self,
        identifier: &'a str,
    ) -> impl Iterator<Item = &'a ValuationFailure> + 'a {
        self.failures.iter().filter(move |f| f.identifier == identifier)
    }
}

/// Values bonds against one curve at one evaluation date.
#[derive(Debug, Clone, Copy)]
pub struct Valuator<'a> {
    curve: &'a Curve,
    config: &'a ValuationConfig,
    evaluation: Date,
}

impl<'a> Valuator<'a> {
    /// Creates a valuator.
    #[must_use]
    pub fn new(curve: &'a Curve, config: &'a ValuationConfig, evaluation: Date) -> Self {
        Self {
            curve,
            config,
            evaluation,
        }
    }

    /// Evaluation date.
    #[must_use]
    pub fn evaluation_date(&self) -> Date {
        self.evaluation
    }

    /// Runs the full pipeline for one bond.
    pub fn value_bond(&self, bond: &Bond) -> BondOutcome {
        let id = bond.identifier();
        let mut failures = Vec::new();

        let schedule = match ScheduleGenerator::generate(bond, self.evaluation) {
            Ok(schedule) => schedule,
            Err(e) => {
                let err = AnalyticsError::from(e);
                failures.push(ValuationFailure::new(id, ValuationStage::Schedule, &err));
                return BondOutcome {
                    valuation: None,
                    failures,
                };
            }
        };

        let spread_bps = bond.spread_bps().unwrap_or(self.config.default_spread_bps);
        let priced = match BondPricer::new(self.curve).price_schedule(&schedule, spread_bps) {
            Ok(priced) => priced,
            Err(err) => {
                failures.push(ValuationFailure::new(id, ValuationStage::Pricing, &err));
                return BondOutcome {
                    valuation: None,
                    failures,
                };
            }
        };

        let market_dirty_price = match market_dirty_price(bond, &schedule) {
            Ok(price) => price,
            Err(err) => {
                failures.push(ValuationFailure::new(id, ValuationStage::Pricing, &err));
                None
            }
        };
        let target = market_dirty_price.unwrap_or(priced.dirty_price);

        let z_spread = match ZSpreadKernel::new(&schedule, self.curve)
            .and_then(|kernel| kernel.solve(target, &self.config.z_spread))
        {
            Ok(solution) => Some(solution),
            Err(err) => {
                failures.push(ValuationFailure::new(id, ValuationStage::ZSpread, &err));
                None
            }
        };

        let ytm = match solve_yield(
            schedule.flows(),
            bond.coupon_frequency(),
            target,
            &self.config.yields,
        ) {
            Ok(solution) => Some(solution),
            Err(err) => {
                failures.push(ValuationFailure::new(id, ValuationStage::Yield, &err));
                None
            }
        };

        let periods = self
            .config
            .yields
            .compounding
            .periods_per_year(bond.coupon_frequency());
        let durations =
            ytm.and_then(|y| risk::duration(schedule.flows(), y.as_decimal(), periods));
        let convexity =
            ytm.and_then(|y| risk::convexity(schedule.flows(), y.as_decimal(), periods, target));

        BondOutcome {
            valuation: Some(BondValuation {
                identifier: id.to_string(),
                evaluation_date: self.evaluation,
                pricing_spread_bps: spread_bps,
                accrued_interest: priced.accrued_interest,
                dirty_price: priced.dirty_price,
                clean_price: priced.clean_price,
                market_dirty_price,
                z_spread,
                ytm,
                macaulay_duration: durations.map(|d| d.macaulay),
                modified_duration: durations.map(|d| d.modified),
                convexity,
            }),
            failures,
        }
    }

    /// Values every bond, fanning out when the config allows it.
    ///
    /// Valuations and failures keep the order of `bonds`.
    pub fn value_portfolio(&self, bonds: &[Bond]) -> ValuationReport {
        let outcomes = maybe_parallel_map(bonds, self.config, |bond| self.value_bond(bond));

        let mut report = ValuationReport::default();
        for outcome in outcomes {
            for failure in &outcome.failures {
                tracing::warn!(
                    identifier = %failure.identifier,
                    stage = %failure.stage,
                    error = %failure.message,
                    "bond valuation step failed"
                );
            }
            report.failures.extend(outcome.failures);
            report.valuations.extend(outcome.valuation);
        }

        tracing::info!(
            evaluation_date = %self.evaluation,
            bonds = bonds.len(),
            valued = report.valuations.len(),
            failures = report.failures.len(),
            "valuation run complete"
        );
        report
    }
}

/// Values `bonds` against `curve` at `evaluation`.
pub fn value_portfolio(
    evaluation: Date,
    bonds: &[Bond],
    curve: &Curve,
    config: &ValuationConfig,
) -> ValuationReport {
    Valuator::new(curve, config, evaluation).value_portfolio(bonds)
}

/// Observed dirty price: quoted clean mid (percent of nominal) plus accrued.
fn market_dirty_price(bond: &Bond, schedule: &CashFlowSchedule) -> AnalyticsResult<Option<f64>> {
    let Some(clean_pct) = bond.market_clean_price() else {
        return Ok(None);
    };
    let clean_pct = clean_pct.to_f64().ok_or_else(|| {
        AnalyticsError::invalid_input(format!("quoted price {clean_pct} is not representable"))
    })?;
    let nominal = bond.nominal_f64()?;
    Ok(Some(clean_pct / 100.0 * nominal + schedule.accrued_interest()))
}
