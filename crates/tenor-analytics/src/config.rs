//! Configuration for a valuation run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tenor_math::solvers::SolverConfig;

use crate::error::AnalyticsError;

/// Settings for a valuation run.
///
/// Every field has a default, so a partial TOML table deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Credit spread (bps) used by the pricing engine when the bond has none.
    pub default_spread_bps: f64,

    /// Fan bonds out across threads (requires the `parallel` feature).
    pub parallel: bool,

    /// Minimum bond count before the batch goes parallel.
    pub parallel_threshold: usize,

    /// Z-spread solver settings.
    pub z_spread: ZSpreadSettings,

    /// Yield solver settings.
    pub yields: YieldSettings,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            default_spread_bps: 0.0,
            parallel: true,
            parallel_threshold: 64,
            z_spread: ZSpreadSettings::default(),
            yields: YieldSettings::default(),
        }
    }
}

impl ValuationConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always values bonds one after another.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the default pricing spread in basis points.
    #[must_use]
    pub fn with_default_spread_bps(mut self, spread_bps: f64) -> Self {
        self.default_spread_bps = spread_bps;
        self
    }

    /// Sets the yield bracket.
    #[must_use]
    pub fn with_yield_bracket(mut self, bracket: YieldBracket) -> Self {
        self.yields.bracket = bracket;
        self
    }

    /// Sets the yield compounding convention.
    #[must_use]
    pub fn with_compounding(mut self, compounding: YieldCompounding) -> Self {
        self.yields.compounding = compounding;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Returns true if the batch should run in parallel for `count` bonds.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks that brackets are ordered and tolerances positive.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidInput` naming the offending setting.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if !self.default_spread_bps.is_finite() {
            return Err(AnalyticsError::invalid_input("default_spread_bps must be finite"));
        }
        let z = &self.z_spread;
        if !(z.lower < z.upper) {
            return Err(AnalyticsError::invalid_input(format!(
                "z_spread bracket [{}, {}] is not increasing",
                z.lower, z.upper
            )));
        }
        if !(z.tolerance > 0.0) || !(self.yields.tolerance > 0.0) {
            return Err(AnalyticsError::invalid_input("solver tolerances must be positive"));
        }
        if z.max_iterations == 0 || self.yields.max_iterations == 0 {
            return Err(AnalyticsError::invalid_input("solver iteration caps must be positive"));
        }
        Ok(())
    }
}

/// Z-spread bisection settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZSpreadSettings {
    /// Lower end of the spread bracket (continuously compounded, decimal).
    pub lower: f64,
    /// Upper end of the spread bracket.
    pub upper: f64,
    /// Price tolerance.
    pub tolerance: f64,
    /// Iteration cap.
    pub max_iterations: u32,
}

impl Default for ZSpreadSettings {
    fn default() -> Self {
        Self {
            lower: -0.05,
            upper: 0.20,
            tolerance: 1e-4,
            max_iterations: 1000,
        }
    }
}

impl ZSpreadSettings {
    /// Solver configuration for these settings.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }
}

/// Yield solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldSettings {
    /// Search bracket.
    pub bracket: YieldBracket,
    /// Compounding convention, shared with duration and convexity.
    pub compounding: YieldCompounding,
    /// Convergence tolerance.
    pub tolerance: f64,
    /// Iteration cap.
    pub max_iterations: u32,
}

impl Default for YieldSettings {
    fn default() -> Self {
        Self {
            bracket: YieldBracket::Wide,
            compounding: YieldCompounding::Periodic,
            tolerance: 1e-10,
            max_iterations: 200,
        }
    }
}

impl YieldSettings {
    /// Solver configuration for these settings.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }
}

/// Yield search bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YieldBracket {
    /// `[-0.99, 0.99]`
    #[default]
    Wide,
    /// `[-0.05, 0.20]`
    Narrow,
}

impl YieldBracket {
    /// Lower and upper yield bounds (decimal).
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            YieldBracket::Wide => (-0.99, 0.99),
            YieldBracket::Narrow => (-0.05, 0.20),
        }
    }
}

impl fmt::Display for YieldBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YieldBracket::Wide => write!(f, "wide"),
            YieldBracket::Narrow => write!(f, "narrow"),
        }
    }
}

impl FromStr for YieldBracket {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(YieldBracket::Wide),
            "narrow" => Ok(YieldBracket::Narrow),
            other => Err(AnalyticsError::invalid_input(format!(
                "unknown yield bracket '{other}' (expected wide or narrow)"
            ))),
        }
    }
}

/// How a yield discounts a cash flow `t` years out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YieldCompounding {
    /// `(1 + y/f)^(f·t)` with the bond's coupon frequency `f`.
    #[default]
    Periodic,
    /// `(1 + y)^t`.
    Annual,
}

impl YieldCompounding {
    /// Compounding periods per year for a bond paying `coupon_frequency`
    /// times a year.
    #[must_use]
    pub fn periods_per_year(&self, coupon_frequency: u32) -> u32 {
        match self {
            YieldCompounding::Periodic => coupon_frequency,
            YieldCompounding::Annual => 1,
        }
    }
}

impl fmt::Display for YieldCompounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YieldCompounding::Periodic => write!(f, "periodic"),
            YieldCompounding::Annual => write!(f, "annual"),
        }
    }
}

impl FromStr for YieldCompounding {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "periodic" => Ok(YieldCompounding::Periodic),
            "annual" => Ok(YieldCompounding::Annual),
            other => Err(AnalyticsError::invalid_input(format!(
                "unknown compounding '{other}' (expected periodic or annual)"
            ))),
        }
    }
}
