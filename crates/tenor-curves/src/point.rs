//! Curve rows and column selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tenor_core::Date;

use crate::error::CurveError;

/// One input row of a curve table, as quoted.
///
/// Zero and market rates are in percent here; [`Curve::load`](crate::Curve::load)
/// converts them to fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveRow {
    /// Tenor date.
    pub date: Date,
    /// Discount factor.
    pub discount: f64,
    /// Zero rate in percent.
    pub zero_rate_pct: f64,
    /// Market rate in percent.
    pub market_rate_pct: f64,
}

impl CurveRow {
    /// Creates a row from quoted values.
    #[must_use]
    pub fn new(date: Date, discount: f64, zero_rate_pct: f64, market_rate_pct: f64) -> Self {
        Self {
            date,
            discount,
            zero_rate_pct,
            market_rate_pct,
        }
    }
}

/// A stored curve knot. Rates are decimal fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Tenor date.
    pub date: Date,
    /// Discount factor.
    pub discount: f64,
    /// Zero rate as a fraction (0.03 for 3%).
    pub zero_rate: f64,
    /// Market rate as a fraction.
    pub market_rate: f64,
}

impl CurvePoint {
    /// Value of one column.
    #[must_use]
    pub fn value(&self, column: CurveColumn) -> f64 {
        match column {
            CurveColumn::Discount => self.discount,
            CurveColumn::ZeroRate => self.zero_rate,
            CurveColumn::MarketRate => self.market_rate,
        }
    }
}

impl From<CurveRow> for CurvePoint {
    fn from(row: CurveRow) -> Self {
        Self {
            date: row.date,
            discount: row.discount,
            zero_rate: row.zero_rate_pct / 100.0,
            market_rate: row.market_rate_pct / 100.0,
        }
    }
}

/// Column selector for curve lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveColumn {
    /// Discount factor.
    Discount,
    /// Zero rate.
    ZeroRate,
    /// Market rate.
    MarketRate,
}

impl CurveColumn {
    /// All columns in table order.
    pub const ALL: [CurveColumn; 3] = [
        CurveColumn::Discount,
        CurveColumn::ZeroRate,
        CurveColumn::MarketRate,
    ];
}

impl fmt::Display for CurveColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveColumn::Discount => "discount",
            CurveColumn::ZeroRate => "zero",
            CurveColumn::MarketRate => "market",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CurveColumn {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "discount" | "df" | "discount_factor" => Ok(CurveColumn::Discount),
            "zero" | "zero_rate" => Ok(CurveColumn::ZeroRate),
            "market" | "market_rate" => Ok(CurveColumn::MarketRate),
            other => Err(CurveError::invalid_value(format!(
                "unknown curve column '{other}' (expected discount, zero or market)"
            ))),
        }
    }
}
