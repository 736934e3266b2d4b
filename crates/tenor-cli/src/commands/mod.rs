//! CLI command implementations.

pub mod config;
pub mod curve;
pub mod price;
pub mod schedule;
pub mod value;

pub use config::ConfigArgs;
pub use curve::CurveArgs;
pub use price::PriceArgs;
pub use schedule::ScheduleArgs;
pub use value::ValueArgs;

use clap::Args;
use rust_decimal::Decimal;

use tenor_bonds::{Bond, BondBuilder};
use tenor_core::Date;

use crate::error::{CliError, CliResult};

/// Parses a day-first (DD/MM/YYYY) or ISO (YYYY-MM-DD) date.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse_flexible(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Evaluation date from `--date`, else today's local date.
pub fn evaluation_date(arg: Option<&str>) -> CliResult<Date> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(Date::from(chrono::Local::now().date_naive())),
    }
}

/// A bond described on the command line.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Identifier shown in the output
    #[arg(long, default_value = "BOND")]
    pub id: String,

    /// Annual coupon rate in percent (5 = 5%)
    #[arg(short, long)]
    pub coupon: Decimal,

    /// Coupon payments per year: 1, 2, 4 or 12
    #[arg(long, default_value = "1")]
    pub frequency: u32,

    /// First coupon date, anchors the coupon grid
    #[arg(long)]
    pub first_coupon: String,

    /// Maturity date
    #[arg(short, long)]
    pub maturity: Option<String>,

    /// Next call date (replaces maturity as redemption date)
    #[arg(long)]
    pub call_date: Option<String>,

    /// Nominal
    #[arg(long, default_value = "100")]
    pub nominal: Decimal,
}

impl BondArgs {
    /// Builds the bond.
    pub fn to_bond(&self) -> CliResult<Bond> {
        self.builder()?
            .build()
            .map_err(|e| CliError::invalid_argument("bond", e.to_string()))
    }

    /// Builder with the command-line fields set, for callers adding more.
    pub fn builder(&self) -> CliResult<BondBuilder> {
        if self.maturity.is_none() && self.call_date.is_none() {
            return Err(CliError::invalid_argument(
                "bond",
                "either --maturity or --call-date is required",
            ));
        }
        let optional = |s: &Option<String>| s.as_deref().map(parse_date).transpose();

        Ok(BondBuilder::new()
            .identifier(self.id.clone())
            .coupon_rate(self.coupon)
            .coupon_frequency(self.frequency)
            .nominal(self.nominal)
            .dates(
                Some(parse_date(&self.first_coupon)?),
                optional(&self.maturity)?,
                optional(&self.call_date)?,
            )
            .callable(self.call_date.is_some()))
    }
}
