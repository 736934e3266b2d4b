//! Bond static data.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tenor_core::{Date, Frequency};

use crate::error::{BondError, BondResult};

/// A fixed coupon bond as read from a reference table.
///
/// Date fields and the frequency are kept as given, so a row with a missing
/// or unusable value still loads; the problem surfaces as a schedule error
/// for that bond alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    identifier: String,
    nominal: Decimal,
    /// Percent of nominal per year (5 = 5%).
    coupon_rate: Decimal,
    coupon_frequency: u32,
    first_coupon_date: Option<Date>,
    maturity: Option<Date>,
    next_call_date: Option<Date>,
    callable: bool,
    spread_bps: Option<f64>,
    /// Clean bid, percent of nominal.
    bid_price: Option<Decimal>,
    /// Clean ask, percent of nominal.
    ask_price: Option<Decimal>,
}

impl Bond {
    /// ISIN or other identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Nominal (face) amount.
    pub fn nominal(&self) -> Decimal {
        self.nominal
    }

    /// Coupon rate in percent of nominal.
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// Payments per year as quoted.
    pub fn coupon_frequency(&self) -> u32 {
        self.coupon_frequency
    }

    /// Coupon frequency.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Schedule` when the quoted payments per year do not
    /// split the year into whole months.
    pub fn frequency(&self) -> BondResult<Frequency> {
        Ok(Frequency::from_payments_per_year(self.coupon_frequency)?)
    }

    /// First coupon date.
    pub fn first_coupon_date(&self) -> Option<Date> {
        self.first_coupon_date
    }

    /// Stated maturity, `None` for perpetuals.
    pub fn maturity(&self) -> Option<Date> {
        self.maturity
    }

    /// Next call date, if any.
    pub fn next_call_date(&self) -> Option<Date> {
        self.next_call_date
    }

    /// Callable flag from the table. Informational; see [`Bond::redemption_date`].
    pub fn is_callable(&self) -> bool {
        self.callable
    }

    /// Per-bond pricing spread override in basis points.
    pub fn spread_bps(&self) -> Option<f64> {
        self.spread_bps
    }

    /// Clean bid price, percent of nominal.
    pub fn bid_price(&self) -> Option<Decimal> {
        self.bid_price
    }

    /// Clean ask price, percent of nominal.
    pub fn ask_price(&self) -> Option<Decimal> {
        self.ask_price
    }

    /// Date the principal is assumed to be repaid.
    ///
    /// The next call date when present, otherwise maturity.
    pub fn redemption_date(&self) -> Option<Date> {
        self.next_call_date.or(self.maturity)
    }

    /// Annual coupon amount: `coupon_rate / 100 * nominal`.
    pub fn annual_coupon(&self) -> Decimal {
        self.coupon_rate / Decimal::ONE_HUNDRED * self.nominal
    }

    /// Coupon paid each period: the annual amount over the frequency.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Schedule` for an unusable frequency.
    pub fn coupon_per_period(&self) -> BondResult<Decimal> {
        let periods = self.frequency()?.periods_per_year();
        Ok(self.annual_coupon() / Decimal::from(periods))
    }

    /// Observed clean price in percent of nominal.
    ///
    /// Mid of bid and ask, or whichever side is quoted.
    pub fn market_clean_price(&self) -> Option<Decimal> {
        match (self.bid_price, self.ask_price) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::TWO),
            (Some(side), None) | (None, Some(side)) => Some(side),
            (None, None) => None,
        }
    }

    /// Nominal as `f64` for the numerical kernels.
    pub fn nominal_f64(&self) -> BondResult<f64> {
        decimal_to_f64(self.nominal, "nominal")
    }
}

pub(crate) fn decimal_to_f64(value: Decimal, field: &str) -> BondResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| BondError::invalid_spec(format!("{field} {value} is not representable")))
}

/// Builder for bonds.
#[derive(Debug, Clone, Default)]
pub struct BondBuilder {
    identifier: Option<String>,
    nominal: Option<Decimal>,
    coupon_rate: Option<Decimal>,
    coupon_frequency: Option<u32>,
    first_coupon_date: Option<Date>,
    maturity: Option<Date>,
    next_call_date: Option<Date>,
    callable: bool,
    spread_bps: Option<f64>,
    bid_price: Option<Decimal>,
    ask_price: Option<Decimal>,
}

impl BondBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier.
    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Sets the nominal (default 100).
    #[must_use]
    pub fn nominal(mut self, nominal: Decimal) -> Self {
        self.nominal = Some(nominal);
        self
    }

    /// Sets the coupon rate in percent (5 = 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: Decimal) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets payments per year.
    #[must_use]
    pub fn coupon_frequency(mut self, payments: u32) -> Self {
        self.coupon_frequency = Some(payments);
        self
    }

    /// Sets payments per year from a [`Frequency`].
    #[must_use]
    pub fn frequency(self, frequency: Frequency) -> Self {
        self.coupon_frequency(frequency.periods_per_year())
    }

    /// Sets the first coupon date.
    #[must_use]
    pub fn first_coupon_date(mut self, date: Date) -> Self {
        self.first_coupon_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the next call date.
    #[must_use]
    pub fn next_call_date(mut self, date: Date) -> Self {
        self.next_call_date = Some(date);
        self
    }

    /// Sets optional date fields directly, as read from a table.
    #[must_use]
    pub fn dates(
        mut self,
        first_coupon_date: Option<Date>,
        maturity: Option<Date>,
        next_call_date: Option<Date>,
    ) -> Self {
        self.first_coupon_date = first_coupon_date;
        self.maturity = maturity;
        self.next_call_date = next_call_date;
        self
    }

    /// Sets the callable flag.
    #[must_use]
    pub fn callable(mut self, callable: bool) -> Self {
        self.callable = callable;
        self
    }

    /// Sets the per-bond spread override in basis points.
    #[must_use]
    pub fn spread_bps(mut self, spread_bps: Option<f64>) -> Self {
        self.spread_bps = spread_bps;
        self
    }

    /// Sets observed clean bid and ask prices (percent of nominal).
    #[must_use]
    pub fn quotes(mut self, bid: Option<Decimal>, ask: Option<Decimal>) -> Self {
        self.bid_price = bid;
        self.ask_price = ask;
        self
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// Returns an error if identifier, coupon rate or frequency are missing,
    /// if the coupon rate is negative, if the nominal is not positive, or if a
    /// quoted price is not positive.
    pub fn build(self) -> BondResult<Bond> {
        let identifier = self
            .identifier
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| BondError::missing_field("identifier"))?;
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;
        let coupon_frequency = self
            .coupon_frequency
            .ok_or_else(|| BondError::missing_field("coupon_frequency"))?;
        let nominal = self.nominal.unwrap_or(Decimal::ONE_HUNDRED);

        if coupon_rate < Decimal::ZERO {
            return Err(BondError::invalid_spec("Coupon rate cannot be negative"));
        }
        if nominal <= Decimal::ZERO {
            return Err(BondError::invalid_spec("Nominal must be positive"));
        }
        for price in [self.bid_price, self.ask_price].into_iter().flatten() {
            if price <= Decimal::ZERO {
                return Err(BondError::invalid_spec(format!(
                    "Quoted price {price} must be positive"
                )));
            }
        }
        if let Some(spread) = self.spread_bps {
            if !spread.is_finite() {
                return Err(BondError::invalid_spec("Spread must be finite"));
            }
        }

        Ok(Bond {
            identifier,
            nominal,
            coupon_rate,
            coupon_frequency,
            first_coupon_date: self.first_coupon_date,
            maturity: self.maturity,
            next_call_date: self.next_call_date,
            callable: self.callable,
            spread_bps: self.spread_bps,
            bid_price: self.bid_price,
            ask_price: self.ask_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn builder() -> BondBuilder {
        BondBuilder::new()
            .identifier("XS1234567890")
            .nominal(dec!(1000))
            .coupon_rate(dec!(4.5))
            .coupon_frequency(2)
            .first_coupon_date(date(2020, 3, 15))
            .maturity(date(2030, 3, 15))
    }

    #[test]
    fn test_bond_builder() {
        let bond = builder().build().unwrap();

        assert_eq!(bond.identifier(), "XS1234567890");
        assert_eq!(bond.annual_coupon(), dec!(45));
        assert_eq!(bond.coupon_per_period().unwrap(), dec!(22.5));
        assert_eq!(bond.frequency().unwrap(), Frequency::SemiAnnual);
        assert!(!bond.is_callable());
    }

    #[test]
    fn test_default_nominal() {
        let bond = builder().nominal(dec!(100)).build().unwrap();
        let defaulted = BondBuilder::new()
            .identifier("A")
            .coupon_rate(dec!(1))
            .coupon_frequency(1)
            .build()
            .unwrap();
        assert_eq!(defaulted.nominal(), bond.nominal());
    }

    #[test]
    fn test_redemption_prefers_call() {
        let bond = builder().build().unwrap();
        assert_eq!(bond.redemption_date(), Some(date(2030, 3, 15)));

        let called = builder().next_call_date(date(2026, 3, 15)).callable(true).build().unwrap();
        assert_eq!(called.redemption_date(), Some(date(2026, 3, 15)));

        let perpetual = builder().dates(Some(date(2020, 3, 15)), None, None).build().unwrap();
        assert_eq!(perpetual.redemption_date(), None);
    }

    #[test]
    fn test_market_clean_price() {
        let bond = builder().build().unwrap();
        assert_eq!(bond.market_clean_price(), None);

        let both = builder().quotes(Some(dec!(99)), Some(dec!(100))).build().unwrap();
        assert_eq!(both.market_clean_price(), Some(dec!(99.5)));

        let bid_only = builder().quotes(Some(dec!(98.25)), None).build().unwrap();
        assert_eq!(bid_only.market_clean_price(), Some(dec!(98.25)));
    }

    #[test]
    fn test_invalid_frequency_is_schedule_error() {
        let bond = builder().coupon_frequency(5).build().unwrap();
        assert!(matches!(bond.frequency(), Err(BondError::Schedule { .. })));
        assert!(bond.coupon_per_period().is_err());
    }

    #[test]
    fn test_missing_fields() {
        assert!(BondBuilder::new().build().is_err());
        assert!(matches!(
            BondBuilder::new().identifier("  ").build(),
            Err(BondError::MissingField { .. })
        ));
        assert!(BondBuilder::new()
            .identifier("A")
            .coupon_rate(dec!(5))
            .build()
            .is_err());
    }

    #[test]
    fn test_validation() {
        assert!(builder().coupon_rate(dec!(-1)).build().is_err());
        assert!(builder().nominal(dec!(0)).build().is_err());
        assert!(builder().quotes(Some(dec!(0)), None).build().is_err());
        assert!(builder().spread_bps(Some(f64::NAN)).build().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let bond = builder().spread_bps(Some(25.0)).build().unwrap();
        let json = serde_json::to_string(&bond).unwrap();
        let parsed: Bond = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bond);
    }
}
