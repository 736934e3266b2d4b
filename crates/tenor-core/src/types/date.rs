//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{TenorError, TenorResult};

/// Day count used for every year fraction in the workspace.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Day-first formats accepted by [`Date::parse_dmy`].
const DMY_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Dates carry no time
/// zone; where a timestamp is needed the date is taken at midnight UTC.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::Date;
///
/// let date = Date::parse_dmy("15/06/2022").unwrap();
/// let future = date.add_months(6).unwrap();
/// assert_eq!(future.year(), 2022);
/// assert_eq!(future.month(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> TenorResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| TenorError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> TenorResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| TenorError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Creates a date from a day-first string (DD/MM/YYYY).
    ///
    /// Dashes and dots are accepted as separators as well.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidDate` if the string is not a valid date.
    pub fn parse_dmy(s: &str) -> TenorResult<Self> {
        let trimmed = s.trim();
        DMY_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .map(Date)
            .ok_or_else(|| TenorError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Parses either a day-first date or an ISO date.
    ///
    /// Day-first is tried first since that is how the input tables are
    /// written.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidDate` if neither format matches.
    pub fn parse_flexible(s: &str) -> TenorResult<Self> {
        Self::parse_dmy(s).or_else(|_| Self::parse(s))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of calendar months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> TenorResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        // Clamp day to valid range for new month
        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Year fraction from `self` to `other` on a 365-day year.
    #[must_use]
    pub fn year_fraction(&self, other: &Date) -> f64 {
        self.days_between(other) as f64 / DAYS_PER_YEAR
    }

    /// Seconds since the Unix epoch at midnight UTC of this date.
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    /// Natural log of [`Date::unix_timestamp`].
    ///
    /// This is the abscissa curves interpolate on. It is strictly increasing
    /// in the date, so knot order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidDate` for dates on or before 1970-01-01,
    /// where the logarithm is undefined.
    pub fn ln_timestamp(&self) -> TenorResult<f64> {
        let seconds = self.unix_timestamp();
        if seconds <= 0 {
            return Err(TenorError::invalid_date(format!(
                "{self} is not after the Unix epoch; log-time is undefined"
            )));
        }
        Ok((seconds as f64).ln())
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Formats the date day-first (DD/MM/YYYY).
    #[must_use]
    pub fn format_dmy(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse_dmy() {
        let date = Date::parse_dmy("15/06/2022").unwrap();
        assert_eq!(date, Date::from_ymd(2022, 6, 15).unwrap());

        let dashed = Date::parse_dmy("01-12-2030").unwrap();
        assert_eq!(dashed, Date::from_ymd(2030, 12, 1).unwrap());

        assert!(Date::parse_dmy("2022-06-15").is_err());
        assert!(Date::parse_dmy("31/02/2022").is_err());
    }

    #[test]
    fn test_parse_flexible() {
        let expected = Date::from_ymd(2022, 6, 15).unwrap();
        assert_eq!(Date::parse_flexible(" 15/06/2022 ").unwrap(), expected);
        assert_eq!(Date::parse_flexible("2022-06-15").unwrap(), expected);
        assert!(Date::parse_flexible("#N/A").is_err());
    }

    #[test]
    fn test_add_months() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result.month(), 2);
        assert_eq!(result.day(), 28); // Rolled back to last valid day

        let back = Date::from_ymd(2020, 1, 1).unwrap().add_months(-12).unwrap();
        assert_eq!(back, Date::from_ymd(2019, 1, 1).unwrap());
    }

    #[test]
    fn test_leap_february() {
        let date = Date::from_ymd(2023, 8, 31).unwrap();
        assert_eq!(date.add_months(6).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2 - d1, 30);
    }

    #[test]
    fn test_year_fraction() {
        let d1 = Date::from_ymd(2022, 1, 1).unwrap();
        let d2 = Date::from_ymd(2022, 6, 15).unwrap();
        assert_relative_eq!(d1.year_fraction(&d2), 165.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_unix_timestamp() {
        let date = Date::from_ymd(1970, 1, 2).unwrap();
        assert_eq!(date.unix_timestamp(), 86_400);

        let date = Date::from_ymd(2022, 6, 15).unwrap();
        assert_eq!(date.unix_timestamp(), 1_655_251_200);
    }

    #[test]
    fn test_ln_timestamp() {
        let date = Date::from_ymd(2022, 6, 15).unwrap();
        assert_relative_eq!(
            date.ln_timestamp().unwrap(),
            (1_655_251_200_f64).ln(),
            epsilon = 1e-12
        );

        assert!(Date::from_ymd(1970, 1, 1).unwrap().ln_timestamp().is_err());
        assert!(Date::from_ymd(1969, 12, 31).unwrap().ln_timestamp().is_err());
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        assert_eq!(format!("{}", date), "2025-06-05");
        assert_eq!(date.format_dmy(), "05/06/2025");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    proptest! {
        #[test]
        fn ln_timestamp_preserves_order(a in 1i64..40_000, b in 1i64..40_000) {
            let epoch = Date::from_ymd(1970, 1, 1).unwrap();
            let (da, db) = (epoch.add_days(a), epoch.add_days(b));
            let (la, lb) = (da.ln_timestamp().unwrap(), db.ln_timestamp().unwrap());
            prop_assert_eq!(da.cmp(&db), la.partial_cmp(&lb).unwrap());
        }

        #[test]
        fn add_months_round_trips_for_early_days(
            year in 1990i32..2080,
            month in 1u32..=12,
            day in 1u32..=28,
            step in -240i32..240,
        ) {
            let date = Date::from_ymd(year, month, day).unwrap();
            let there = date.add_months(step).unwrap();
            prop_assert_eq!(there.add_months(-step).unwrap(), date);
        }
    }
}
