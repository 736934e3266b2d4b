//! The curve store.

use tenor_core::Date;
use tenor_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::point::{CurveColumn, CurvePoint, CurveRow};

/// Dated discount / zero-rate / market-rate term structure.
///
/// Immutable once loaded. Each column is interpolated linearly against
/// `ln(unix_timestamp(date))`, the same transform applied to stored and
/// queried dates. Outside the stored range the first or last value is
/// returned unchanged.
#[derive(Debug, Clone)]
pub struct Curve {
    points: Vec<CurvePoint>,
    discount: LinearInterpolator,
    zero_rate: LinearInterpolator,
    market_rate: LinearInterpolator,
}

impl Curve {
    /// Builds the store from quoted rows (rates in percent).
    ///
    /// # Errors
    ///
    /// - `CurveError::Interpolation` when there are no rows
    /// - `CurveError::NonMonotonicDates` when dates are not strictly increasing
    /// - `CurveError::InvalidDate` for dates on or before 1970-01-01
    /// - `CurveError::InvalidValue` for NaN or infinite values
    pub fn load<I>(rows: I) -> CurveResult<Self>
    where
        I: IntoIterator<Item = CurveRow>,
    {
        Self::from_points(rows.into_iter().map(CurvePoint::from).collect())
    }

    /// Builds the store from knots whose rates are already fractions.
    ///
    /// # Errors
    ///
    /// Same as [`Curve::load`].
    pub fn from_points(points: Vec<CurvePoint>) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::interpolation("curve has no rows"));
        }

        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(CurveError::NonMonotonicDates {
                    index: index + 1,
                    previous: pair[0].date,
                    current: pair[1].date,
                });
            }
        }

        for point in &points {
            let finite = CurveColumn::ALL
                .iter()
                .all(|column| point.value(*column).is_finite());
            if !finite {
                return Err(CurveError::invalid_value(format!(
                    "non-finite value on {}",
                    point.date
                )));
            }
        }

        let xs = points
            .iter()
            .map(|p| p.date.ln_timestamp())
            .collect::<Result<Vec<_>, _>>()?;

        let column = |c: CurveColumn| -> CurveResult<LinearInterpolator> {
            let ys = points.iter().map(|p| p.value(c)).collect();
            Ok(LinearInterpolator::new(xs.clone(), ys)?)
        };

        let curve = Self {
            discount: column(CurveColumn::Discount)?,
            zero_rate: column(CurveColumn::ZeroRate)?,
            market_rate: column(CurveColumn::MarketRate)?,
            points,
        };

        log::debug!(
            "loaded curve with {} rows from {} to {}",
            curve.len(),
            curve.first_date(),
            curve.last_date()
        );

        Ok(curve)
    }

    /// Interpolated value of `column` at `date`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidDate` for a query on or before the Unix
    /// epoch.
    pub fn interpolate(&self, date: Date, column: CurveColumn) -> CurveResult<f64> {
        let x = date.ln_timestamp()?;
        let value = match column {
            CurveColumn::Discount => self.discount.interpolate(x)?,
            CurveColumn::ZeroRate => self.zero_rate.interpolate(x)?,
            CurveColumn::MarketRate => self.market_rate.interpolate(x)?,
        };
        Ok(value)
    }

    /// Interpolated discount factor at `date`.
    pub fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        self.interpolate(date, CurveColumn::Discount)
    }

    /// Interpolated zero rate (fraction) at `date`.
    pub fn zero_rate(&self, date: Date) -> CurveResult<f64> {
        self.interpolate(date, CurveColumn::ZeroRate)
    }

    /// Interpolated market rate (fraction) at `date`.
    pub fn market_rate(&self, date: Date) -> CurveResult<f64> {
        self.interpolate(date, CurveColumn::MarketRate)
    }

    /// All three columns at `date`.
    pub fn sample(&self, date: Date) -> CurveResult<CurvePoint> {
        Ok(CurvePoint {
            date,
            discount: self.discount_factor(date)?,
            zero_rate: self.zero_rate(date)?,
            market_rate: self.market_rate(date)?,
        })
    }

    /// Stored knots in date order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of stored knots.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; an empty curve cannot be loaded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First stored date.
    pub fn first_date(&self) -> Date {
        self.points[0].date
    }

    /// Last stored date.
    pub fn last_date(&self) -> Date {
        self.points[self.points.len() - 1].date
    }

    /// Whether `date` lies within the stored dates (inclusive).
    pub fn covers(&self, date: Date) -> bool {
        date >= self.first_date() && date <= self.last_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample_curve() -> Curve {
        Curve::load(vec![
            CurveRow::new(date(2023, 1, 1), 0.98, 2.0, 2.5),
            CurveRow::new(date(2024, 1, 1), 0.95, 2.5, 3.0),
            CurveRow::new(date(2026, 1, 1), 0.88, 3.5, 3.25),
        ])
        .unwrap()
    }

    #[test]
    fn test_identity_at_knots() {
        let curve = sample_curve();
        for point in curve.points() {
            for column in CurveColumn::ALL {
                assert_eq!(
                    curve.interpolate(point.date, column).unwrap(),
                    point.value(column)
                );
            }
        }
    }

    #[test]
    fn test_log_time_interpolation() {
        let curve = sample_curve();
        let query = date(2024, 7, 1);

        let x0 = date(2024, 1, 1).ln_timestamp().unwrap();
        let x1 = date(2026, 1, 1).ln_timestamp().unwrap();
        let xq = query.ln_timestamp().unwrap();
        let w = (xq - x0) / (x1 - x0);
        let expected = 0.95 + w * (0.88 - 0.95);

        assert_relative_eq!(curve.discount_factor(query).unwrap(), expected, epsilon = 1e-14);

        // Log-time weighting differs from a calendar-day weighting
        let linear_days = date(2024, 1, 1).days_between(&query) as f64
            / date(2024, 1, 1).days_between(&date(2026, 1, 1)) as f64;
        assert!((w - linear_days).abs() > 1e-6);
    }

    #[test]
    fn test_rates_stored_as_fractions() {
        let curve = sample_curve();
        assert_relative_eq!(curve.zero_rate(date(2024, 1, 1)).unwrap(), 0.025, epsilon = 1e-15);
        assert_relative_eq!(curve.market_rate(date(2026, 1, 1)).unwrap(), 0.0325, epsilon = 1e-15);
    }

    #[test]
    fn test_clamps_outside_range() {
        let curve = sample_curve();

        assert_eq!(curve.discount_factor(date(2020, 5, 5)).unwrap(), 0.98);
        assert_eq!(curve.discount_factor(date(2040, 5, 5)).unwrap(), 0.88);
        assert!(!curve.covers(date(2040, 5, 5)));
        assert!(curve.covers(date(2025, 5, 5)));
    }

    #[test]
    fn test_single_row_is_constant() {
        let curve = Curve::load(vec![CurveRow::new(date(2030, 1, 1), 0.9, 3.0, 3.0)]).unwrap();

        assert_eq!(curve.discount_factor(date(2022, 6, 15)).unwrap(), 0.9);
        assert_eq!(curve.discount_factor(date(2035, 6, 15)).unwrap(), 0.9);
    }

    #[test]
    fn test_empty_curve_is_interpolation_error() {
        let result = Curve::load(Vec::new());
        assert!(matches!(result, Err(CurveError::Interpolation { .. })));
    }

    #[test]
    fn test_non_monotonic_dates() {
        let result = Curve::load(vec![
            CurveRow::new(date(2024, 1, 1), 0.95, 2.5, 3.0),
            CurveRow::new(date(2024, 1, 1), 0.94, 2.6, 3.1),
        ]);
        assert!(matches!(
            result,
            Err(CurveError::NonMonotonicDates { index: 1, .. })
        ));
    }

    #[test]
    fn test_pre_epoch_dates_rejected() {
        let result = Curve::load(vec![CurveRow::new(date(1965, 1, 1), 1.0, 0.0, 0.0)]);
        assert!(matches!(result, Err(CurveError::InvalidDate { .. })));

        let curve = sample_curve();
        assert!(matches!(
            curve.discount_factor(date(1970, 1, 1)),
            Err(CurveError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = Curve::load(vec![CurveRow::new(date(2024, 1, 1), f64::NAN, 2.5, 3.0)]);
        assert!(matches!(result, Err(CurveError::InvalidValue { .. })));
    }

    #[test]
    fn test_sample_reads_every_column() {
        let curve = sample_curve();
        let point = curve.sample(date(2023, 1, 1)).unwrap();
        assert_eq!(point.discount, 0.98);
        assert_relative_eq!(point.zero_rate, 0.02, epsilon = 1e-15);
        assert_relative_eq!(point.market_rate, 0.025, epsilon = 1e-15);
    }
}
