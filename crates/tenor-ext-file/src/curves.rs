//! Curve table reader.
//!
//! Semicolon-delimited with columns `Date;Discount;Zero Rate;Market Rate`,
//! one row per tenor, dates strictly increasing. Rates are in percent.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tenor_curves::{Curve, CurveRow};

use crate::cells;
use crate::error::{FileError, FileResult};

const COLUMNS: [&str; 4] = ["Date", "Discount", "Zero Rate", "Market Rate"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CurveRecord {
    #[serde(rename = "Date")]
    date: Option<String>,
    #[serde(rename = "Discount")]
    discount: Option<String>,
    #[serde(rename = "Zero Rate")]
    zero_rate: Option<String>,
    #[serde(rename = "Market Rate")]
    market_rate: Option<String>,
}

impl CurveRecord {
    fn into_row(self, row: usize) -> FileResult<CurveRow> {
        let required = |value: Option<f64>, column: &str| {
            value.ok_or_else(|| FileError::parse(row, column, "", "value is missing"))
        };

        let date = cells::date(self.date.as_deref(), row, "Date")?
            .ok_or_else(|| FileError::parse(row, "Date", "", "value is missing"))?;
        let discount = required(cells::float(self.discount.as_deref(), row, "Discount")?, "Discount")?;
        let zero = required(cells::float(self.zero_rate.as_deref(), row, "Zero Rate")?, "Zero Rate")?;
        let market = required(
            cells::float(self.market_rate.as_deref(), row, "Market Rate")?,
            "Market Rate",
        )?;

        Ok(CurveRow::new(date, discount, zero, market))
    }
}

/// Reads the raw rows of a curve table.
///
/// # Errors
///
/// Fails on I/O or CSV errors, a missing column, or any unparseable or
/// empty cell.
pub fn read_curve_rows<R: Read>(reader: R) -> FileResult<Vec<CurveRow>> {
    let text = cells::read_text(reader, "curve table")?;
    let mut csv = cells::csv_reader(&text);

    let headers = csv.headers()?.clone();
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(FileError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    csv.deserialize::<CurveRecord>()
        .enumerate()
        .map(|(index, record)| record?.into_row(index + 1))
        .collect()
}

/// Reads a curve table and builds the curve.
///
/// # Errors
///
/// As [`read_curve_rows`], plus `FileError::Curve` when the rows do not form
/// a valid curve (no rows, dates out of order, dates before 1970).
pub fn read_curve<R: Read>(reader: R) -> FileResult<Curve> {
    let rows = read_curve_rows(reader)?;
    Ok(Curve::load(rows)?)
}

/// Reads a curve from a file.
pub fn read_curve_from_path(path: impl AsRef<Path>) -> FileResult<Curve> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::io(path, e))?;
    read_curve(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_core::Date;
    use tenor_curves::CurveError;

    const CURVE: &str = "\u{feff}Date;Discount;Zero Rate;Market Rate
01/01/2022;1;0,5;0,45
01/01/2023;0,985;1,5;1,4
01/01/2025;0,94;2,1;2,0
";

    #[test]
    fn test_read_curve() {
        let curve = read_curve(CURVE.as_bytes()).unwrap();
        assert_eq!(curve.len(), 3);

        let d = Date::from_ymd(2023, 1, 1).unwrap();
        assert_relative_eq!(curve.discount_factor(d).unwrap(), 0.985);
        assert_relative_eq!(curve.zero_rate(d).unwrap(), 0.015, epsilon = 1e-15);
        assert_relative_eq!(curve.market_rate(d).unwrap(), 0.014, epsilon = 1e-15);
    }

    #[test]
    fn test_rows_keep_percent() {
        let rows = read_curve_rows(CURVE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_relative_eq!(rows[1].zero_rate_pct, 1.5);
    }

    #[test]
    fn test_empty_curve_is_interpolation_error() {
        let err = read_curve("Date;Discount;Zero Rate;Market Rate\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FileError::Curve(CurveError::Interpolation { .. })));
    }

    #[test]
    fn test_unordered_dates() {
        let text = "Date;Discount;Zero Rate;Market Rate
01/01/2023;0,985;1,5;1,4
01/01/2022;1;0,5;0,45
";
        let err = read_curve(text.as_bytes()).unwrap_err();
        assert!(matches!(err, FileError::Curve(CurveError::NonMonotonicDates { .. })));
    }

    #[test]
    fn test_empty_cell() {
        let text = "Date;Discount;Zero Rate;Market Rate\n01/01/2022;;0,5;0,45\n";
        let err = read_curve(text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Discount"));
    }

    #[test]
    fn test_missing_column() {
        let text = "Date;Discount;Zero Rate\n01/01/2022;1;0,5\n";
        let err = read_curve(text.as_bytes()).unwrap_err();
        assert!(matches!(err, FileError::MissingColumn { ref column } if column == "Market Rate"));
    }
}
