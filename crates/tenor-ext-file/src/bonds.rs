//! Bond reference table reader.
//!
//! Semicolon-delimited with a header row. Recognised columns:
//!
//! | Column | Required | Meaning |
//! |--------|----------|---------|
//! | `ISIN` (or `Identifier`) | yes | bond identifier |
//! | `Coupon` | yes | coupon rate, percent of nominal |
//! | `Coupon Frequency` | yes | payments per year |
//! | `First Coupon Date` | yes | anchor of the coupon grid |
//! | `Maturity` | yes | maturity date |
//! | `Price` (or `Nominal`) | no | nominal (default 100) |
//! | `Next Call Date` | no | replaces maturity as redemption date |
//! | `Callable` | no | `Y/N`, `TRUE/FALSE`, `1/0` |
//! | `Bid Price`, `Ask Price` | no | clean quotes, percent of nominal |
//! | `Spread` | no | pricing spread in basis points |
//!
//! Other columns are ignored. An empty date cell loads as a missing date;
//! such a bond still loads and fails later, during valuation, on its own.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tenor_bonds::{Bond, BondBuilder};

use crate::cells;
use crate::error::{FileError, FileResult};

const REQUIRED: [(&str, &[&str]); 5] = [
    ("ISIN", &["ISIN", "Identifier"]),
    ("Coupon", &["Coupon"]),
    ("Coupon Frequency", &["Coupon Frequency"]),
    ("First Coupon Date", &["First Coupon Date"]),
    ("Maturity", &["Maturity"]),
];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BondRecord {
    #[serde(rename = "ISIN")]
    isin: Option<String>,
    #[serde(rename = "Identifier")]
    identifier: Option<String>,
    #[serde(rename = "Price")]
    price: Option<String>,
    #[serde(rename = "Nominal")]
    nominal: Option<String>,
    #[serde(rename = "Coupon")]
    coupon: Option<String>,
    #[serde(rename = "Coupon Frequency")]
    coupon_frequency: Option<String>,
    #[serde(rename = "First Coupon Date")]
    first_coupon_date: Option<String>,
    #[serde(rename = "Maturity")]
    maturity: Option<String>,
    #[serde(rename = "Next Call Date")]
    next_call_date: Option<String>,
    #[serde(rename = "Callable")]
    callable: Option<String>,
    #[serde(rename = "Bid Price")]
    bid_price: Option<String>,
    #[serde(rename = "Ask Price")]
    ask_price: Option<String>,
    #[serde(rename = "Spread")]
    spread: Option<String>,
}

impl BondRecord {
    /// `ISIN` when present, else `Identifier`.
    fn identifier(&self) -> Option<&str> {
        cells::present(self.isin.as_deref()).or_else(|| cells::present(self.identifier.as_deref()))
    }

    fn into_bond(self, row: usize) -> FileResult<Bond> {
        let coupon_frequency = cells::count(self.coupon_frequency.as_deref(), row, "Coupon Frequency")?;
        let mut builder = BondBuilder::new()
            .dates(
                cells::date(self.first_coupon_date.as_deref(), row, "First Coupon Date")?,
                cells::date(self.maturity.as_deref(), row, "Maturity")?,
                cells::date(self.next_call_date.as_deref(), row, "Next Call Date")?,
            )
            .callable(cells::flag(self.callable.as_deref(), row, "Callable")?)
            .spread_bps(cells::float(self.spread.as_deref(), row, "Spread")?)
            .quotes(
                cells::decimal(self.bid_price.as_deref(), row, "Bid Price")?,
                cells::decimal(self.ask_price.as_deref(), row, "Ask Price")?,
            );

        if let Some(id) = self.identifier() {
            builder = builder.identifier(id);
        }
        let nominal = match cells::present(self.price.as_deref()) {
            Some(_) => cells::decimal(self.price.as_deref(), row, "Price")?,
            None => cells::decimal(self.nominal.as_deref(), row, "Nominal")?,
        };
        if let Some(nominal) = nominal {
            builder = builder.nominal(nominal);
        }
        if let Some(coupon) = cells::decimal(self.coupon.as_deref(), row, "Coupon")? {
            builder = builder.coupon_rate(coupon);
        }
        if let Some(frequency) = coupon_frequency {
            builder = builder.coupon_frequency(frequency);
        }

        builder.build().map_err(|e| FileError::InvalidRecord {
            row,
            reason: e.to_string(),
        })
    }
}

/// A row that did not produce a bond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based data row (header excluded).
    pub row: usize,
    /// Identifier cell, when readable.
    pub identifier: Option<String>,
    /// Why the row was rejected.
    pub reason: String,
}

/// Bonds read from a table.
#[derive(Debug, Clone, Default)]
pub struct BondTable {
    /// Bonds in file order.
    pub bonds: Vec<Bond>,
    /// Rows that could not be turned into a bond.
    pub rejected: Vec<RejectedRow>,
}

impl BondTable {
    /// Number of bonds read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    /// Returns true when no bond was read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
}

/// Turns one raw row into a bond. The error side carries whatever
/// identifier could be read, for the rejection report.
fn read_row(
    record: &csv::StringRecord,
    headers: &csv::StringRecord,
    id_columns: &[usize],
    row: usize,
) -> Result<Bond, (Option<String>, FileError)> {
    let identifier = id_columns
        .iter()
        .find_map(|&i| cells::present(record.get(i)))
        .map(str::to_string);

    if record.len() > headers.len() {
        let reason = format!(
            "row has {} cells but the header has {}",
            record.len(),
            headers.len()
        );
        return Err((identifier, FileError::InvalidRecord { row, reason }));
    }

    let parsed: BondRecord = record
        .deserialize(Some(headers))
        .map_err(|e| (identifier.clone(), FileError::from(e)))?;
    parsed.into_bond(row).map_err(|e| (identifier, e))
}

/// Reads a bond table from `reader`.
///
/// Rows with unparseable cells, extra cells, or without an identifier,
/// coupon or frequency, are returned in [`BondTable::rejected`]; the rest
/// still load. When both `ISIN` and `Identifier` are present, `ISIN` wins
/// and `Identifier` fills in where it is empty.
///
/// # Errors
///
/// Fails on I/O errors, malformed CSV, or a header without one of the
/// required columns.
pub fn read_bonds<R: Read>(reader: R) -> FileResult<BondTable> {
    let text = cells::read_text(reader, "bond table")?;
    let mut csv = cells::csv_reader(&text);

    let headers = csv.headers()?.clone();
    for (name, accepted) in REQUIRED {
        if !headers.iter().any(|h| accepted.contains(&h)) {
            return Err(FileError::MissingColumn {
                column: name.to_string(),
            });
        }
    }

    let id_columns: Vec<usize> = ["ISIN", "Identifier"]
        .iter()
        .filter_map(|name| headers.iter().position(|h| h == *name))
        .collect();

    let mut table = BondTable::default();
    for (index, record) in csv.records().enumerate() {
        let row = index + 1;
        let parsed = record
            .map_err(|e| (None, FileError::from(e)))
            .and_then(|record| read_row(&record, &headers, &id_columns, row));

        match parsed {
            Ok(bond) => table.bonds.push(bond),
            Err((identifier, e)) => {
                log::warn!("bond table row {row} rejected: {e}");
                table.rejected.push(RejectedRow {
                    row,
                    identifier,
                    reason: e.to_string(),
                });
            }
        }
    }

    log::debug!(
        "read {} bonds ({} rejected rows)",
        table.bonds.len(),
        table.rejected.len()
    );
    Ok(table)
}

/// Reads a bond table from a file.
pub fn read_bonds_from_path(path: impl AsRef<Path>) -> FileResult<BondTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::io(path, e))?;
    read_bonds(file)
}
