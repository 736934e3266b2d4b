//! Valuation table writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use tenor_analytics::BondValuation;

use crate::error::{FileError, FileResult};

const HEADER: [&str; 11] = [
    "ISIN",
    "Evaluation Date",
    "Accrued Interest",
    "Clean Price",
    "Dirty Price",
    "Market Dirty Price",
    "Z-Spread (bps)",
    "YTM (%)",
    "Macaulay Duration",
    "Modified Duration",
    "Convexity",
];

/// One output row. Empty cells for metrics that could not be computed.
#[derive(Debug, Serialize)]
struct ValuationRecord<'a> {
    #[serde(rename = "ISIN")]
    identifier: &'a str,
    #[serde(rename = "Evaluation Date")]
    evaluation_date: String,
    #[serde(rename = "Accrued Interest")]
    accrued_interest: f64,
    #[serde(rename = "Clean Price")]
    clean_price: f64,
    #[serde(rename = "Dirty Price")]
    dirty_price: f64,
    #[serde(rename = "Market Dirty Price")]
    market_dirty_price: Option<f64>,
    #[serde(rename = "Z-Spread (bps)")]
    z_spread_bps: Option<f64>,
    #[serde(rename = "YTM (%)")]
    ytm_pct: Option<f64>,
    #[serde(rename = "Macaulay Duration")]
    macaulay_duration: Option<f64>,
    #[serde(rename = "Modified Duration")]
    modified_duration: Option<f64>,
    #[serde(rename = "Convexity")]
    convexity: Option<f64>,
}

impl<'a> From<&'a BondValuation> for ValuationRecord<'a> {
    fn from(v: &'a BondValuation) -> Self {
        Self {
            identifier: &v.identifier,
            evaluation_date: v.evaluation_date.format_dmy(),
            accrued_interest: v.accrued_interest,
            clean_price: v.clean_price,
            dirty_price: v.dirty_price,
            market_dirty_price: v.market_dirty_price,
            z_spread_bps: v.z_spread_bps(),
            ytm_pct: v.ytm_pct(),
            macaulay_duration: v.macaulay_duration,
            modified_duration: v.modified_duration,
            convexity: v.convexity,
        }
    }
}

/// Writes valuations as a semicolon-delimited table with a header row.
pub fn write_valuations<W: Write>(writer: W, valuations: &[BondValuation]) -> FileResult<()> {
    let mut csv = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);
    // serialize only emits the header alongside the first record
    if valuations.is_empty() {
        csv.write_record(HEADER)?;
    }
    for valuation in valuations {
        csv.serialize(ValuationRecord::from(valuation))?;
    }
    csv.flush().map_err(|e| FileError::io("valuation table", e))?;
    Ok(())
}

/// Writes valuations to a file, replacing it.
pub fn write_valuations_to_path(
    path: impl AsRef<Path>,
    valuations: &[BondValuation],
) -> FileResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FileError::io(path, e))?;
    write_valuations(file, valuations)?;
    log::debug!("wrote {} valuations to {}", valuations.len(), path.display());
    Ok(())
}
