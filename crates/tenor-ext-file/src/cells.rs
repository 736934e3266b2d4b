//! Cell parsing shared by the table readers.
//!
//! Cells come from spreadsheet exports: decimal commas, day-first dates and
//! assorted "no value" markers.

use std::io::Read;
use std::str::FromStr;

use rust_decimal::Decimal;

use tenor_core::Date;

use crate::error::{FileError, FileResult};

const MISSING_MARKERS: [&str; 5] = ["#N/A", "N/A", "NA", "NULL", "-"];

/// Reads the whole stream, dropping a leading UTF-8 byte order mark.
pub(crate) fn read_text<R: Read>(mut reader: R, source: &str) -> FileResult<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| FileError::io(source, e))?;
    if let Some(stripped) = text.strip_prefix('\u{feff}') {
        text = stripped.to_string();
    }
    Ok(text)
}

/// Semicolon reader over `text` with trimmed headers and cells.
pub(crate) fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes())
}

/// The cell's text, or `None` when it is empty or a missing-value marker.
pub(crate) fn present(cell: Option<&str>) -> Option<&str> {
    let cell = cell?.trim();
    if cell.is_empty() || MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m)) {
        None
    } else {
        Some(cell)
    }
}

/// Normalises a number written with a decimal comma, optionally with
/// thousands separators. The separator that appears last is the decimal one.
fn normalise_number(cell: &str) -> String {
    let cell: String = cell.chars().filter(|c| !c.is_whitespace()).collect();
    match (cell.rfind(','), cell.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => cell.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cell.replace(',', ""),
        (Some(_), None) => cell.replace(',', "."),
        _ => cell,
    }
}

pub(crate) fn decimal(cell: Option<&str>, row: usize, column: &str) -> FileResult<Option<Decimal>> {
    let Some(raw) = present(cell) else {
        return Ok(None);
    };
    let text = normalise_number(raw);
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|e| FileError::parse(row, column, raw, e.to_string()))
}

pub(crate) fn float(cell: Option<&str>, row: usize, column: &str) -> FileResult<Option<f64>> {
    let Some(raw) = present(cell) else {
        return Ok(None);
    };
    let value = f64::from_str(&normalise_number(raw))
        .map_err(|e| FileError::parse(row, column, raw, e.to_string()))?;
    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(FileError::parse(row, column, raw, "not a finite number"))
    }
}

/// Whole positive count, accepting `2`, `2.0` or `2,0`.
pub(crate) fn count(cell: Option<&str>, row: usize, column: &str) -> FileResult<Option<u32>> {
    let Some(raw) = present(cell) else {
        return Ok(None);
    };
    let value = float(Some(raw), row, column)?.unwrap_or_default();
    if value.fract() != 0.0 || value <= 0.0 || value > f64::from(u32::MAX) {
        return Err(FileError::parse(row, column, raw, "expected a whole positive number"));
    }
    Ok(Some(value as u32))
}

pub(crate) fn date(cell: Option<&str>, row: usize, column: &str) -> FileResult<Option<Date>> {
    let Some(raw) = present(cell) else {
        return Ok(None);
    };
    // Exports sometimes carry a midnight time component
    let day_part = raw.split_whitespace().next().unwrap_or(raw);
    Date::parse_flexible(day_part)
        .map(Some)
        .map_err(|e| FileError::parse(row, column, raw, e.to_string()))
}

pub(crate) fn flag(cell: Option<&str>, row: usize, column: &str) -> FileResult<bool> {
    let Some(raw) = present(cell) else {
        return Ok(false);
    };
    match raw.to_ascii_uppercase().as_str() {
        "Y" | "YES" | "TRUE" | "1" | "S" | "SI" => Ok(true),
        "N" | "NO" | "FALSE" | "0" => Ok(false),
        _ => Err(FileError::parse(row, column, raw, "expected Y/N, TRUE/FALSE or 1/0")),
    }
}
