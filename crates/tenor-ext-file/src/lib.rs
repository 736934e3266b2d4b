//! # Tenor Ext File
//!
//! File adapters for the Tenor analytics engine.
//!
//! This crate provides:
//! - a semicolon CSV reader for the bond reference table
//! - a semicolon CSV reader for the discount / zero / market rate curve
//! - a semicolon CSV writer for the valuation table
//!
//! Readers accept spreadsheet exports as they come: a UTF-8 byte order mark,
//! decimal commas, day-first dates and `#N/A` style empty markers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod bonds;
mod cells;
mod curves;
mod error;
mod valuations;

pub use bonds::{read_bonds, read_bonds_from_path, BondTable, RejectedRow};
pub use curves::{read_curve, read_curve_from_path, read_curve_rows};
pub use error::{FileError, FileResult};
pub use valuations::{write_valuations, write_valuations_to_path};
