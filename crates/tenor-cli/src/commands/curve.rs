//! Curve command implementation.
//!
//! Prints the knots of a curve file, or the interpolated values at the
//! requested dates.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_curves::CurvePoint;
use tenor_ext_file::read_curve_from_path;

use crate::cli::Context;
use crate::commands::parse_date;
use crate::output::{print_info, print_output};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Curve table (semicolon CSV)
    #[arg(long)]
    pub curve: PathBuf,

    /// Interpolate at these dates (comma-separated) instead of listing knots
    #[arg(short, long, value_delimiter = ',')]
    pub at: Vec<String>,
}

/// One curve row, rates in percent.
#[derive(Debug, Serialize, Tabled)]
pub struct CurveRowOutput {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Discount", display_with = "six")]
    pub discount: f64,
    #[tabled(rename = "Zero (%)", display_with = "six")]
    pub zero_rate_pct: f64,
    #[tabled(rename = "Market (%)", display_with = "six")]
    pub market_rate_pct: f64,
}

fn six(value: &f64) -> String {
    format!("{value:.6}")
}

impl From<&CurvePoint> for CurveRowOutput {
    fn from(p: &CurvePoint) -> Self {
        Self {
            date: p.date.to_string(),
            discount: p.discount,
            zero_rate_pct: p.zero_rate * 100.0,
            market_rate_pct: p.market_rate * 100.0,
        }
    }
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, ctx: &Context) -> Result<()> {
    let curve = read_curve_from_path(&args.curve)
        .with_context(|| format!("reading curve from {}", args.curve.display()))?;

    let rows: Vec<CurveRowOutput> = if args.at.is_empty() {
        if !ctx.quiet {
            print_info(&format!(
                "{} knots from {} to {}",
                curve.len(),
                curve.first_date(),
                curve.last_date()
            ));
        }
        curve.points().iter().map(CurveRowOutput::from).collect()
    } else {
        let mut rows = Vec::with_capacity(args.at.len());
        for s in &args.at {
            let date = parse_date(s)?;
            if !ctx.quiet && !curve.covers(date) {
                print_info(&format!(
                    "{date} is outside the curve, held flat at the nearest knot"
                ));
            }
            rows.push(CurveRowOutput::from(&curve.sample(date)?));
        }
        rows
    };

    print_output(&rows, ctx.format)
}
