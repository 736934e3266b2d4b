//! Price command implementation.
//!
//! Values one bond given on the command line against a curve file.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use rust_decimal::Decimal;

use tenor_analytics::{BondValuation, Valuator};
use tenor_ext_file::read_curve_from_path;

use crate::cli::{Context, OutputFormat};
use crate::commands::{evaluation_date, BondArgs};
use crate::error::CliError;
use crate::output::{print_output, print_single, print_warning, KeyValue};
use crate::settings;

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Curve table (semicolon CSV)
    #[arg(long)]
    pub curve: PathBuf,

    /// Evaluation date. Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Pricing spread in bps (overrides the config default)
    #[arg(short, long, allow_negative_numbers = true)]
    pub spread: Option<f64>,

    /// Observed clean bid price, percent of nominal
    #[arg(long)]
    pub bid: Option<Decimal>,

    /// Observed clean ask price, percent of nominal
    #[arg(long)]
    pub ask: Option<Decimal>,
}

fn metrics(v: &BondValuation) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Bond", v.identifier.clone()),
        KeyValue::new("Evaluation Date", v.evaluation_date.to_string()),
        KeyValue::number("Pricing Spread (bps)", Some(v.pricing_spread_bps), 2),
        KeyValue::number("Accrued Interest", Some(v.accrued_interest), 6),
        KeyValue::number("Clean Price", Some(v.clean_price), 6),
        KeyValue::number("Dirty Price", Some(v.dirty_price), 6),
        KeyValue::number("Market Dirty Price", v.market_dirty_price, 6),
        KeyValue::number("Z-Spread (bps)", v.z_spread_bps(), 4),
        KeyValue::number("YTM (%)", v.ytm_pct(), 6),
        KeyValue::number("Macaulay Duration", v.macaulay_duration, 6),
        KeyValue::number("Modified Duration", v.modified_duration, 6),
        KeyValue::number("Convexity", v.convexity, 6),
    ]
}

/// Execute the price command.
pub fn execute(args: PriceArgs, ctx: &Context) -> Result<()> {
    let evaluation = evaluation_date(args.date.as_deref())?;
    let config = settings::load(ctx.config.as_deref())?.config;
    config.validate()?;

    let bond = args
        .bond
        .builder()?
        .spread_bps(args.spread)
        .quotes(args.bid, args.ask)
        .build()
        .map_err(|e| CliError::invalid_argument("bond", e.to_string()))?;

    let curve = read_curve_from_path(&args.curve)
        .with_context(|| format!("reading curve from {}", args.curve.display()))?;

    let outcome = Valuator::new(&curve, &config, evaluation).value_bond(&bond);

    let Some(valuation) = outcome.valuation else {
        let reason = outcome
            .failures
            .iter()
            .map(|f| format!("[{}] {}", f.stage, f.message))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CliError::NotValued {
            identifier: bond.identifier().to_string(),
            reason,
        }
        .into());
    };

    if !ctx.quiet {
        for failure in &outcome.failures {
            print_warning(&failure.to_string());
        }
    }

    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => print_output(&metrics(&valuation), ctx.format)?,
        OutputFormat::Json => print_single(&valuation, ctx.format)?,
        OutputFormat::Minimal => println!("{:.6}", valuation.dirty_price),
    }

    Ok(())
}
