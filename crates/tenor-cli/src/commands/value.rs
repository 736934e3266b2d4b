//! Value command implementation.
//!
//! Reads a bond table and a curve, values every bond and prints the
//! enriched table. Per-bond failures are logged and the rest still run.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_analytics::config::{YieldBracket, YieldCompounding};
use tenor_analytics::{value_portfolio, BondValuation, ValuationConfig};
use tenor_ext_file::{read_bonds_from_path, read_curve_from_path, write_valuations_to_path};

use crate::cli::Context;
use crate::commands::evaluation_date;
use crate::output::{cell2, cell4, print_output, print_success, print_warning};
use crate::settings;

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Bond table (semicolon CSV)
    #[arg(short, long)]
    pub bonds: PathBuf,

    /// Curve table (semicolon CSV)
    #[arg(short, long)]
    pub curve: PathBuf,

    /// Evaluation date. Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Also write the valuation table to this file (semicolon CSV)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Default pricing spread in bps for bonds without a Spread column
    #[arg(long, allow_negative_numbers = true)]
    pub spread: Option<f64>,

    /// Yield search bracket: wide or narrow
    #[arg(long)]
    pub yield_bracket: Option<YieldBracket>,

    /// Yield compounding: periodic or annual
    #[arg(long)]
    pub compounding: Option<YieldCompounding>,

    /// Value bonds one after another
    #[arg(long)]
    pub sequential: bool,
}

impl ValueArgs {
    /// Flags override values from the config file.
    pub fn apply(&self, mut config: ValuationConfig) -> ValuationConfig {
        if let Some(spread) = self.spread {
            config = config.with_default_spread_bps(spread);
        }
        if let Some(bracket) = self.yield_bracket {
            config = config.with_yield_bracket(bracket);
        }
        if let Some(compounding) = self.compounding {
            config = config.with_compounding(compounding);
        }
        if self.sequential {
            config = config.with_parallel(false);
        }
        config
    }
}

/// One row of the valuation table.
#[derive(Debug, Serialize, Tabled)]
pub struct ValuationRow {
    #[tabled(rename = "ISIN")]
    #[serde(rename = "isin")]
    pub identifier: String,
    #[tabled(rename = "Accrued", display_with = "cell4")]
    pub accrued: Option<f64>,
    #[tabled(rename = "Clean", display_with = "cell4")]
    pub clean: Option<f64>,
    #[tabled(rename = "Dirty", display_with = "cell4")]
    pub dirty: Option<f64>,
    #[tabled(rename = "Mkt Dirty", display_with = "cell4")]
    pub market_dirty: Option<f64>,
    #[tabled(rename = "Z-Spread (bps)", display_with = "cell2")]
    pub z_spread_bps: Option<f64>,
    #[tabled(rename = "YTM (%)", display_with = "cell4")]
    pub ytm_pct: Option<f64>,
    #[tabled(rename = "Mac Dur", display_with = "cell4")]
    pub macaulay: Option<f64>,
    #[tabled(rename = "Mod Dur", display_with = "cell4")]
    pub modified: Option<f64>,
    #[tabled(rename = "Convexity", display_with = "cell4")]
    pub convexity: Option<f64>,
}

impl From<&BondValuation> for ValuationRow {
    fn from(v: &BondValuation) -> Self {
        Self {
            identifier: v.identifier.clone(),
            accrued: Some(v.accrued_interest),
            clean: Some(v.clean_price),
            dirty: Some(v.dirty_price),
            market_dirty: v.market_dirty_price,
            z_spread_bps: v.z_spread_bps(),
            ytm_pct: v.ytm_pct(),
            macaulay: v.macaulay_duration,
            modified: v.modified_duration,
            convexity: v.convexity,
        }
    }
}

/// Execute the value command.
pub fn execute(args: ValueArgs, ctx: &Context) -> Result<()> {
    let evaluation = evaluation_date(args.date.as_deref())?;
    let config = args.apply(settings::load(ctx.config.as_deref())?.config);
    config.validate()?;

    let table = read_bonds_from_path(&args.bonds)
        .with_context(|| format!("reading bonds from {}", args.bonds.display()))?;
    let curve = read_curve_from_path(&args.curve)
        .with_context(|| format!("reading curve from {}", args.curve.display()))?;

    let report = value_portfolio(evaluation, &table.bonds, &curve, &config);

    let rows: Vec<ValuationRow> = report.valuations.iter().map(ValuationRow::from).collect();
    print_output(&rows, ctx.format)?;

    if let Some(path) = &args.output {
        write_valuations_to_path(path, &report.valuations)
            .with_context(|| format!("writing valuations to {}", path.display()))?;
        if !ctx.quiet {
            print_success(&format!("wrote {} rows to {}", rows.len(), path.display()));
        }
    }

    if !ctx.quiet {
        let summary = format!(
            "valued {} of {} bonds at {} ({} rejected rows, {} failed steps)",
            report.len(),
            table.len(),
            evaluation,
            table.rejected.len(),
            report.failures.len()
        );
        if report.has_failures() || !table.rejected.is_empty() {
            print_warning(&summary);
        } else {
            print_success(&summary);
        }
    }

    Ok(())
}
