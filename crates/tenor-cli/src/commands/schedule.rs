//! Schedule command implementation.
//!
//! Shows the remaining cash flows of a bond and where the evaluation date
//! sits in the running coupon period.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_bonds::{CashFlow, CashFlowType, ScheduleGenerator};

use crate::cli::{Context, OutputFormat};
use crate::commands::{evaluation_date, BondArgs};
use crate::output::{print_header, print_output, print_single, KeyValue};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Evaluation date. Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// One cash flow row.
#[derive(Debug, Serialize, Tabled)]
pub struct FlowRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Years", display_with = "six")]
    pub years: f64,
    #[tabled(rename = "Amount", display_with = "six")]
    pub amount: f64,
    #[tabled(rename = "Type")]
    pub kind: &'static str,
}

fn six(value: &f64) -> String {
    format!("{value:.6}")
}

impl From<&CashFlow> for FlowRow {
    fn from(cf: &CashFlow) -> Self {
        Self {
            date: cf.date.to_string(),
            years: cf.years,
            amount: cf.amount,
            kind: match cf.cf_type {
                CashFlowType::Coupon => "coupon",
                CashFlowType::CouponAndPrincipal => "coupon+principal",
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ScheduleOutput {
    identifier: String,
    evaluation_date: String,
    previous_coupon: String,
    next_coupon: String,
    accrued_fraction: f64,
    period_coupon: f64,
    accrued_interest: f64,
    flows: Vec<FlowRow>,
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, ctx: &Context) -> Result<()> {
    let evaluation = evaluation_date(args.date.as_deref())?;
    let bond = args.bond.to_bond()?;
    let schedule = ScheduleGenerator::generate(&bond, evaluation)?;

    let flows: Vec<FlowRow> = schedule.iter().map(FlowRow::from).collect();

    match ctx.format {
        OutputFormat::Table => {
            let summary = vec![
                KeyValue::new("Bond", bond.identifier()),
                KeyValue::new("Evaluation Date", evaluation.to_string()),
                KeyValue::new("Previous Coupon", schedule.previous_coupon().to_string()),
                KeyValue::new("Next Coupon", schedule.next_coupon().to_string()),
                KeyValue::number("Accrued Fraction", Some(schedule.accrued_fraction()), 6),
                KeyValue::number("Period Coupon", Some(schedule.period_coupon()), 6),
                KeyValue::number("Accrued Interest", Some(schedule.accrued_interest()), 6),
            ];
            print_output(&summary, ctx.format)?;
            if !ctx.quiet {
                print_header("Cash flows");
            }
            print_output(&flows, ctx.format)?;
        }
        OutputFormat::Json => {
            let out = ScheduleOutput {
                identifier: bond.identifier().to_string(),
                evaluation_date: evaluation.to_string(),
                previous_coupon: schedule.previous_coupon().to_string(),
                next_coupon: schedule.next_coupon().to_string(),
                accrued_fraction: schedule.accrued_fraction(),
                period_coupon: schedule.period_coupon(),
                accrued_interest: schedule.accrued_interest(),
                flows,
            };
            print_single(&out, ctx.format)?;
        }
        OutputFormat::Csv | OutputFormat::Minimal => print_output(&flows, ctx.format)?,
    }

    Ok(())
}
