//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ConfigArgs, CurveArgs, PriceArgs, ScheduleArgs, ValueArgs};

/// Tenor - bond pricing, Z-spread, yield and risk against a discount curve
#[derive(Parser)]
#[command(name = "tenor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress status lines and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Valuation config file (TOML)
    #[arg(long, global = true, env = "TENOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Options shared by every command.
    pub fn context(&self) -> Context {
        Context {
            format: self.format,
            quiet: self.quiet,
            config: self.config.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Value a bond table against a curve (price, Z-spread, YTM, risk)
    Value(ValueArgs),

    /// Value a single bond given on the command line
    Price(PriceArgs),

    /// Show curve knots or interpolated values
    Curve(CurveArgs),

    /// Show a bond's remaining cash flows and accrued interest
    Schedule(ScheduleArgs),

    /// Show or initialise the valuation config
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

/// Global options handed to each command.
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tenor", "curve", "--curve", "c.csv", "-f", "json", "-q", "--config", "x.toml",
        ])
        .unwrap();
        let ctx = cli.context();
        assert_eq!(ctx.format, OutputFormat::Json);
        assert!(ctx.quiet);
        assert_eq!(ctx.config, Some(PathBuf::from("x.toml")));
    }
}
