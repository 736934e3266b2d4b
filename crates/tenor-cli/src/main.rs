//! Tenor CLI - bond valuation against a discount / zero curve.
//!
//! # Usage
//!
//! ```bash
//! # Value a bond table and write the enriched table
//! tenor value --bonds bonds.csv --curve curve.csv --date 2022-06-15 --output valuations.csv
//!
//! # Price one bond given on the command line
//! tenor price --curve curve.csv --coupon 5 --first-coupon 2020-01-01 --maturity 2025-01-01
//!
//! # Inspect the curve and a bond's remaining cash flows
//! tenor curve --curve curve.csv --at 2023-01-01,2024-01-01
//! tenor schedule --coupon 5 --first-coupon 2020-01-01 --maturity 2025-01-01
//!
//! # Show the effective configuration
//! tenor config show
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};

const DEFAULT_FILTER: &str = "warn,tenor=info";
const VERBOSE_FILTER: &str = "info,tenor=debug";
const QUIET_FILTER: &str = "error";

fn init_logging(verbose: bool, quiet: bool) {
    // RUST_LOG wins over the defaults; log records from the library crates
    // are bridged into the same subscriber.
    let default = match (verbose, quiet) {
        (true, _) => VERBOSE_FILTER,
        (false, true) => QUIET_FILTER,
        (false, false) => DEFAULT_FILTER,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let ctx = cli.context();

    match cli.command {
        Commands::Value(args) => commands::value::execute(args, &ctx)?,
        Commands::Price(args) => commands::price::execute(args, &ctx)?,
        Commands::Curve(args) => commands::curve::execute(args, &ctx)?,
        Commands::Schedule(args) => commands::schedule::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
