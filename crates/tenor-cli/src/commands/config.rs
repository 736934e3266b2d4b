//! Config command implementation.
//!
//! Shows the effective valuation config, where it is read from, or writes
//! a default file.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::{Context, OutputFormat};
use crate::output::{print_info, print_single, print_success};
use crate::settings::{self, ConfigSource};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show the configuration file location
    Path,

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Path => path(ctx),
        ConfigCommand::Init(init) => {
            let path = settings::target_path(ctx.config.as_deref())?;
            settings::write_default(&path, init.force)?;
            if !ctx.quiet {
                print_success(&format!("wrote {}", path.display()));
            }
            Ok(())
        }
    }
}

fn show(ctx: &Context) -> Result<()> {
    let loaded = settings::load(ctx.config.as_deref())?;

    if !ctx.quiet {
        match &loaded.source {
            ConfigSource::File(path) => print_info(&format!("loaded from {}", path.display())),
            ConfigSource::Defaults => print_info("no config file, showing defaults"),
        }
    }

    match ctx.format {
        OutputFormat::Json => print_single(&loaded.config, ctx.format)?,
        _ => print!("{}", settings::to_toml(&loaded.config)?),
    }
    Ok(())
}

fn path(ctx: &Context) -> Result<()> {
    let path = settings::target_path(ctx.config.as_deref())?;
    println!("{}", path.display());
    if !ctx.quiet && !path.exists() {
        print_info("file does not exist yet; run `tenor config init`");
    }
    Ok(())
}
