// Binary entry point - import modules directly
mod calculator;
mod cli;
mod commands;
mod config;
mod error;
mod output;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::Config;
use error::{AppError, report_error};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    // Execute command, reporting domain errors with styling
    if let Err(err) = cli.command.execute(config) {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => report_error(app_err),
            None => eprintln!("❌ {}", err),
        }
        std::process::exit(1);
    }

    Ok(())
}
