use crate::commands::{arithmetic, configure, greet};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "A Rust-based arithmetic and greeting toolkit")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Greet(args) => {
                greet::handle_greet_command(&config, &args)?;
            }
            Commands::Add(args) => {
                arithmetic::handle_add_command(&config, &args)?;
            }
            Commands::Subtract(args) => {
                arithmetic::handle_subtract_command(&config, &args)?;
            }
            Commands::Multiply(args) => {
                arithmetic::handle_multiply_command(&config, &args)?;
            }
            Commands::Divide(args) => {
                arithmetic::handle_divide_command(&config, &args)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, args.command.clone())?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a greeting for the given name
    Greet(GreetArgs),

    /// Add two numbers
    Add(BinaryArgs),

    /// Subtract the second number from the first
    Subtract(BinaryArgs),

    /// Multiply two numbers
    Multiply(BinaryArgs),

    /// Divide the first number by the second
    Divide(BinaryArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct GreetArgs {
    #[arg(help = "Name to greet")]
    pub name: String,

    #[arg(short, long)]
    pub format: Option<ResultFormat>,
}

#[derive(Args)]
pub struct BinaryArgs {
    #[arg(help = "First operand", allow_hyphen_values = true)]
    pub a: f64,

    #[arg(help = "Second operand", allow_hyphen_values = true)]
    pub b: f64,

    #[arg(short, long)]
    pub format: Option<ResultFormat>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ResultFormat {
    Plain,
    Json,
}

impl ResultFormat {
    /// Pick the effective format: an explicit flag wins over the config
    /// default, which falls back to plain output.
    pub fn resolve(explicit: Option<ResultFormat>, config: &Config) -> ResultFormat {
        if let Some(format) = explicit {
            return format;
        }

        match config.general.format.as_deref() {
            Some("json") => ResultFormat::Json,
            _ => ResultFormat::Plain,
        }
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}
