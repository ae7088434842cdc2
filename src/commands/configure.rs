use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::output::{OutputStyle, print_success};
use anyhow::Result;

pub fn handle_config_command(
    mut config: Config,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => handle_path_command(),
        Some(ConfigCommands::Reset) => handle_reset_command(&mut config),
        None => handle_config_help(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    println!("⚙️  {}", OutputStyle::title("Tally Configuration"));
    println!("======================");

    println!("{}", OutputStyle::header("General:"));
    println!("  {}: {}", OutputStyle::label("Precision"), config.general.precision);
    println!("  {}: {}", OutputStyle::label("Color"), config.general.color);
    if let Some(format) = &config.general.format {
        println!("  {}: {}", OutputStyle::label("Default format"), format);
    }

    Ok(())
}

fn handle_path_command() -> Result<()> {
    println!("{}", Config::config_file_path().display());
    Ok(())
}

fn handle_config_help() -> Result<()> {
    println!("⚙️  {}", OutputStyle::title("Configuration Management"));
    println!("==========================");
    println!("Available configuration commands:");
    println!("  tally config show     - Show current configuration");
    println!("  tally config path     - Print the configuration file location");
    println!("  tally config reset    - Reset configuration to defaults");
    println!();
    println!(
        "{}",
        OutputStyle::muted(&format!(
            "Configuration file location: {}",
            Config::config_file_path().display()
        ))
    );
    Ok(())
}

fn handle_reset_command(config: &mut Config) -> Result<()> {
    *config = Config::default();
    config.save()?;
    print_success("Configuration reset to defaults!");
    Ok(())
}
