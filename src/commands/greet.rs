use crate::cli::{GreetArgs, ResultFormat};
use crate::config::Config;
use crate::utils;
use anyhow::{Context, Result};

pub fn handle_greet_command(config: &Config, args: &GreetArgs) -> Result<()> {
    let message = utils::greet(&args.name);

    match ResultFormat::resolve(args.format, config) {
        ResultFormat::Plain => println!("{}", message),
        ResultFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "operation": "greet",
                "name": args.name,
                "result": message,
            }))
            .context("Failed to serialize greeting to JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}
