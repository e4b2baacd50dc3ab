use anyhow::Result;
use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use selector_shim::OutputFormat;

use crate::commands::utils;
use crate::errors::ShimError;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective settings
    Show {
        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Print the path of the settings file
    Path,

    /// Change a setting (quote_policy, format, strict)
    Set {
        /// Setting name
        key: String,

        /// New value
        value: String,
    },

    /// Restore the default settings
    Reset,
}

pub fn handle_config(command: ConfigCommands, config_dir: Option<PathBuf>) -> Result<()> {
    let manager = utils::config_manager(config_dir)?;
    let config_err = |e: anyhow::Error| ShimError::Config(format!("{:#}", e));

    match command {
        ConfigCommands::Show { format } => {
            let config = manager.load().map_err(config_err)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
                OutputFormat::Simple => {
                    println!("quote_policy = {:?}", config.quote_policy);
                    println!("format = {:?}", config.format);
                    println!("strict = {}", config.strict);
                }
            }
        }
        ConfigCommands::Path => {
            println!("{}", manager.path().display());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = manager.load().map_err(config_err)?;
            config.set(&key, &value).map_err(config_err)?;
            manager.save(&config).map_err(config_err)?;
            info!("Set {} = {}", key, value);
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "updated": key, "config": config }))?
            );
        }
        ConfigCommands::Reset => {
            let config = manager.reset().map_err(config_err)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "reset": true, "config": config }))?
            );
        }
    }
    Ok(())
}
