//! Persistent settings for the command line tool

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::selector::{QuotePolicy, TransformOptions};
use crate::types::OutputFormat;

/// Overrides the directory holding `config.json`
pub const CONFIG_DIR_ENV: &str = "SELECTOR_SHIM_HOME";

const CONFIG_FILE: &str = "config.json";

/// User settings, all optional on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How double quotes inside text literals are emitted
    pub quote_policy: QuotePolicy,
    /// Default output format
    pub format: OutputFormat,
    /// Treat malformed selectors as errors instead of passing them through
    pub strict: bool,
}

impl Config {
    /// Update a single setting from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "quote_policy" => {
                self.quote_policy = QuotePolicy::from_str(value, true)
                    .map_err(|_| anyhow::anyhow!("Invalid quote policy '{}'. Use escape or verbatim", value))?;
            }
            "format" => {
                self.format = OutputFormat::from_str(value, true)
                    .map_err(|_| anyhow::anyhow!("Invalid format '{}'. Use json or simple", value))?;
            }
            "strict" => {
                self.strict = value
                    .parse::<bool>()
                    .map_err(|_| anyhow::anyhow!("Invalid value for strict '{}'. Use true or false", value))?;
            }
            _ => anyhow::bail!(
                "Unknown setting '{}'. Valid settings: quote_policy, format, strict",
                key
            ),
        }
        Ok(())
    }

    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            quote_policy: self.quote_policy,
        }
    }
}

/// Loads and stores the settings file
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Use `$SELECTOR_SHIM_HOME` if set, otherwise `~/.selector-shim`
    pub fn new() -> Result<Self> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(Self::with_dir(dir));
        }

        let home_dir = dirs::home_dir().context("Unable to determine home directory")?;
        Ok(Self::with_dir(home_dir.join(".selector-shim")))
    }

    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        ConfigManager {
            config_dir: config_dir.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Read the settings file, falling back to defaults when it does not exist
    pub fn load(&self) -> Result<Config> {
        let path = self.path();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let config_json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&config_json)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        fs::create_dir_all(&self.config_dir).with_context(|| {
            format!("Failed to create config directory: {}", self.config_dir.display())
        })?;

        let path = self.path();
        let config_json = serde_json::to_string_pretty(config)?;
        fs::write(&path, config_json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Remove the settings file and return the defaults
    pub fn reset(&self) -> Result<Config> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
            info!("Removed config file {}", path.display());
        }
        Ok(Config::default())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
