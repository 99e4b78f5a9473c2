use crate::cycle::clock::parse_wall_clock;
use crate::cycle::schedule::Cycles;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DefaultsConfig {
    /// Cycle count used when --cycles is not given (4, 5 or 6)
    #[serde(default = "default_cycles")]
    pub cycles: u8,
    /// Prefill for the interactive time prompt (HH:MM)
    #[serde(default = "default_time")]
    pub time: String,
}

fn default_cycles() -> u8 {
    5
}

fn default_time() -> String {
    "07:00".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            cycles: default_cycles(),
            time: default_time(),
        }
    }
}

impl DefaultsConfig {
    /// Validate the defaults section
    pub fn validate(&self) -> Result<()> {
        Cycles::from_count(self.cycles).context("Invalid 'defaults.cycles' in config")?;
        parse_wall_clock(&self.time).context("Invalid 'defaults.time' in config")?;
        Ok(())
    }

    /// Default cycle count as a checked `Cycles` value. Only call after
    /// `validate`, or handle the error.
    pub fn cycles(&self) -> Result<Cycles> {
        Ok(Cycles::from_count(self.cycles)?)
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.defaults.validate()?;
        Ok(())
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Load the effective configuration. A missing config file is the common
/// case and yields the built-in defaults; a file that exists but does not
/// parse or validate is an error.
pub fn load() -> Result<Config> {
    let Some(config_path) = crate::platform::config_path() else {
        return Ok(Config::default());
    };

    let config = load_from_path(&config_path)?;
    config.validate()?;

    Ok(config)
}
