use crate::config::Config;
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    // Pretty print the effective config as TOML, defaults included
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    // Convert to a JSON value and walk the dot path, e.g. "defaults.cycles"
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}
