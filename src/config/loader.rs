use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::{info, trace};

pub const DEFAULT_CONFIG_FILE: &str = "siacentral.toml";
pub const ENV_PREFIX: &str = "SIACENTRAL";

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Loads the TOML file at `path`, layered with `SIACENTRAL_` environment
/// variables and then `overrides` (dotted key, value).
///
/// The file is created from the built-in defaults when it does not exist.
pub fn load_configuration(path: &Path, overrides: &[(String, String)]) -> Result<Config> {
    if !path.exists() {
        write_config_to(path, get_default_config()).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    let cfg = Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
        .build()
        .context("Could not build initial config")?;

    if overrides.is_empty() {
        return Ok(cfg);
    }

    let mut builder = Config::builder().add_source(cfg);
    for (key, value) in overrides {
        trace!("Set override: ({key}, {value})");
        builder = builder
            .set_override(key.as_str(), value.as_str())
            .context("Could not override config property")?;
    }

    builder.build().context("Could not build final config")
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}
