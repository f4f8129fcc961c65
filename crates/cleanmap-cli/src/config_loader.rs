//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use cleanmap_core::config::{CliConfigOverrides, LayeredConfig, DEFAULT_CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Load layered configuration: defaults, then file, then environment.
///
/// An explicitly given path must exist; the default `cleanmap.toml` is optional.
pub fn load_config(explicit_path: Option<&Path>) -> Result<LayeredConfig> {
    let config = match explicit_path {
        Some(path) => LayeredConfig::with_defaults()
            .load_from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => LayeredConfig::with_defaults()
            .load_from_optional_file(default_config_path())
            .context("Failed to load configuration file")?,
    };

    Ok(config.load_from_env())
}

/// Load layered configuration with CLI overrides
pub fn load_config_with_overrides(
    explicit_path: Option<&Path>,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let mut config = load_config(explicit_path)?;
    config.update_from_cli(overrides);
    Ok(config)
}

fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}
