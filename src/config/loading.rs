//! Configuration loading from files and environment variables
//!
//! Environment variables take precedence over the config file so a wrapper
//! script can tune the display without editing it.

use anyhow::Result;
use std::path::Path;

use super::types::Config;
use crate::types::RefreshIntervalMs;

/// Overrides `display.refresh_interval_ms`
pub const REFRESH_ENV_VAR: &str = "PROGRESS_TABLE_REFRESH_MS";

/// Where the effective configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from the given config file
    File,
    /// File absent, built-in defaults used
    Default,
}

impl ConfigSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::File => "config file",
            Self::Default => "defaults",
        }
    }
}

/// Load configuration from a TOML file and validate it
///
/// Environment overrides are not applied here; see [`apply_env_overrides`].
pub fn load_config(config_path: &Path) -> Result<Config> {
    let config_content = std::fs::read_to_string(config_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read config file '{}': {}",
            config_path.display(),
            e
        )
    })?;

    let config: Config = toml::from_str(&config_content).map_err(|e| {
        anyhow::anyhow!(
            "Failed to parse config file '{}': {}",
            config_path.display(),
            e
        )
    })?;

    config.validate()?;

    Ok(config)
}

/// Load the config file if it exists, otherwise fall back to defaults
///
/// A file that exists but cannot be read or parsed is still an error.
/// Environment overrides are applied in both cases.
pub fn load_config_with_fallback(config_path: &Path) -> Result<(Config, ConfigSource)> {
    let (mut config, source) = if config_path.exists() {
        (load_config(config_path)?, ConfigSource::File)
    } else {
        tracing::debug!(
            "Config file '{}' not found, using defaults",
            config_path.display()
        );
        (Config::default(), ConfigSource::Default)
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config.validate()?;

    Ok((config, source))
}

/// Apply environment overrides using `lookup` to read variables
///
/// Unparseable values are ignored with a warning.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let Some(raw) = lookup(REFRESH_ENV_VAR) else {
        return;
    };

    match raw.parse::<RefreshIntervalMs>() {
        Ok(interval) => {
            tracing::info!(
                "Using refresh interval {} from {} (overriding config)",
                interval,
                REFRESH_ENV_VAR
            );
            config.display.refresh_interval_ms = interval;
        }
        Err(e) => {
            tracing::warn!("Ignoring {}={:?}: {}", REFRESH_ENV_VAR, raw, e);
        }
    }
}
