//! Configuration type definitions

use super::defaults;
use crate::types::{ConfigPath, RefreshIntervalMs};
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Live display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Event catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Live display settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Interval between redraws (milliseconds, or a string like "500ms")
    #[serde(default = "defaults::refresh_interval")]
    pub refresh_interval_ms: RefreshIntervalMs,
    /// Whether the space key collapses the table to a one-line hint
    #[serde(default = "defaults::toggle_enabled")]
    pub toggle_enabled: bool,
    /// Whether to print the static summary when input ends
    #[serde(default = "defaults::show_final_table")]
    pub show_final_table: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: defaults::refresh_interval(),
            toggle_enabled: defaults::toggle_enabled(),
            show_final_table: defaults::show_final_table(),
        }
    }
}

/// Event catalog settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CatalogConfig {
    /// Extra event definitions merged over the built-in set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<ConfigPath>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.refresh_interval_ms.get(), 250);
        assert!(config.display.toggle_enabled);
        assert!(config.display.show_final_table);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_partial_display_section() {
        let config: Config = toml::from_str(
            r#"
[display]
refresh_interval_ms = "1s"
toggle_enabled = false
"#,
        )
        .unwrap();

        assert_eq!(config.display.refresh_interval_ms.get(), 1000);
        assert!(!config.display.toggle_enabled);
        assert!(config.display.show_final_table);
    }

    #[test]
    fn test_catalog_path() {
        let config: Config = toml::from_str("[catalog]\npath = \"events.toml\"\n").unwrap();
        assert_eq!(
            config.catalog.path.as_ref().map(|p| p.as_str()),
            Some("events.toml")
        );

        assert!(toml::from_str::<Config>("[catalog]\npath = \"  \"\n").is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut config = Config::default();
        config.display.toggle_enabled = false;

        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
