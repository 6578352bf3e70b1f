//! Configuration module
//!
//! Display and catalog settings for the progress table, loaded from TOML with
//! environment overrides. Every field has a default, so running without a
//! config file is normal.

mod defaults;
mod loading;
mod types;
mod validation;

pub use loading::{
    ConfigSource, REFRESH_ENV_VAR, apply_env_overrides, load_config, load_config_with_fallback,
};
pub use types::{CatalogConfig, Config, DisplayConfig};

// Re-export default functions for use in tests and other modules
pub use defaults::{refresh_interval, show_final_table, toggle_enabled};
