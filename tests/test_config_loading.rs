//! Tests for config/loading.rs module
//!
//! Tests file loading and fallback logic.

use anyhow::Result;
use progress_table::{EventCatalog, StaticCatalog};
use progress_table::config::{ConfigSource, load_config, load_config_with_fallback};
use progress_table::types::ValueType;
use std::io::Write;
use tempfile::NamedTempFile;

/// Test loading from TOML file
#[test]
fn test_load_config_from_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;

    let config_content = r#"
[display]
refresh_interval_ms = 500
show_final_table = false

[catalog]
path = "/etc/progress-table/events.toml"
"#;
    temp_file.write_all(config_content.as_bytes())?;
    temp_file.flush()?;

    let config = load_config(temp_file.path())?;

    assert_eq!(config.display.refresh_interval_ms.get(), 500);
    assert!(config.display.toggle_enabled);
    assert!(!config.display.show_final_table);
    assert_eq!(
        config.catalog.path.as_ref().map(|p| p.as_str()),
        Some("/etc/progress-table/events.toml")
    );

    Ok(())
}

/// Test invalid TOML returns error
#[test]
fn test_invalid_toml_returns_error() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;

    let invalid_content = "this is not valid TOML [[[";
    temp_file.write_all(invalid_content.as_bytes())?;
    temp_file.flush()?;

    let result = load_config(temp_file.path());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to parse"));

    Ok(())
}

/// Test zero refresh interval is rejected at parse time
#[test]
fn test_zero_refresh_rejected() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"[display]\nrefresh_interval_ms = 0\n")?;
    temp_file.flush()?;

    assert!(load_config(temp_file.path()).is_err());

    Ok(())
}

/// Test out-of-range refresh interval fails validation
#[test]
fn test_slow_refresh_fails_validation() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"[display]\nrefresh_interval_ms = \"30s\"\n")?;
    temp_file.flush()?;

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("refresh_interval_ms"));

    Ok(())
}

/// Test missing file falls back to defaults
#[test]
fn test_fallback_uses_defaults_when_missing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent.toml");

    let (config, source) = load_config_with_fallback(&path)?;

    assert_eq!(source, ConfigSource::Default);
    assert!(config.display.toggle_enabled);
    assert!(config.catalog.path.is_none());

    Ok(())
}

/// Test an existing but broken file is not silently replaced by defaults
#[test]
fn test_fallback_propagates_parse_errors() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"[display\n")?;
    temp_file.flush()?;

    assert!(load_config_with_fallback(temp_file.path()).is_err());

    Ok(())
}

/// Test existing file is reported as the source
#[test]
fn test_fallback_reads_existing_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"[display]\ntoggle_enabled = false\n")?;
    temp_file.flush()?;

    let (config, source) = load_config_with_fallback(temp_file.path())?;

    assert_eq!(source, ConfigSource::File);
    assert!(!config.display.toggle_enabled);

    Ok(())
}

/// Test catalog file merges over the builtin set
#[test]
fn test_catalog_file_extends_builtin() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[events.ReplicatedFetchBytes]
value_type = "bytes"
documentation = "Bytes fetched from replicas"

[events.Query]
value_type = "number"
documentation = "Queries started"
"#,
    )?;
    temp_file.flush()?;

    let mut catalog = StaticCatalog::builtin();
    let before = catalog.len();
    let loaded = catalog.extend_from_file(temp_file.path())?;

    assert_eq!(loaded, 2);
    assert_eq!(catalog.len(), before + 1);

    let info = catalog.describe("ReplicatedFetchBytes").unwrap();
    assert_eq!(info.value_type, ValueType::Bytes);
    assert_eq!(catalog.describe("Query").unwrap().documentation, "Queries started");

    Ok(())
}

/// Test broken catalog file reports the path
#[test]
fn test_catalog_parse_error_names_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"[events.X]\nvalue_type = \"parsecs\"\n")?;
    temp_file.flush()?;

    let err = StaticCatalog::new()
        .extend_from_file(temp_file.path())
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Failed to parse catalog file"));
    assert!(message.contains(&temp_file.path().display().to_string()));

    Ok(())
}
