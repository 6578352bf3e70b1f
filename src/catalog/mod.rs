//! Event catalog: resolves event names to value types and documentation
//!
//! The table only tracks events the catalog knows. Unknown names are not an
//! error, since the event source is allowed to run ahead of the catalog.
//!
//! Extra events can be loaded from TOML:
//!
//! ```toml
//! [events.MyCustomBytes]
//! value_type = "bytes"
//! documentation = "Bytes written by my custom step"
//! ```

mod builtin;

use crate::types::{EventName, ValueType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What the catalog knows about one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    pub value_type: ValueType,
    #[serde(default)]
    pub documentation: String,
}

impl EventInfo {
    #[must_use]
    pub fn new(value_type: ValueType, documentation: impl Into<String>) -> Self {
        Self {
            value_type,
            documentation: documentation.into(),
        }
    }
}

/// Name → description lookup used by ingest
pub trait EventCatalog: Send + Sync {
    /// Describe `name`, or `None` if the event is unknown
    fn describe(&self, name: &str) -> Option<&EventInfo>;
}

/// Errors loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk catalog layout
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    events: BTreeMap<EventName, EventInfo>,
}

/// In-memory catalog backed by a hash map
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    events: HashMap<String, EventInfo>,
}

impl StaticCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with common query profile events
    #[must_use]
    pub fn builtin() -> Self {
        let events = builtin::EVENTS
            .iter()
            .map(|&(name, value_type, doc)| (name.to_string(), EventInfo::new(value_type, doc)))
            .collect();
        Self { events }
    }

    /// Add or replace one event
    pub fn insert(&mut self, name: impl Into<String>, info: EventInfo) {
        self.events.insert(name.into(), info);
    }

    /// Parse catalog TOML and merge it in, replacing events with the same name
    ///
    /// Returns the number of events read.
    pub fn extend_from_toml(&mut self, content: &str) -> Result<usize, toml::de::Error> {
        let file: CatalogFile = toml::from_str(content)?;
        let count = file.events.len();
        self.events.extend(
            file.events
                .into_iter()
                .map(|(name, info)| (name.into_inner(), info)),
        );
        Ok(count)
    }

    /// Read a catalog file and merge it in
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let count = self
            .extend_from_toml(&content)
            .map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!("Loaded {} event definitions from {}", count, path.display());
        Ok(count)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventCatalog for StaticCatalog {
    fn describe(&self, name: &str) -> Option<&EventInfo> {
        self.events.get(name)
    }
}
