//! Validated string types that enforce invariants at construction time

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validation errors for domain types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("event name cannot be empty or whitespace")]
    EmptyEventName,

    #[error("config path cannot be empty or whitespace")]
    EmptyConfigPath,

    #[error("unknown metric kind code: {0} (expected 1 = increment or 2 = gauge)")]
    InvalidMetricKind(i64),
}

/// Macro to generate validated string newtypes.
///
/// Each type gets:
/// - A `new()` constructor that validates
/// - `as_str()` getter
/// - `AsRef<str>`, `Deref`, `Display`, `TryFrom<String>` impls
/// - Serde `Serialize` and `Deserialize` with validation
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident(String) {
            validation: |$s_param:ident| $validation:expr,
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        $vis struct $name(String);

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), " after validation")]
            pub fn new($s_param: String) -> Result<Self, ValidationError> {
                let validate = || $validation;
                validate()?;
                Ok(Self($s_param))
            }

            #[doc = concat!("Get the ", stringify!($name), " as a string slice")]
            #[must_use]
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[doc = concat!("Consume the ", stringify!($name), " and return the inner string")]
            #[must_use]
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from($s_param: String) -> Result<Self, Self::Error> {
                Self::new($s_param)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

validated_string! {
    /// A profile event name as it appears in the catalog
    ///
    /// # Examples
    /// ```
    /// use progress_table::types::EventName;
    ///
    /// let name = EventName::new("SelectedRows".to_string()).unwrap();
    /// assert_eq!(name.as_str(), "SelectedRows");
    ///
    /// assert!(EventName::new("  ".to_string()).is_err());
    /// ```
    pub struct EventName(String) {
        validation: |s| {
            if s.trim().is_empty() {
                Err(ValidationError::EmptyEventName)
            } else {
                Ok(())
            }
        },
    }
}

validated_string! {
    /// Path to a configuration or catalog file
    pub struct ConfigPath(String) {
        validation: |s| {
            if s.trim().is_empty() {
                Err(ValidationError::EmptyConfigPath)
            } else {
                Ok(())
            }
        },
    }
}

impl ConfigPath {
    /// View as a filesystem path
    #[must_use]
    pub fn as_path(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl std::str::FromStr for ConfigPath {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name_valid() {
        let name = EventName::new("NetworkReceiveBytes".to_string()).unwrap();
        assert_eq!(name.as_str(), "NetworkReceiveBytes");
        assert_eq!(name.to_string(), "NetworkReceiveBytes");
    }

    #[test]
    fn test_event_name_rejects_blank() {
        assert_eq!(
            EventName::new(String::new()),
            Err(ValidationError::EmptyEventName)
        );
        assert_eq!(
            EventName::new("\t ".to_string()),
            Err(ValidationError::EmptyEventName)
        );
    }

    #[test]
    fn test_event_name_deserialize_validates() {
        let ok: Result<EventName, _> = serde_json::from_str("\"Query\"");
        assert!(ok.is_ok());

        let err: Result<EventName, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_config_path_from_str() {
        let path: ConfigPath = "config.toml".parse().unwrap();
        assert_eq!(path.as_path(), std::path::Path::new("config.toml"));
        assert!("".parse::<ConfigPath>().is_err());
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::InvalidMetricKind(7).to_string(),
            "unknown metric kind code: 7 (expected 1 = increment or 2 = gauge)"
        );
    }
}
