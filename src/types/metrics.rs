//! Metric row vocabulary shared by ingest, the catalog and rendering

use super::validated::ValidationError;
use crate::constants::table::THREAD_GROUP_ID;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How a row's value combines with what a series already holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// The row carries a delta that is added to the running total
    Increment,
    /// The row carries an absolute reading that replaces the total
    Gauge,
}

impl MetricKind {
    /// Wire code used by the profile events stream
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Increment => 1,
            Self::Gauge => 2,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Gauge => "gauge",
        }
    }
}

impl TryFrom<i64> for MetricKind {
    type Error = ValidationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Increment),
            2 => Ok(Self::Gauge),
            other => Err(ValidationError::InvalidMetricKind(other)),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either `"increment"`/`"gauge"` or the wire codes 1/2
impl<'de> Deserialize<'de> for MetricKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(i64),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Code(code) => Self::try_from(code).map_err(serde::de::Error::custom),
            Repr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "increment" => Ok(Self::Increment),
                "gauge" => Ok(Self::Gauge),
                _ => Err(serde::de::Error::unknown_variant(
                    &name,
                    &["increment", "gauge"],
                )),
            },
        }
    }
}

/// Declared unit of an event's value, as resolved from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Number,
    Bytes,
    Nanoseconds,
    Microseconds,
    Milliseconds,
}

impl ValueType {
    /// Number of this type's units in one second, for time-based types
    #[must_use]
    pub const fn units_per_second(&self) -> Option<f64> {
        match self {
            Self::Milliseconds => Some(1e3),
            Self::Microseconds => Some(1e6),
            Self::Nanoseconds => Some(1e9),
            Self::Number | Self::Bytes => None,
        }
    }

    #[must_use]
    pub const fn is_time(&self) -> bool {
        self.units_per_second().is_some()
    }
}

/// One row of a metric update batch
///
/// `thread_id` 0 marks the whole-query aggregate for `host_name`; other
/// thread ids carry per-thread detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRow {
    #[serde(default)]
    pub thread_id: u64,
    pub name: String,
    pub host_name: String,
    pub value: i64,
    pub kind: MetricKind,
}

impl MetricRow {
    /// Create a whole-query row for one host
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        host_name: impl Into<String>,
        value: i64,
        kind: MetricKind,
    ) -> Self {
        Self {
            thread_id: THREAD_GROUP_ID,
            name: name.into(),
            host_name: host_name.into(),
            value,
            kind,
        }
    }

    /// Same row attributed to a specific thread
    #[must_use]
    pub fn with_thread(mut self, thread_id: u64) -> Self {
        self.thread_id = thread_id;
        self
    }

    /// Whether this row is the per-host aggregate that the table tracks
    #[must_use]
    #[inline]
    pub fn is_thread_group(&self) -> bool {
        self.thread_id == THREAD_GROUP_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_kind_codes() {
        assert_eq!(MetricKind::try_from(1), Ok(MetricKind::Increment));
        assert_eq!(MetricKind::try_from(2), Ok(MetricKind::Gauge));
        assert_eq!(
            MetricKind::try_from(0),
            Err(ValidationError::InvalidMetricKind(0))
        );
        assert_eq!(MetricKind::Gauge.code(), 2);
    }

    #[test]
    fn test_metric_kind_deserialize_forms() {
        let by_name: MetricKind = serde_json::from_str("\"gauge\"").unwrap();
        let by_upper: MetricKind = serde_json::from_str("\"INCREMENT\"").unwrap();
        let by_code: MetricKind = serde_json::from_str("1").unwrap();

        assert_eq!(by_name, MetricKind::Gauge);
        assert_eq!(by_upper, MetricKind::Increment);
        assert_eq!(by_code, MetricKind::Increment);

        assert!(serde_json::from_str::<MetricKind>("3").is_err());
        assert!(serde_json::from_str::<MetricKind>("\"counter\"").is_err());
    }

    #[test]
    fn test_value_type_units() {
        assert_eq!(ValueType::Milliseconds.units_per_second(), Some(1e3));
        assert_eq!(ValueType::Microseconds.units_per_second(), Some(1e6));
        assert_eq!(ValueType::Nanoseconds.units_per_second(), Some(1e9));
        assert!(!ValueType::Bytes.is_time());
        assert!(!ValueType::Number.is_time());
    }

    #[test]
    fn test_metric_row_deserialize_defaults_thread() {
        let row: MetricRow = serde_json::from_str(
            r#"{"name":"SelectedRows","host_name":"h1","value":10,"kind":"increment"}"#,
        )
        .unwrap();

        assert!(row.is_thread_group());
        assert_eq!(row, MetricRow::new("SelectedRows", "h1", 10, MetricKind::Increment));
    }

    #[test]
    fn test_metric_row_with_thread() {
        let row = MetricRow::new("Query", "h1", 1, MetricKind::Increment).with_thread(42);
        assert_eq!(row.thread_id, 42);
        assert!(!row.is_thread_group());
    }
}
