//! Core domain types
//!
//! Row vocabulary for the metric stream plus validated configuration values.

pub mod config;
pub mod metrics;
pub mod validated;

pub use config::{RefreshIntervalMs, TerminalColumns};
pub use metrics::{MetricKind, MetricRow, ValueType};
pub use validated::{ConfigPath, EventName, ValidationError};
