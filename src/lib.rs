//! Live, terminal-rendered progress table for streamed per-host metrics
//!
//! Batches of `(thread, event, host, value, kind)` rows go in through
//! [`ProgressTable::update`]; [`ProgressTable::write_table`] redraws a table of
//! totals and smoothed per-second rates in place, most recently updated
//! events first, and [`ProgressTable::write_final_table`] prints a plain
//! summary once the work is done.
//!
//! ```no_run
//! use progress_table::{MetricKind, MetricRow, ProgressTable, StaticCatalog};
//! use std::sync::Arc;
//!
//! let table = ProgressTable::new(Arc::new(StaticCatalog::builtin()));
//! table.update(&[MetricRow::new("SelectedRows", "host-1", 1000, MetricKind::Increment)]);
//!
//! let mut stderr = std::io::stderr();
//! table.write_table(&mut stderr, true, true)?;
//! table.clear_table_output(&mut stderr)?;
//! table.write_final_table(&mut std::io::stdout())?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod args;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod formatting;
pub mod logging;
pub mod metrics;
pub mod progress;
pub mod render;
pub mod replay;
pub mod types;

pub use args::{Args, InputSource};
pub use catalog::{CatalogError, EventCatalog, EventInfo, StaticCatalog};
pub use config::{Config, ConfigSource, load_config, load_config_with_fallback};
pub use formatting::format_readable_value;
pub use logging::init_logging;
pub use metrics::{HostAggregate, MetricSeries, MetricTable};
pub use progress::ProgressTable;
pub use render::{CrosstermTerminal, FixedWidth, TerminalSize};
pub use replay::{ReplayOptions, ReplayReport, StopReason, run_replay};
pub use types::{MetricKind, MetricRow, ValueType};
