//! Metric state: smoothed per-host series, per-event aggregates and the
//! most-recently-updated-first table that owns them.
//!
//! Everything here works on an explicit `now` in seconds, so the whole state
//! machine can be driven deterministically. The shared, clock-owning wrapper
//! lives in [`crate::progress`].

mod aggregate;
mod series;
mod snapshot;
mod stopwatch;
mod table;

pub use aggregate::HostAggregate;
pub use series::MetricSeries;
pub use snapshot::Snapshot;
pub use stopwatch::Stopwatch;
pub use table::{Entries, EntryId, MetricTable, TableEntry};
