//! Constants used throughout the progress table
//!
//! This module centralizes the timing windows, column geometry and text
//! fragments shared by ingest and rendering.

/// Rate smoothing and freshness windows, in seconds of table time
pub mod series {
    /// Idle gap after which the snapshot history is re-seeded
    pub const RESET_AFTER_SECS: f64 = 0.5;

    /// Minimum age of the current snapshot before it rotates into `prev`
    pub const ROTATE_AFTER_SECS: f64 = 0.5;

    /// Offset of the synthetic baseline written on reset
    ///
    /// Always non-zero, so `cur.time - prev.time` can never be zero.
    pub const BASELINE_OFFSET_SECS: f64 = 1.0;

    /// A series without an update for this long reports a zero rate
    pub const RATE_STALE_AFTER_SECS: f64 = 0.5;

    /// A series without an update for longer than this is hidden
    pub const FRESHNESS_THRESHOLD_SECS: f64 = 3.0;

    const _BASELINE_NON_ZERO: () = assert!(BASELINE_OFFSET_SECS > 0.0);
}

/// Ingest filtering and bookkeeping
pub mod table {
    /// Thread id carrying the whole-query aggregate for one host
    ///
    /// Rows with any other thread id are per-thread detail and are not tracked.
    pub const THREAD_GROUP_ID: u64 = 0;

    /// Name column width before the first batch is ingested
    pub const INITIAL_NAME_COLUMN_WIDTH: usize = 20;
}

/// Column headers and fixed widths
pub mod columns {
    pub const EVENT_NAME: &str = "Event name";
    pub const VALUE: &str = "Value";
    pub const PROGRESS: &str = "Progress";
    pub const DOCUMENTATION: &str = "Documentation";

    pub const VALUE_WIDTH: usize = 20;
    pub const PROGRESS_WIDTH: usize = 20;

    /// The documentation column is only drawn when its header fits
    pub const DOCUMENTATION_MIN_WIDTH: usize = DOCUMENTATION.len();
}

/// UI text constants
pub mod text {
    pub const TOGGLE_HINT: &str = "Press the space key to toggle the display of the progress table.";
    pub const ELLIPSIS: &str = "…";
    pub const RATE_SUFFIX: &str = "/s";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_outlasts_rate_window() {
        assert!(series::FRESHNESS_THRESHOLD_SECS > series::RATE_STALE_AFTER_SECS);
    }

    #[test]
    fn test_documentation_min_width_matches_header() {
        assert_eq!(columns::DOCUMENTATION_MIN_WIDTH, 13);
    }

    #[test]
    fn test_initial_name_width_fits_header() {
        assert!(table::INITIAL_NAME_COLUMN_WIDTH > columns::EVENT_NAME.len());
    }
}
