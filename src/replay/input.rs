//! JSON-lines batch reader

use crate::progress::ProgressTable;
use crate::types::MetricRow;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

/// Counters for one input stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputStats {
    /// Lines parsed as a batch
    pub batches: usize,
    /// Rows the table accepted
    pub rows_applied: usize,
    /// Lines that were not a valid batch
    pub bad_lines: usize,
}

/// Parse one input line into a batch
///
/// Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_batch(line: &str) -> Result<Option<Vec<MetricRow>>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}

/// Feed every batch from `reader` into `progress` until end of input
///
/// A malformed line is logged and skipped; it does not touch the table.
/// With `pace`, the reader sleeps that long after each applied batch so a
/// recorded file plays back over time instead of all at once.
pub async fn read_batches<R>(
    reader: R,
    progress: Arc<ProgressTable>,
    pace: Option<Duration>,
) -> Result<InputStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut stats = InputStats::default();
    let mut lines = reader.lines();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;

        match parse_batch(&line) {
            Ok(Some(rows)) => {
                stats.batches += 1;
                stats.rows_applied += progress.update(&rows);
                if let Some(delay) = pace {
                    tokio::time::sleep(delay).await;
                }
            }
            Ok(None) => {}
            Err(e) => {
                stats.bad_lines += 1;
                warn!("Skipping input line {}: {}", line_number, e);
            }
        }
    }

    debug!(
        "Input finished: {} batches, {} rows applied, {} bad lines",
        stats.batches, stats.rows_applied, stats.bad_lines
    );
    Ok(stats)
}
