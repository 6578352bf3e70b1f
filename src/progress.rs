//! Thread-safe progress table facade
//!
//! [`ProgressTable`] owns the metric table, the elapsed-time clock, the event
//! catalog and the terminal width source behind one lock. Batches can arrive
//! from one task while another redraws; each call samples the clock once and
//! holds the lock for its whole duration. Frames are rendered into a buffer
//! and written out with a single `write_all` before the lock is released, so
//! frames from concurrent callers never interleave.

use crate::catalog::EventCatalog;
use crate::metrics::{MetricTable, Stopwatch};
use crate::render::{self, CrosstermTerminal, TerminalSize};
use crate::types::MetricRow;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
struct TableState {
    table: MetricTable,
    stopwatch: Stopwatch,
}

/// Live per-event progress table shared between the input and draw paths
pub struct ProgressTable {
    state: Mutex<TableState>,
    catalog: Arc<dyn EventCatalog>,
    terminal: Box<dyn TerminalSize>,
}

impl std::fmt::Debug for ProgressTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTable")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ProgressTable {
    /// Table sized to the controlling terminal
    #[must_use]
    pub fn new(catalog: Arc<dyn EventCatalog>) -> Self {
        Self::with_terminal(catalog, CrosstermTerminal)
    }

    /// Table with an explicit width source
    #[must_use]
    pub fn with_terminal(
        catalog: Arc<dyn EventCatalog>,
        terminal: impl TerminalSize + 'static,
    ) -> Self {
        Self {
            state: Mutex::new(TableState::default()),
            catalog,
            terminal: Box::new(terminal),
        }
    }

    /// Apply one batch of rows; returns how many rows were applied
    pub fn update(&self, rows: &[MetricRow]) -> usize {
        let mut state = self.lock();
        let now = state.stopwatch.elapsed_secs();
        let applied = state.table.ingest(rows, self.catalog.as_ref(), now);
        debug!(
            "Applied {}/{} rows at {:.3}s, {} events tracked",
            applied,
            rows.len(),
            now,
            state.table.len()
        );
        applied
    }

    /// Draw the live table, or the toggle hint when it is collapsed
    ///
    /// The hint is only shown when toggling is enabled; a hidden table with
    /// toggling disabled is drawn normally.
    pub fn write_table<W: Write>(
        &self,
        out: &mut W,
        show_table: bool,
        toggle_enabled: bool,
    ) -> io::Result<()> {
        let width = usize::from(self.terminal.width());
        let mut state = self.lock();
        let frame = if !show_table && toggle_enabled {
            render::render_hidden()
        } else {
            let now = state.stopwatch.elapsed_secs();
            render::render_table(&mut state.table, now, width)
        };
        emit(out, &frame)
    }

    /// Erase the live table from the terminal and show the cursor again
    pub fn clear_table_output<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let _state = self.lock();
        emit(out, &render::render_clear())
    }

    /// Write the static summary of every event seen since the last reset
    pub fn write_final_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let width = usize::from(self.terminal.width());
        let state = self.lock();
        emit(out, &render::render_final(&state.table, width))
    }

    /// Forget all events and restart the clock
    ///
    /// The name column keeps its width.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.table.reset();
        state.stopwatch.restart();
        debug!("Progress table reset");
    }

    /// Number of tracked events
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().table.is_empty()
    }

    /// Seconds since creation or the last reset
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.lock().stopwatch.elapsed_secs()
    }

    /// Run `f` against the table as of now
    pub fn inspect<R>(&self, f: impl FnOnce(&MetricTable, f64) -> R) -> R {
        let state = self.lock();
        f(&state.table, state.stopwatch.elapsed_secs())
    }

    fn lock(&self) -> MutexGuard<'_, TableState> {
        // A panic mid-update leaves at worst one half-applied batch behind
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn emit<W: Write>(out: &mut W, frame: &[u8]) -> io::Result<()> {
    if frame.is_empty() {
        return Ok(());
    }
    out.write_all(frame)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EventInfo, StaticCatalog};
    use crate::render::FixedWidth;
    use crate::types::{MetricKind, ValueType};

    fn table(width: u16) -> ProgressTable {
        let mut catalog = StaticCatalog::new();
        catalog.insert("Rows", EventInfo::new(ValueType::Number, "Rows read"));
        ProgressTable::with_terminal(Arc::new(catalog), FixedWidth(width))
    }

    #[test]
    fn test_update_counts_applied_rows() {
        let progress = table(120);
        let rows = [
            MetricRow::new("Rows", "h1", 3, MetricKind::Increment),
            MetricRow::new("Unknown", "h1", 3, MetricKind::Increment),
            MetricRow::new("Rows", "h1", 3, MetricKind::Increment).with_thread(7),
        ];
        assert_eq!(progress.update(&rows), 1);
        assert_eq!(progress.len(), 1);
    }

    #[test]
    fn test_hidden_mode_ignores_table() {
        let progress = table(120);
        let mut out = Vec::new();
        progress.write_table(&mut out, false, true).unwrap();
        assert_eq!(out, render::render_hidden());
    }

    #[test]
    fn test_hidden_without_toggle_draws_table() {
        let progress = table(120);
        progress.update(&[MetricRow::new("Rows", "h1", 3, MetricKind::Increment)]);

        let mut out = Vec::new();
        progress.write_table(&mut out, false, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Rows"));
    }

    #[test]
    fn test_reset() {
        let progress = table(120);
        progress.update(&[MetricRow::new("Rows", "h1", 3, MetricKind::Increment)]);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let before = progress.elapsed_secs();

        progress.reset();
        assert!(progress.is_empty());
        assert!(progress.elapsed_secs() < before);

        let mut out = Vec::new();
        progress.write_final_table(&mut out).unwrap();
        assert!(out.is_empty());
    }

    /// Records whether the table lock was held while bytes were written
    struct LockCheckingWriter<'a> {
        progress: &'a ProgressTable,
        writes: usize,
        writes_under_lock: usize,
    }

    impl<'a> LockCheckingWriter<'a> {
        fn new(progress: &'a ProgressTable) -> Self {
            Self {
                progress,
                writes: 0,
                writes_under_lock: 0,
            }
        }
    }

    impl Write for LockCheckingWriter<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            if matches!(
                self.progress.state.try_lock(),
                Err(std::sync::TryLockError::WouldBlock)
            ) {
                self.writes_under_lock += 1;
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_frames_written_while_locked() {
        let progress = table(120);
        progress.update(&[MetricRow::new("Rows", "h1", 3, MetricKind::Increment)]);

        let mut out = LockCheckingWriter::new(&progress);
        progress.write_table(&mut out, true, true).unwrap();
        progress.write_table(&mut out, false, true).unwrap();
        progress.clear_table_output(&mut out).unwrap();
        progress.write_final_table(&mut out).unwrap();

        assert_eq!(out.writes, 4);
        assert_eq!(out.writes_under_lock, 4);
    }

    #[test]
    fn test_lock_recovers_from_poison() {
        let progress = Arc::new(table(120));
        let poisoner = Arc::clone(&progress);
        let _ = std::thread::spawn(move || {
            poisoner.inspect(|_, _| panic!("boom"));
        })
        .join();

        assert_eq!(
            progress.update(&[MetricRow::new("Rows", "h1", 1, MetricKind::Increment)]),
            1
        );
    }
}
