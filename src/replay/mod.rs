//! Replay driver: feeds recorded or piped batches into a live table
//!
//! A reader task applies batches as they arrive while the main loop redraws
//! the table on a fixed tick and handles key presses. When input ends (or the
//! user quits) the live output is cleared and the static summary is printed.

mod input;
mod keys;

pub use input::{InputStats, parse_batch, read_batches};
pub use keys::{CrlfWriter, KeyAction, key_action};

use crate::args::InputSource;
use crate::progress::ProgressTable;
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tracing::{debug, info, warn};

/// How the replay loop behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Time between redraws
    pub refresh: Duration,
    /// Whether the space key collapses the table
    pub toggle_enabled: bool,
    /// Print the summary table to stdout at the end
    pub show_final_table: bool,
    /// Draw the live table on stderr
    pub draw_live: bool,
    /// Read key presses from the terminal (requires raw mode)
    pub interactive: bool,
    /// Delay after each input batch; `None` reads as fast as possible
    pub pace: Option<Duration>,
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndOfInput,
    UserQuit,
    Interrupted,
}

/// Summary of a finished replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayReport {
    pub stop: StopReason,
    /// Present when the input was read to the end
    pub input: Option<InputStats>,
}

/// Restores cooked mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw terminal mode")?;

        // A panic must not leave the user's shell in raw mode
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            original_hook(panic_info);
        }));

        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

/// Open `source` and replay it into `progress` until it ends or the user quits
pub async fn run_replay(
    progress: Arc<ProgressTable>,
    source: &InputSource,
    options: ReplayOptions,
) -> Result<ReplayReport> {
    let reader = match source {
        InputSource::Stdin => {
            let stdin = BufReader::new(tokio::io::stdin());
            tokio::spawn(read_batches(stdin, Arc::clone(&progress), options.pace))
        }
        InputSource::File(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input '{}'", path.display()))?;
            let file = BufReader::new(file);
            tokio::spawn(read_batches(file, Arc::clone(&progress), options.pace))
        }
    };

    info!("Replaying batches from {}", source);

    let raw_mode = if options.interactive {
        Some(RawModeGuard::enable()?)
    } else {
        None
    };

    let report = drive(&progress, reader, options, raw_mode.is_some()).await;

    let mut stderr = io::stderr().lock();
    if options.draw_live {
        if raw_mode.is_some() {
            progress.clear_table_output(&mut CrlfWriter::new(&mut stderr))?;
        } else {
            progress.clear_table_output(&mut stderr)?;
        }
    }
    drop(stderr);
    drop(raw_mode);

    let report = report?;

    if options.show_final_table && !progress.is_empty() {
        let mut stdout = io::stdout().lock();
        progress.write_final_table(&mut stdout)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }

    Ok(report)
}

async fn drive(
    progress: &ProgressTable,
    mut reader: tokio::task::JoinHandle<Result<InputStats>>,
    options: ReplayOptions,
    raw_mode: bool,
) -> Result<ReplayReport> {
    let mut ticker = tokio::time::interval(options.refresh);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut show_table = true;

    loop {
        tokio::select! {
            joined = &mut reader => {
                let stats = joined.context("Input reader task failed")??;
                info!(
                    "End of input after {} batches ({} rows applied, {} bad lines)",
                    stats.batches, stats.rows_applied, stats.bad_lines
                );
                return Ok(ReplayReport { stop: StopReason::EndOfInput, input: Some(stats) });
            }
            _ = &mut ctrl_c => {
                info!("Interrupted, stopping replay");
                reader.abort();
                return Ok(ReplayReport { stop: StopReason::Interrupted, input: None });
            }
            _ = ticker.tick() => {
                if options.interactive {
                    while event::poll(Duration::from_millis(0))? {
                        let Event::Key(key) = event::read()? else {
                            continue;
                        };
                        match key_action(&key) {
                            Some(KeyAction::ToggleTable) if options.toggle_enabled => {
                                show_table = !show_table;
                                debug!("Table {}", if show_table { "shown" } else { "hidden" });
                            }
                            Some(KeyAction::Reset) => progress.reset(),
                            Some(KeyAction::Quit) => {
                                info!("Quit requested, stopping replay");
                                reader.abort();
                                return Ok(ReplayReport { stop: StopReason::UserQuit, input: None });
                            }
                            Some(KeyAction::ToggleTable) | None => {}
                        }
                    }
                }

                if options.draw_live {
                    let mut stderr = io::stderr().lock();
                    if raw_mode {
                        let mut out = CrlfWriter::new(&mut stderr);
                        progress.write_table(&mut out, show_table, options.toggle_enabled)?;
                    } else {
                        progress.write_table(&mut stderr, show_table, options.toggle_enabled)?;
                    }
                }
            }
        }
    }
}
