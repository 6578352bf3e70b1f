//! ANSI rendering of the progress table
//!
//! Renderers are stateless: everything they draw comes from the table, the
//! time and the terminal width passed in. Output is built with crossterm
//! commands queued into any [`Write`]; the `render_*` helpers collect it into
//! a byte buffer so the caller can emit a whole frame with one write.
//!
//! The live table redraws in place. Each frame leaves the cursor on the line
//! it started from, so the next frame (or [`write_clear`]) overwrites it.

pub mod colors;
pub mod layout;
pub mod terminal;

pub use colors::{Shade, progress_shade};
pub use layout::{ColumnLayout, write_with_width, write_with_width_strict};
pub use terminal::{CrosstermTerminal, FALLBACK_COLUMNS, FixedWidth, TerminalSize};

use crate::constants::columns::{DOCUMENTATION, EVENT_NAME, PROGRESS, VALUE};
use crate::constants::text::{RATE_SUFFIX, TOGGLE_HINT};
use crate::formatting::format_readable_value;
use crate::metrics::MetricTable;
use crossterm::cursor::{Hide, MoveUp, Show};
use crossterm::queue;
use crossterm::style::{Print, ResetColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Draw the live table: header plus one line per fresh entry
///
/// Draws nothing when the terminal is too narrow for the fixed columns or
/// when no entry is fresh. Computing rates raises each entry's peak rate,
/// hence the mutable table.
pub fn write_table<W: Write>(
    out: &mut W,
    table: &mut MetricTable,
    now: f64,
    terminal_width: usize,
) -> io::Result<()> {
    let Some(layout) = ColumnLayout::live(table.name_column_width(), terminal_width) else {
        return Ok(());
    };

    let fresh = table.fresh_count(now);
    if fresh == 0 {
        return Ok(());
    }

    queue!(out, Hide, Print("\n"))?;
    write_with_width(out, EVENT_NAME, layout.name)?;
    write_with_width(out, VALUE, layout.value)?;
    write_with_width(out, PROGRESS, layout.progress)?;
    if let Some(doc_width) = layout.documentation {
        write_with_width(out, DOCUMENTATION, doc_width)?;
    }
    queue!(out, Clear(ClearType::UntilNewLine))?;

    let mut cursor = table.front();
    while let Some(id) = cursor {
        let entry = table.entry_mut(id);
        cursor = entry.next();

        if !entry.aggregate().is_fresh(now) {
            continue;
        }

        let value_type = entry.info().value_type;

        queue!(out, Print("\n"))?;
        write_with_width(out, entry.name(), layout.name)?;

        let value = entry.aggregate().total_value();
        write_with_width(out, &format_readable_value(value_type, value), layout.value)?;

        // The shade compares against the peak as it was before this rate
        let peak = entry.aggregate().peak_rate();
        let rate = entry.aggregate_mut().total_rate(now);
        progress_shade(value_type, rate, peak).queue(out)?;

        let progress = format!("{}{RATE_SUFFIX}", format_readable_value(value_type, rate));
        write_with_width(out, &progress, layout.progress)?;

        if let Some(doc_width) = layout.documentation {
            Shade::DarkGrey.queue(out)?;
            write_with_width_strict(out, &entry.info().documentation, doc_width)?;
        }

        queue!(out, ResetColor, Clear(ClearType::UntilNewLine))?;
    }

    // Entries plus the header line
    queue!(out, MoveUp(fresh_lines(fresh)))
}

/// Draw the one-line hint shown while the table is collapsed
pub fn write_hidden<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::FromCursorDown),
        Hide,
        Print("\n"),
        Print(TOGGLE_HINT),
        MoveUp(1)
    )
}

/// Erase whatever the live table left below the cursor
pub fn write_clear<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Print("\r"), Clear(ClearType::FromCursorDown), Show)
}

/// Write the static summary of every entry, fresh or not, without escapes
pub fn write_final<W: Write>(
    out: &mut W,
    table: &MetricTable,
    terminal_width: usize,
) -> io::Result<()> {
    let Some(layout) = ColumnLayout::summary(table.name_column_width(), terminal_width) else {
        return Ok(());
    };

    if table.is_empty() {
        return Ok(());
    }

    out.write_all(b"\n")?;
    write_with_width(out, EVENT_NAME, layout.name)?;
    write_with_width(out, VALUE, layout.value)?;

    for entry in table.entries() {
        out.write_all(b"\n")?;
        write_with_width(out, entry.name(), layout.name)?;
        let value = format_readable_value(entry.info().value_type, entry.aggregate().total_value());
        write_with_width(out, &value, layout.value)?;
    }

    Ok(())
}

/// Live table as bytes, see [`write_table`]
#[must_use]
pub fn render_table(table: &mut MetricTable, now: f64, terminal_width: usize) -> Vec<u8> {
    collect(|buf| write_table(buf, table, now, terminal_width))
}

/// Collapsed-mode hint as bytes, see [`write_hidden`]
#[must_use]
pub fn render_hidden() -> Vec<u8> {
    collect(write_hidden)
}

/// Clearing sequence as bytes, see [`write_clear`]
#[must_use]
pub fn render_clear() -> Vec<u8> {
    collect(write_clear)
}

/// Final summary as bytes, see [`write_final`]
#[must_use]
pub fn render_final(table: &MetricTable, terminal_width: usize) -> Vec<u8> {
    collect(|buf| write_final(buf, table, terminal_width))
}

fn fresh_lines(fresh: usize) -> u16 {
    u16::try_from(fresh + 1).unwrap_or(u16::MAX)
}

fn collect(draw: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Err(e) = draw(&mut buf) {
        unreachable!("writing into a Vec cannot fail: {e}");
    }
    buf
}
