//! Terminal width discovery

use crate::types::TerminalColumns;

/// Width assumed when the real terminal cannot be queried
pub const FALLBACK_COLUMNS: u16 = 80;

/// Source of the current terminal width, queried on every draw
pub trait TerminalSize: Send + Sync {
    fn width(&self) -> u16;
}

/// Width of the controlling terminal via crossterm
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermTerminal;

impl TerminalSize for CrosstermTerminal {
    fn width(&self) -> u16 {
        match crossterm::terminal::size() {
            Ok((columns, _)) if columns > 0 => columns,
            Ok(_) => FALLBACK_COLUMNS,
            Err(e) => {
                tracing::trace!("Terminal size unavailable, assuming {FALLBACK_COLUMNS}: {e}");
                FALLBACK_COLUMNS
            }
        }
    }
}

/// A width that never changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub u16);

impl From<TerminalColumns> for FixedWidth {
    fn from(columns: TerminalColumns) -> Self {
        Self(columns.get())
    }
}

impl TerminalSize for FixedWidth {
    #[inline]
    fn width(&self) -> u16 {
        self.0
    }
}
