//! Keyboard handling and raw-mode output

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::{self, Write};

/// What a key press asks the replay loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Collapse or expand the table
    ToggleTable,
    /// Forget all events and restart the clock
    Reset,
    /// Stop replaying
    Quit,
}

/// Map a key event to an action, ignoring releases and unbound keys
#[must_use]
pub fn key_action(key: &KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char(' ') => Some(KeyAction::ToggleTable),
        KeyCode::Char('r') => Some(KeyAction::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Writer that turns `\n` into `\r\n`
///
/// Raw mode disables the terminal's own newline translation, and the table
/// relies on each line starting at column zero.
#[derive(Debug)]
pub struct CrlfWriter<W> {
    inner: W,
}

impl<W: Write> CrlfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for (i, chunk) in buf.split(|b| *b == b'\n').enumerate() {
            if i > 0 {
                self.inner.write_all(b"\r\n")?;
            }
            self.inner.write_all(chunk)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
