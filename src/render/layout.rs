//! Column widths and padded cell output

use crate::constants::columns::{DOCUMENTATION_MIN_WIDTH, PROGRESS_WIDTH, VALUE_WIDTH};
use crate::constants::text::ELLIPSIS;
use std::io::{self, Write};

/// Column widths for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub value: usize,
    pub progress: usize,
    /// Present only when the terminal leaves room for it
    pub documentation: Option<usize>,
}

impl ColumnLayout {
    /// Layout of the live table, or `None` if the terminal is too narrow
    #[must_use]
    pub fn live(name_width: usize, terminal_width: usize) -> Option<Self> {
        let fixed = name_width + VALUE_WIDTH + PROGRESS_WIDTH;
        if terminal_width < fixed {
            return None;
        }

        let documentation =
            (terminal_width >= fixed + DOCUMENTATION_MIN_WIDTH).then(|| terminal_width - fixed);

        Some(Self {
            name: name_width,
            value: VALUE_WIDTH,
            progress: PROGRESS_WIDTH,
            documentation,
        })
    }

    /// Layout of the final summary (name and value only)
    #[must_use]
    pub fn summary(name_width: usize, terminal_width: usize) -> Option<Self> {
        if terminal_width < name_width + VALUE_WIDTH {
            return None;
        }

        Some(Self {
            name: name_width,
            value: VALUE_WIDTH,
            progress: 0,
            documentation: None,
        })
    }
}

/// Write `s` left-aligned in a cell of `width` columns
///
/// Text that does not fit is written in full, followed by one space.
pub fn write_with_width<W: Write>(out: &mut W, s: &str, width: usize) -> io::Result<()> {
    let len = s.chars().count();
    if len >= width {
        write!(out, "{s} ")
    } else {
        write!(out, "{s}{:pad$}", "", pad = width - len)
    }
}

/// Write at most `width` columns of `s`, marking a cut with an ellipsis
///
/// No padding is added.
pub fn write_with_width_strict<W: Write>(out: &mut W, s: &str, width: usize) -> io::Result<()> {
    if s.chars().count() <= width {
        return out.write_all(s.as_bytes());
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if width <= ellipsis_len {
        let cut: String = s.chars().take(width).collect();
        return out.write_all(cut.as_bytes());
    }

    let cut: String = s.chars().take(width - ellipsis_len).collect();
    write!(out, "{cut}{ELLIPSIS}")
}
