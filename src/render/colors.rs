//! Rate-to-color mapping for the progress column
//!
//! Buckets are found with an upper-bound search: the bucket index is the
//! number of thresholds that are `<=` the rate.

use crate::types::ValueType;
use crossterm::queue;
use crossterm::style::{Color, Print, SetForegroundColor};
use std::io::{self, Write};

/// Bold plus basic yellow in one SGR sequence
const BOLD_YELLOW_SGR: &str = "\x1b[1;33m";

/// Fractions of the peak rate separating count buckets
pub const NUMBER_FRACTIONS: [f64; 4] = [0.05, 0.20, 0.80, 0.95];

/// Bytes per second separating byte-rate buckets
pub const BYTES_THRESHOLDS: [f64; 6] = [
    (1u64 << 20) as f64,
    (100u64 << 20) as f64,
    (1000u64 << 20) as f64,
    (10_000u64 << 20) as f64,
    (100_000u64 << 20) as f64,
    (1_000_000u64 << 20) as f64,
];

/// Seconds per second separating time-rate buckets, before unit scaling
pub const TIME_THRESHOLDS_SECS: [f64; 4] = [0.001, 0.01, 0.1, 1.0];

const FIVE_SHADES: [Shade; 5] = [
    Shade::DarkGrey,
    Shade::LightGrey,
    Shade::Green,
    Shade::Yellow,
    Shade::BoldYellow,
];

const BYTES_SHADES: [Shade; 7] = [
    Shade::DarkGrey,
    Shade::LightGrey,
    Shade::Green,
    Shade::Yellow,
    Shade::Orange,
    Shade::BoldYellow,
    Shade::Red,
];

/// Foreground styles used by the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// 256-color 236
    DarkGrey,
    /// 256-color 250
    LightGrey,
    /// 256-color 34
    Green,
    /// 256-color 226
    Yellow,
    /// 256-color 208
    Orange,
    /// Bold basic yellow (`ESC[1;33m`)
    BoldYellow,
    /// 256-color 160
    Red,
}

impl Shade {
    /// Queue the escape sequence selecting this shade
    pub fn queue<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            Self::DarkGrey => queue!(out, SetForegroundColor(Color::AnsiValue(236))),
            Self::LightGrey => queue!(out, SetForegroundColor(Color::AnsiValue(250))),
            Self::Green => queue!(out, SetForegroundColor(Color::AnsiValue(34))),
            Self::Yellow => queue!(out, SetForegroundColor(Color::AnsiValue(226))),
            Self::Orange => queue!(out, SetForegroundColor(Color::AnsiValue(208))),
            Self::BoldYellow => queue!(out, Print(BOLD_YELLOW_SGR)),
            Self::Red => queue!(out, SetForegroundColor(Color::AnsiValue(160))),
        }
    }
}

/// Number of thresholds not greater than `value`
#[must_use]
#[inline]
pub fn bucket(thresholds: &[f64], value: f64) -> usize {
    thresholds.partition_point(|t| *t <= value)
}

/// Count bucket relative to the peak rate seen so far
#[must_use]
pub fn number_bucket(rate: f64, peak: f64) -> usize {
    if peak == 0.0 {
        return 0;
    }
    bucket(&NUMBER_FRACTIONS, rate / peak)
}

#[must_use]
pub fn bytes_bucket(rate: f64) -> usize {
    bucket(&BYTES_THRESHOLDS, rate)
}

/// Time bucket with thresholds scaled into the value's unit
///
/// # Panics
/// Panics if `value_type` is not a time unit.
#[must_use]
pub fn time_bucket(value_type: ValueType, rate: f64) -> usize {
    let Some(units) = value_type.units_per_second() else {
        panic!("time bucket requested for non-time value type {value_type:?}");
    };
    let thresholds = TIME_THRESHOLDS_SECS.map(|t| t * units);
    bucket(&thresholds, rate)
}

/// Shade for a rate cell
///
/// `peak` is the highest total rate seen before this one and only matters
/// for plain counts.
#[must_use]
pub fn progress_shade(value_type: ValueType, rate: f64, peak: f64) -> Shade {
    match value_type {
        ValueType::Number => FIVE_SHADES[number_bucket(rate, peak)],
        ValueType::Bytes => BYTES_SHADES[bytes_bucket(rate)],
        ValueType::Nanoseconds | ValueType::Microseconds | ValueType::Milliseconds => {
            FIVE_SHADES[time_bucket(value_type, rate)]
        }
    }
}
