//! Configuration value types
//!
//! Validation happens at construction so the rest of the crate never has to
//! re-check a zero refresh interval or a zero terminal width.

use nutype::nutype;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// Interval between live redraws, in milliseconds
///
/// Accepts either a plain number of milliseconds or a duration string such
/// as `"250ms"` or `"1s"` in TOML.
#[nutype(
    validate(greater = 0),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFrom, Into)
)]
pub struct RefreshIntervalMs(u64);

impl Default for RefreshIntervalMs {
    fn default() -> Self {
        // 4 redraws per second; safe because 250 > 0
        Self::try_new(250).expect("default refresh interval is valid")
    }
}

impl RefreshIntervalMs {
    /// Get the interval in milliseconds
    #[inline]
    #[must_use]
    pub fn get(&self) -> u64 {
        self.into_inner()
    }

    #[inline]
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.into_inner())
    }
}

impl std::str::FromStr for RefreshIntervalMs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();

        let millis = if let Some(secs) = s.strip_suffix("ms") {
            secs.trim().parse::<u64>().map_err(|e| e.to_string())?
        } else if let Some(secs) = s.strip_suffix('s') {
            let secs = secs.trim().parse::<f64>().map_err(|e| e.to_string())?;
            if !secs.is_finite() || secs < 0.0 {
                return Err(format!("Invalid refresh interval: {}", s));
            }
            (secs * 1000.0).round() as u64
        } else {
            s.parse::<u64>()
                .map_err(|_| format!("Invalid refresh interval: {}", s))?
        };

        Self::try_new(millis).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for RefreshIntervalMs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.into_inner())
    }
}

impl Serialize for RefreshIntervalMs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.into_inner().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RefreshIntervalMs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Millis(u64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Millis(ms) => Self::try_new(ms).map_err(serde::de::Error::custom),
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Fixed terminal width override, in columns
#[nutype(
    validate(greater = 0),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFrom, Into)
)]
pub struct TerminalColumns(u16);

impl TerminalColumns {
    #[inline]
    #[must_use]
    pub fn get(&self) -> u16 {
        self.into_inner()
    }
}

impl std::str::FromStr for TerminalColumns {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cols: u16 = s
            .trim()
            .parse()
            .map_err(|e| format!("Invalid terminal width: {}", e))?;
        Self::try_new(cols).map_err(|e| e.to_string())
    }
}
