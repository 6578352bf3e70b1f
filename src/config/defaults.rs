//! Default values for configuration fields
//!
//! This module centralizes all default value functions used in serde deserialization.

use crate::types::RefreshIntervalMs;

/// Default redraw interval (4 frames per second)
#[inline]
pub fn refresh_interval() -> RefreshIntervalMs {
    RefreshIntervalMs::default()
}

/// Default for the space bar collapsing the table (true = enabled)
#[inline]
pub fn toggle_enabled() -> bool {
    true
}

/// Default for printing the summary table on exit
#[inline]
pub fn show_final_table() -> bool {
    true
}
