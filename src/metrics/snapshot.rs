//! Timestamped point sample used by rate smoothing

/// A `(value, time)` pair
///
/// `time` is seconds on the table's stopwatch. A zero time means the slot has
/// never been written.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Snapshot {
    pub value: i64,
    pub time: f64,
}

impl Snapshot {
    #[must_use]
    #[inline]
    pub const fn new(value: i64, time: f64) -> Self {
        Self { value, time }
    }

    /// Seconds between this sample and `now`
    #[must_use]
    #[inline]
    pub fn age(&self, now: f64) -> f64 {
        now - self.time
    }

    /// Whether this slot has ever been written
    #[must_use]
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.time == 0.0
    }
}
