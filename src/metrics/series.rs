//! Rate-smoothed value history for one (event, host) pair
//!
//! A series keeps three snapshots. `latest` always holds the running value.
//! `prev` and `cur` form a two-point window that trails `latest` by up to
//! half a second and is what rates are computed from, so a burst of updates
//! arriving a few milliseconds apart cannot produce a jittery rate.

use super::snapshot::Snapshot;
use crate::constants::series::{
    BASELINE_OFFSET_SECS, FRESHNESS_THRESHOLD_SECS, RATE_STALE_AFTER_SECS, RESET_AFTER_SECS,
    ROTATE_AFTER_SECS,
};
use crate::types::MetricKind;

/// Value history of one metric on one host
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    kind: MetricKind,
    prev: Snapshot,
    cur: Snapshot,
    latest: Snapshot,
    update_time: f64,
}

impl MetricSeries {
    /// Create an empty series that combines values according to `kind`
    #[must_use]
    pub fn new(kind: MetricKind) -> Self {
        Self {
            kind,
            prev: Snapshot::default(),
            cur: Snapshot::default(),
            latest: Snapshot::default(),
            update_time: 0.0,
        }
    }

    #[must_use]
    #[inline]
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Apply one observed value at `now`
    ///
    /// After an idle gap (or on the very first update) the window is re-seeded
    /// with a synthetic baseline one second in the past, carrying the last
    /// known value. This keeps a long pause from showing up as a rate spike.
    pub fn update(&mut self, new_value: i64, now: f64) {
        if self.latest.age(now) >= RESET_AFTER_SECS || self.latest.is_unset() {
            let baseline = Snapshot::new(self.latest.value, now - BASELINE_OFFSET_SECS);
            self.prev = baseline;
            self.cur = baseline;
        }

        self.latest.value = match self.kind {
            MetricKind::Increment => self.latest.value.saturating_add(new_value),
            MetricKind::Gauge => new_value,
        };
        self.latest.time = now;

        if self.cur.age(now) >= ROTATE_AFTER_SECS {
            self.prev = std::mem::replace(&mut self.cur, self.latest);
        }

        self.update_time = now;

        debug_assert!(
            self.prev.time <= self.cur.time && self.cur.time <= self.latest.time,
            "snapshot times out of order: {:?}",
            self
        );
    }

    /// Smoothed rate in value units per second
    ///
    /// Zero once the series has gone half a second without an update.
    #[must_use]
    pub fn rate(&self, now: f64) -> f64 {
        if self.latest.age(now) >= RATE_STALE_AFTER_SECS {
            return 0.0;
        }

        (self.cur.value as f64 - self.prev.value as f64) / (self.cur.time - self.prev.time)
    }

    /// Latest running value
    #[must_use]
    #[inline]
    pub fn value(&self) -> f64 {
        self.latest.value as f64
    }

    /// Whether the series was updated within the freshness window
    ///
    /// A series that never received an update is never fresh.
    #[must_use]
    pub fn is_fresh(&self, now: f64) -> bool {
        self.update_time != 0.0 && now - self.update_time <= FRESHNESS_THRESHOLD_SECS
    }

    /// Time of the last update, zero if none
    #[must_use]
    #[inline]
    pub fn last_update(&self) -> f64 {
        self.update_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_first_update_seeds_one_second_baseline() {
        let mut series = MetricSeries::new(MetricKind::Increment);
        series.update(10, 0.1);

        // Baseline at (0, -0.9) rotated into prev, latest became cur
        assert_eq!(series.prev, Snapshot::new(0, 0.1 - 1.0));
        assert_eq!(series.cur, Snapshot::new(10, 0.1));
        assert_eq!(series.latest, Snapshot::new(10, 0.1));
        assert_close(series.rate(0.1), 10.0);
        assert_eq!(series.value(), 10.0);
    }

    #[test]
    fn test_sub_second_updates_do_not_rotate() {
        let mut series = MetricSeries::new(MetricKind::Increment);
        series.update(10, 0.1);
        series.update(10, 0.3);

        // cur is only 0.2s old: the window is unchanged, value moves on
        assert_eq!(series.cur, Snapshot::new(10, 0.1));
        assert_eq!(series.value(), 20.0);
        assert_close(series.rate(0.3), 10.0);
    }

    #[test]
    fn test_rotation_after_half_second() {
        let mut series = MetricSeries::new(MetricKind::Increment);
        series.update(10, 0.1);
        series.update(10, 0.3);
        series.update(10, 0.7);

        assert_eq!(series.prev, Snapshot::new(10, 0.1));
        assert_eq!(series.cur, Snapshot::new(30, 0.7));
        assert_close(series.rate(0.7), 20.0 / 0.6);
    }

    #[test]
    fn test_idle_gap_resets_window() {
        let mut series = MetricSeries::new(MetricKind::Increment);
        series.update(100, 1.0);
        series.update(50, 5.0);

        // Re-seeded at (100, 4.0), then rotated with the new latest
        assert_eq!(series.prev, Snapshot::new(100, 4.0));
        assert_eq!(series.cur, Snapshot::new(150, 5.0));
        assert_close(series.rate(5.0), 50.0);
    }

    #[test]
    fn test_increment_then_one_second_later() {
        let mut series = MetricSeries::new(MetricKind::Increment);
        series.update(100, 0.0);
        series.update(50, 1.0);

        assert_eq!(series.value(), 150.0);
        assert_eq!(series.prev, Snapshot::new(100, 0.0));
        assert_eq!(series.cur, Snapshot::new(150, 1.0));
        assert_close(series.rate(1.0), 50.0);
    }

    #[test]
    fn test_gauge_replaces_value() {
        let mut series = MetricSeries::new(MetricKind::Gauge);
        series.update(1000, 0.2);
        series.update(400, 0.4);

        assert_eq!(series.value(), 400.0);
        assert_eq!(series.kind(), MetricKind::Gauge);
    }

    #[test]
    fn test_gauge_rate_can_be_negative() {
        let mut series = MetricSeries::new(MetricKind::Gauge);
        series.update(1000, 0.2);
        series.update(400, 0.6);
        series.update(400, 0.8);

        // Window rotated from (1000, 0.2) to (400, 0.8)
        assert_close(series.rate(0.8), -600.0 / 0.6);
    }

    #[test]
    fn test_rate_zero_when_stale() {
        let mut series = MetricSeries::new(MetricKind::Increment);
        series.update(10, 1.0);

        assert!(series.rate(1.49) > 0.0);
        assert_eq!(series.rate(1.5), 0.0);
        assert_eq!(series.rate(10.0), 0.0);
    }

    #[test]
    fn test_rate_finite_right_after_update() {
        let mut series = MetricSeries::new(MetricKind::Increment);
        for (i, t) in [0.01, 0.02, 0.03, 0.6, 0.61, 2.0].into_iter().enumerate() {
            series.update(i as i64 * 7, t);
            let rate = series.rate(t);
            assert!(rate.is_finite(), "rate at {t} is {rate}");
        }
    }

    #[test]
    fn test_freshness_window() {
        let mut series = MetricSeries::new(MetricKind::Increment);
        assert!(!series.is_fresh(0.0));
        assert!(!series.is_fresh(1.0));

        series.update(1, 2.0);
        assert!(series.is_fresh(2.0));
        assert!(series.is_fresh(5.0));
        assert!(!series.is_fresh(5.01));
        assert_eq!(series.last_update(), 2.0);
    }

    #[test]
    fn test_update_at_time_zero_is_not_fresh() {
        // Time zero doubles as the "never updated" marker
        let mut series = MetricSeries::new(MetricKind::Increment);
        series.update(5, 0.0);
        assert!(!series.is_fresh(0.0));
    }

    #[test]
    fn test_increment_saturates() {
        let mut series = MetricSeries::new(MetricKind::Increment);
        series.update(i64::MAX, 0.1);
        series.update(1, 0.2);
        assert_eq!(series.value(), i64::MAX as f64);
    }
}
