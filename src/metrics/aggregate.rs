//! Per-host aggregation for a single event

use super::series::MetricSeries;
use crate::types::MetricKind;
use std::collections::BTreeMap;

/// All hosts' series for one event
///
/// Totals are "last known state per host": a host that stopped reporting
/// still contributes its last value, but a zero rate.
#[derive(Debug, Clone, Default)]
pub struct HostAggregate {
    per_host: BTreeMap<String, MetricSeries>,
    peak_rate: f64,
}

impl HostAggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one host's value, creating its series on first sight
    ///
    /// The series kind is fixed by the first row seen for the host.
    pub fn ingest(&mut self, host: &str, kind: MetricKind, value: i64, now: f64) {
        if let Some(series) = self.per_host.get_mut(host) {
            series.update(value, now);
            return;
        }

        let mut series = MetricSeries::new(kind);
        series.update(value, now);
        self.per_host.insert(host.to_owned(), series);
    }

    /// Sum of the latest values across hosts
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.per_host.values().map(MetricSeries::value).sum()
    }

    /// Sum of the hosts' rates; raises the running peak
    pub fn total_rate(&mut self, now: f64) -> f64 {
        let rate: f64 = self.per_host.values().map(|s| s.rate(now)).sum();
        self.peak_rate = self.peak_rate.max(rate);
        rate
    }

    /// Highest total rate computed so far
    ///
    /// Only used to normalize colors; never decreases.
    #[must_use]
    #[inline]
    pub fn peak_rate(&self) -> f64 {
        self.peak_rate
    }

    /// True if any host's series is fresh
    #[must_use]
    pub fn is_fresh(&self, now: f64) -> bool {
        self.per_host.values().any(|s| s.is_fresh(now))
    }

    #[must_use]
    #[inline]
    pub fn host_count(&self) -> usize {
        self.per_host.len()
    }

    /// Host names in sorted order
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.per_host.keys().map(String::as_str)
    }

    #[must_use]
    pub fn series(&self, host: &str) -> Option<&MetricSeries> {
        self.per_host.get(host)
    }
}
