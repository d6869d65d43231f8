//! LFU Cache Metrics
//!
//! Metrics specific to the frequency-bucketed LFU cache.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LFU-specific metrics (extends [`CoreCacheMetrics`]).
///
/// Tracks how often entries are promoted between frequency buckets and how
/// spread out the live frequencies are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LfuCacheMetrics {
    /// Core metrics common to all caches
    pub core: CoreCacheMetrics,

    /// Total number of touches (every hit and every update promotes one entry)
    pub total_frequency_increments: u64,

    /// Highest frequency any entry has reached since the last reset
    pub max_frequency: u64,

    /// Number of frequency buckets currently linked, including the
    /// frequency-1 bucket even while it is empty
    pub active_frequency_levels: u64,
}

impl LfuCacheMetrics {
    /// Creates a new, zeroed LfuCacheMetrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one entry moving to `new_frequency`.
    pub fn record_frequency_increment(&mut self, new_frequency: u64) {
        self.total_frequency_increments += 1;
        if new_frequency > self.max_frequency {
            self.max_frequency = new_frequency;
        }
    }

    /// Updates the count of linked frequency buckets.
    pub fn update_active_frequency_levels(&mut self, levels: u64) {
        self.active_frequency_levels = levels;
    }

    /// Average number of touches per stored key; 0.0 before any insertion.
    pub fn average_touches_per_insertion(&self) -> f64 {
        if self.core.insertions > 0 {
            self.total_frequency_increments as f64 / self.core.insertions as f64
        } else {
            0.0
        }
    }

    /// Resets all counters. The bucket count is a gauge and is kept.
    pub fn reset(&mut self) {
        let levels = self.active_frequency_levels;
        *self = Self::default();
        self.active_frequency_levels = levels;
    }

    /// Converts LFU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("max_frequency".to_string(), self.max_frequency as f64);
        metrics.insert(
            "total_frequency_increments".to_string(),
            self.total_frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.active_frequency_levels as f64,
        );
        metrics.insert(
            "average_touches_per_insertion".to_string(),
            self.average_touches_per_insertion(),
        );

        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}
