//! Cache Metrics System
//!
//! Provides metrics reporting for the cache using BTreeMap-based snapshots.
//! The cache keeps its counters in plain integers and only materializes a
//! map when [`CacheMetrics::metrics`] is called.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap gives deterministic ordering, so snapshots print and compare the
//! same way every time. With a dozen keys the O(log n) lookup cost is noise.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lfu;

pub use lfu::LfuCacheMetrics;

/// Counters common to any capacity-bounded cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of reads (`get`/`get_mut`) made against the cache
    pub requests: u64,

    /// Number of reads that found their key
    pub cache_hits: u64,

    /// Number of new keys stored
    pub insertions: u64,

    /// Number of `put` calls that overwrote an existing key
    pub updates: u64,

    /// Number of entries evicted to make room for a new key
    pub evictions: u64,

    /// Number of new keys dropped because the cache has zero capacity
    pub rejected_insertions: u64,
}

impl CoreCacheMetrics {
    /// Creates an empty set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a read that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a read whose key was absent.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key being stored.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records a `put` that overwrote the value of an existing key.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an eviction caused by capacity pressure.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records a new key that could not be stored at all.
    pub fn record_rejection(&mut self) {
        self.rejected_insertions += 1;
    }

    /// Number of reads that missed.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Fraction of reads that hit, between 0.0 and 1.0; 0.0 with no reads.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of reads that missed, between 0.0 and 1.0; 0.0 with no reads.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Evictions per insertion; 0.0 before anything was inserted.
    pub fn eviction_rate(&self) -> f64 {
        if self.insertions > 0 {
            self.evictions as f64 / self.insertions as f64
        } else {
            0.0
        }
    }

    /// Resets every counter to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Convert core metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert(
            "rejected_insertions".to_string(),
            self.rejected_insertions as f64,
        );
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics.insert("eviction_rate".to_string(), self.eviction_rate());

        metrics
    }
}

/// Uniform metrics reporting interface.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LFU").
    fn algorithm_name(&self) -> &'static str;
}
