//! Cache Configuration Module
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: Capacity is a `usize`, so a negative capacity cannot be expressed
//! - **Defaults**: [`LfuCacheConfig::default`] uses [`DEFAULT_CAPACITY`]
//!
//! # Sizing
//!
//! `capacity` is the maximum number of keys the cache holds at once. Entries
//! and the key index are pre-allocated for that many keys; frequency buckets
//! are allocated lazily as access counts diverge.
//!
//! A capacity of zero is accepted and yields a cache that never stores
//! anything: every `put` of a new key is dropped.
//!
//! # Examples
//!
//! ```
//! use bucket_lfu::config::LfuCacheConfig;
//! use bucket_lfu::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 1000 };
//! let cache: LfuCache<String, i32> = LfuCache::init(config, None);
//! assert_eq!(cache.capacity(), 1000);
//! ```

use core::fmt;

/// Capacity used when none is supplied.
pub const DEFAULT_CAPACITY: usize = 5;

/// Configuration for an [`LfuCache`](crate::LfuCache).
///
/// # Examples
///
/// ```
/// use bucket_lfu::config::{LfuCacheConfig, DEFAULT_CAPACITY};
///
/// let config = LfuCacheConfig::default();
/// assert_eq!(config.capacity, DEFAULT_CAPACITY);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold
    pub capacity: usize,
}

impl Default for LfuCacheConfig {
    fn default() -> Self {
        LfuCacheConfig {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
