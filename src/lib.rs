//! A fixed-capacity Least Frequently Used (LFU) cache with constant-time
//! operations and least-recently-used tie-breaking.
//!
//! ## How it works
//!
//! Entries that share an access count live together in a *frequency bucket*.
//! Buckets form a doubly linked sequence in ascending frequency order, and
//! each bucket keeps its entries in a doubly linked list ordered by recency:
//!
//! ```text
//!   index: HashMap<K, Handle> ──────────────────────────────┐
//!                                                            ▼
//!   ┌────────────┐     ┌────────────┐     ┌────────────┐
//!   │  freq = 1  │ ◄─► │  freq = 2  │ ◄─► │  freq = 7  │   ascending
//!   │  [d] [e]   │     │  [b]       │     │  [a] [c]   │
//!   └────────────┘     └────────────┘     └────────────┘
//!    oldest → newest    oldest → newest    oldest → newest
//! ```
//!
//! - **get / put on an existing key** move the entry from bucket `f` to
//!   bucket `f + 1`, which is either the current successor or a new bucket
//!   spliced in right after `f`. Empty buckets are unlinked, except the
//!   frequency-1 bucket, which is where every new key lands.
//! - **eviction** takes the oldest entry of the lowest non-empty bucket.
//! - **iteration** walks buckets from the highest frequency down and each
//!   bucket from its newest entry back, so no sort is ever needed.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `get` / `get_mut` | O(1) |
//! | `put` (including eviction) | O(1) |
//! | `key_frequency`, `len`, `capacity` | O(1) |
//! | `all()` full traversal | O(len) |
//!
//! Nodes live in index arenas and link to each other by handle, so the
//! structure contains no raw pointers and no `unsafe`.
//!
//! ## Example
//!
//! ```rust
//! use bucket_lfu::{CacheError, LfuCache};
//!
//! let mut cache = LfuCache::new(2);
//! cache.put("rare", 1);
//! cache.put("popular", 2);
//!
//! for _ in 0..10 {
//!     cache.get(&"popular").unwrap();
//! }
//!
//! cache.put("new", 3); // "rare" evicted (lowest frequency)
//! assert_eq!(cache.get(&"rare"), Err(CacheError::KeyNotFound));
//! assert_eq!(cache.key_frequency(&"popular"), Ok(11));
//! ```
//!
//! ## Thread safety
//!
//! The cache is a plain single-threaded structure. All mutation goes through
//! `&mut self`; callers that share a cache between threads wrap it in their
//! own lock.
//!
//! ## Modules
//!
//! - [`lfu`]: the cache itself
//! - [`iter`]: frequency-ordered iteration
//! - [`config`]: construction parameters
//! - [`error`]: lookup errors
//! - [`metrics`]: counters for hit rate, evictions, and bucket spread

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Arena-backed doubly linked lists used for both buckets and entries.
///
/// **Note**: This module is internal infrastructure.
pub(crate) mod list;

/// Entry and bucket node types.
pub(crate) mod entry;

/// Cache configuration structures.
pub mod config;

/// Error type for lookups of absent keys.
pub mod error;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used entry,
/// oldest first among ties, when a new key arrives at a full cache.
pub mod lfu;

/// Iterators over cache contents.
pub mod iter;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions, evictions, and frequency
/// promotions, reported as a deterministic `BTreeMap`.
pub mod metrics;

pub use config::{LfuCacheConfig, DEFAULT_CAPACITY};
pub use error::CacheError;
pub use iter::Iter;
pub use lfu::LfuCache;
pub use metrics::{CacheMetrics, LfuCacheMetrics};
