//! Least Frequently Used Cache Implementation.
//!
//! The LFU cache evicts the least frequently accessed entry when a new key
//! arrives at a full cache. Among entries with the same access count, the one
//! touched least recently is evicted first.
//!
//! Every operation is O(1): entries are grouped into frequency buckets that
//! form a doubly linked sequence in ascending frequency order, and each bucket
//! keeps its entries in a doubly linked recency list. A touch moves an entry
//! from its bucket to the immediate successor bucket (creating it if needed),
//! so neither a sort nor a heap is ever required. Iterating in frequency order
//! is a reverse walk of both levels and costs O(len).
//!
//! Both levels live in index arenas linked by handle; the key index maps
//! each key to the arena handle of its entry.

extern crate alloc;

use crate::config::LfuCacheConfig;
use crate::entry::{Bucket, Entry};
use crate::error::{CacheError, Result};
use crate::iter::Iter;
use crate::list::{Arena, Handle, List};
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// An implementation of a Least Frequently Used (LFU) cache.
///
/// New keys enter with frequency 1. Each [`get`](Self::get),
/// [`get_mut`](Self::get_mut), or [`put`](Self::put) of an existing key
/// raises the key's frequency by one. When a new key arrives at a full cache,
/// the entry with the lowest frequency is evicted; ties go to the entry
/// touched least recently.
///
/// # Examples
///
/// ```
/// use bucket_lfu::LfuCache;
///
/// let mut cache = LfuCache::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
///
/// // "a" now has frequency 2, "b" still has 1.
/// assert_eq!(cache.get(&"a"), Ok(&1));
///
/// // Inserting a third key evicts the least frequently used one.
/// cache.put("c", 3);
/// assert!(cache.get(&"b").is_err());
/// assert_eq!(cache.key_frequency(&"a"), Ok(2));
/// ```
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    config: LfuCacheConfig,

    /// Map from keys to the arena handle of their entry
    index: HashMap<K, Handle, S>,

    /// Storage for every entry; each bucket's recency list threads through it
    entries: Arena<Entry<K, V>>,

    /// Storage for frequency buckets; `sequence` threads through it
    buckets: Arena<Bucket>,

    /// Buckets in ascending frequency order
    sequence: List,

    /// The frequency-1 bucket: always the head of `sequence`, never freed
    root: Handle,

    metrics: LfuCacheMetrics,
}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a new LFU cache holding at most `capacity` keys.
    ///
    /// ```
    /// use bucket_lfu::LfuCache;
    ///
    /// let cache: LfuCache<&str, u32> = LfuCache::new(10);
    /// assert_eq!(cache.capacity(), 10);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> LfuCache<K, V, S> {
    /// Creates a new LFU cache from a configuration with an optional hasher.
    ///
    /// If `hasher` is `None`, `S::default()` is used.
    ///
    /// ```
    /// use bucket_lfu::config::LfuCacheConfig;
    /// use bucket_lfu::LfuCache;
    ///
    /// let cache: LfuCache<u64, String> = LfuCache::init(LfuCacheConfig::default(), None);
    /// assert_eq!(cache.capacity(), 5);
    /// ```
    pub fn init(config: LfuCacheConfig, hasher: Option<S>) -> Self {
        Self::from_parts(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a new LFU cache with the specified capacity and hash builder.
    ///
    /// ```
    /// use bucket_lfu::LfuCache;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let cache: LfuCache<&str, u32, _> = LfuCache::with_hasher(10, RandomState::new());
    /// assert_eq!(cache.capacity(), 10);
    /// ```
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::from_parts(LfuCacheConfig { capacity }, hash_builder)
    }

    fn from_parts(config: LfuCacheConfig, hash_builder: S) -> Self {
        let mut buckets = Arena::with_capacity(1);
        let mut sequence = List::new();
        let root = buckets.insert(Bucket::new(1));
        sequence.push_back(&mut buckets, root);

        let mut metrics = LfuCacheMetrics::new();
        metrics.update_active_frequency_levels(1);

        LfuCache {
            config,
            index: HashMap::with_capacity_and_hasher(config.capacity, hash_builder),
            entries: Arena::with_capacity(config.capacity),
            buckets,
            sequence,
            root,
            metrics,
        }
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns a reference to the value for `key` and counts one access.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::KeyNotFound`] if the key is absent. A miss has no
    /// effect on the cache other than the miss counter in its metrics.
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.lookup_for_read(key)?;
        Ok(&self.entries.get(handle).value)
    }

    /// Returns a mutable reference to the value for `key` and counts one access.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::KeyNotFound`] if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.lookup_for_read(key)?;
        Ok(&mut self.entries.get_mut(handle).value)
    }

    /// Returns the value for `key` without counting an access.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = *self.index.get(key)?;
        Some(&self.entries.get(handle).value)
    }

    /// Returns `true` if `key` is cached. Does not count an access.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains_key(key)
    }

    /// Returns how many times `key` has been accessed, counting its insertion.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::KeyNotFound`] if the key is absent.
    pub fn key_frequency<Q>(&self, key: &Q) -> Result<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = *self.index.get(key).ok_or(CacheError::KeyNotFound)?;
        let bucket = self.entries.get(handle).bucket;
        Ok(self.buckets.get(bucket).frequency)
    }

    /// Inserts or updates a key-value pair.
    ///
    /// If the key is already cached, this counts as one access and the value
    /// is replaced. Otherwise, if the cache is full, exactly one entry is
    /// evicted first: the least frequently used, oldest among ties. The new
    /// entry starts at frequency 1 as the most recent member of its bucket.
    ///
    /// On a zero-capacity cache, a new key is dropped.
    pub fn put(&mut self, key: K, value: V)
    where
        K: Clone,
    {
        if let Some(&handle) = self.index.get(&key) {
            self.touch(handle);
            self.entries.get_mut(handle).value = value;
            self.metrics.core.record_update();
            return;
        }

        if self.config.capacity == 0 {
            self.metrics.core.record_rejection();
            return;
        }

        if self.len() + 1 > self.config.capacity {
            self.evict();
        }

        let handle = self.entries.insert(Entry::new(key.clone(), value, self.root));
        self.buckets
            .get_mut(self.root)
            .entries
            .push_back(&mut self.entries, handle);
        self.index.insert(key, handle);
        self.metrics.core.record_insertion();
    }

    /// Returns an iterator over `(&K, &V)` pairs in descending frequency
    /// order, most recently touched first among equal frequencies.
    ///
    /// Iterating does not count as an access.
    ///
    /// ```
    /// use bucket_lfu::LfuCache;
    ///
    /// let mut cache = LfuCache::new(3);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.put("c", 3);
    /// cache.get(&"b").unwrap();
    /// cache.get(&"c").unwrap();
    /// cache.get(&"c").unwrap();
    ///
    /// let keys: Vec<_> = cache.all().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, ["c", "b", "a"]);
    /// ```
    pub fn all(&self) -> Iter<'_, K, V> {
        Iter::new(&self.entries, &self.buckets, self.sequence.back())
    }

    /// Alias for [`all`](Self::all).
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.all()
    }

    /// Removes every entry. Capacity, hasher, and metrics are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
        self.buckets.clear();
        self.sequence = List::new();
        self.root = self.buckets.insert(Bucket::new(1));
        self.sequence.push_back(&mut self.buckets, self.root);
        self.metrics.update_active_frequency_levels(1);
    }

    /// Returns a reference to the metrics collected so far.
    #[inline]
    pub fn lfu_metrics(&self) -> &LfuCacheMetrics {
        &self.metrics
    }

    /// Resets the collected metrics counters.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Resolves `key` for a counted read, touching the entry on a hit.
    fn lookup_for_read<Q>(&mut self, key: &Q) -> Result<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.index.get(key) {
            Some(&handle) => {
                self.metrics.core.record_hit();
                self.touch(handle);
                Ok(handle)
            }
            None => {
                self.metrics.core.record_miss();
                Err(CacheError::KeyNotFound)
            }
        }
    }

    /// Moves an entry from its bucket to the bucket one frequency higher.
    fn touch(&mut self, handle: Handle) {
        let from = self.entries.get(handle).bucket;
        let new_frequency = self.buckets.get(from).frequency + 1;

        self.buckets
            .get_mut(from)
            .entries
            .unlink(&mut self.entries, handle);

        // The successor either has exactly new_frequency or something larger,
        // since frequencies are strictly ascending and integral.
        let to = match self.buckets.node(from).next() {
            Some(next) if self.buckets.get(next).frequency == new_frequency => next,
            _ => {
                let created = self.buckets.insert(Bucket::new(new_frequency));
                self.sequence
                    .insert_after(&mut self.buckets, from, created);
                created
            }
        };

        self.buckets
            .get_mut(to)
            .entries
            .push_back(&mut self.entries, handle);

        if from != self.root && self.buckets.get(from).is_empty() {
            self.sequence.unlink(&mut self.buckets, from);
            self.buckets.remove(from);
        }

        self.entries.get_mut(handle).bucket = to;

        self.metrics.record_frequency_increment(new_frequency);
        self.metrics
            .update_active_frequency_levels(self.sequence.len() as u64);
    }

    /// Evicts the oldest entry of the lowest non-empty bucket.
    ///
    /// Only the frequency-1 bucket can be empty, so the walk inspects at most
    /// two buckets.
    fn evict(&mut self) {
        let mut cursor = self.sequence.front();
        while let Some(bucket) = cursor {
            if !self.buckets.get(bucket).is_empty() {
                break;
            }
            cursor = self.buckets.node(bucket).next();
        }
        let Some(bucket) = cursor else {
            return;
        };

        let victim = match self
            .buckets
            .get_mut(bucket)
            .entries
            .pop_front(&mut self.entries)
        {
            Some(victim) => victim,
            None => return,
        };

        if bucket != self.root && self.buckets.get(bucket).is_empty() {
            self.sequence.unlink(&mut self.buckets, bucket);
            self.buckets.remove(bucket);
            self.metrics
                .update_active_frequency_levels(self.sequence.len() as u64);
        }

        let entry = self.entries.remove(victim);
        self.index.remove(&entry.key);
        self.metrics.core.record_eviction();
    }

    /// Asserts every structural invariant of the cache.
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        let mut seen = 0;
        let mut last_frequency = 0;
        let mut cursor = self.sequence.front();
        assert_eq!(cursor, Some(self.root), "frequency-1 bucket must lead");
        assert_eq!(self.buckets.len(), self.sequence.len());

        while let Some(bucket_handle) = cursor {
            let bucket = self.buckets.get(bucket_handle);
            assert!(bucket.frequency > last_frequency, "frequencies must ascend");
            if bucket_handle != self.root {
                assert!(!bucket.is_empty(), "empty bucket {}", bucket.frequency);
            } else {
                assert_eq!(bucket.frequency, 1);
            }
            last_frequency = bucket.frequency;

            let mut entry_cursor = bucket.entries.front();
            let mut in_bucket = 0;
            while let Some(entry_handle) = entry_cursor {
                let entry = self.entries.get(entry_handle);
                assert_eq!(entry.bucket, bucket_handle);
                assert_eq!(self.index.get(&entry.key), Some(&entry_handle));
                in_bucket += 1;
                entry_cursor = self.entries.node(entry_handle).next();
            }
            assert_eq!(in_bucket, bucket.entries.len());
            seen += in_bucket;
            cursor = self.buckets.node(bucket_handle).next();
        }

        assert_eq!(seen, self.index.len());
        assert_eq!(seen, self.entries.len());
        assert!(seen <= self.config.capacity);
        assert_eq!(
            self.metrics.active_frequency_levels,
            self.sequence.len() as u64
        );
    }
}

impl<K: Hash + Eq, V> Default for LfuCache<K, V> {
    /// Creates a cache with [`DEFAULT_CAPACITY`](crate::config::DEFAULT_CAPACITY).
    fn default() -> Self {
        Self::init(LfuCacheConfig::default(), None)
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LfuCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.entries.len())
            .field("buckets", &self.sequence.len())
            .finish()
    }
}
