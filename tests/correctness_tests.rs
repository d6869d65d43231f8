//! Correctness Tests for the LFU Cache
//!
//! Validates eviction choice, frequency accounting, and iteration order
//! using small caches and deterministic access patterns. Each test states
//! explicitly which key must be evicted after a put.
//!
//! ## Test Strategy
//! - Small cache sizes (1-5 entries) for predictable behavior
//! - Explicit checks for which key was evicted after each put
//! - Iteration order checked against hand-computed frequencies

use bucket_lfu::config::LfuCacheConfig;
use bucket_lfu::{CacheError, CacheMetrics, LfuCache};

// ============================================================================
// HELPERS
// ============================================================================

/// Helper to create an LfuCache with the given capacity
fn make_lfu<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    LfuCache::init(LfuCacheConfig { capacity: cap }, None)
}

/// Keys in `all()` order
fn order<K: std::hash::Hash + Eq + Clone, V>(cache: &LfuCache<K, V>) -> Vec<K> {
    cache.all().map(|(k, _)| k.clone()).collect()
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_default_capacity_is_five() {
    let cache: LfuCache<u32, u32> = LfuCache::default();
    assert_eq!(cache.capacity(), 5);
    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
}

#[test]
fn test_capacity_is_fixed() {
    let mut cache = make_lfu(3);
    for i in 0..10 {
        cache.put(i, i);
        assert_eq!(cache.capacity(), 3);
    }
}

// ============================================================================
// ROUND TRIP AND FREQUENCY
// ============================================================================

#[test]
fn test_put_then_get_round_trip() {
    let mut cache = make_lfu(4);
    cache.put("k", 42);
    assert_eq!(cache.key_frequency(&"k"), Ok(1));
    assert_eq!(cache.get(&"k"), Ok(&42));
    assert_eq!(cache.key_frequency(&"k"), Ok(2));
}

#[test]
fn test_frequency_after_n_accesses() {
    let mut cache = make_lfu(2);
    cache.put("k", 0);
    for n in 2..=20u64 {
        if n % 2 == 0 {
            cache.get(&"k").unwrap();
        } else {
            cache.put("k", n);
        }
        assert_eq!(cache.key_frequency(&"k"), Ok(n));
    }
    assert_eq!(cache.peek(&"k"), Some(&19));
}

#[test]
fn test_put_existing_overwrites_value() {
    let mut cache = make_lfu(2);
    cache.put("a", 1);
    cache.put("a", 2);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"a"), Ok(&2));
}

// ============================================================================
// EVICTION
// ============================================================================

#[test]
fn test_overflow_with_no_reads_evicts_first_inserted() {
    for cap in 1..=5 {
        let mut cache = make_lfu(cap);
        for k in 0..=cap {
            cache.put(k, k);
        }
        assert_eq!(cache.len(), cap);
        assert_eq!(cache.get(&0), Err(CacheError::KeyNotFound));
        for k in 1..=cap {
            assert!(cache.contains_key(&k), "cap {cap}: key {k} missing");
        }
    }
}

#[test]
fn test_frequency_wins_over_recency() {
    let mut cache = make_lfu(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.get(&"a").unwrap();
    cache.put("c", 3);

    assert_eq!(cache.get(&"b"), Err(CacheError::KeyNotFound));
    assert_eq!(cache.get(&"a"), Ok(&1));
    assert_eq!(cache.get(&"c"), Ok(&3));
}

#[test]
fn test_lru_tie_break_at_higher_frequency() {
    let mut cache = make_lfu(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    cache.get(&"b").unwrap();
    cache.get(&"a").unwrap();
    cache.get(&"c").unwrap();

    // All at frequency 2, touched in order b, a, c.
    cache.put("d", 4);
    assert!(!cache.contains_key(&"b"));

    // "d" is alone at frequency 1, so it goes next.
    cache.put("e", 5);
    assert!(!cache.contains_key(&"d"));
    assert_eq!(order(&cache), ["c", "a", "e"]);
}

#[test]
fn test_exactly_one_eviction_per_overflowing_put() {
    let mut cache = make_lfu(4);
    for k in 0..4 {
        cache.put(k, ());
    }
    for k in 4..100 {
        let before = cache.len();
        cache.put(k, ());
        assert_eq!(cache.len(), before);
    }
    assert_eq!(cache.lfu_metrics().core.evictions, 96);
}

#[test]
fn test_new_entry_can_be_evicted_by_next_insert() {
    let mut cache = make_lfu(2);
    cache.put("hot", 1);
    cache.get(&"hot").unwrap();
    cache.put("x", 2);
    cache.put("y", 3);
    cache.put("z", 4);

    assert!(cache.contains_key(&"hot"));
    assert!(cache.contains_key(&"z"));
    assert!(!cache.contains_key(&"x"));
    assert!(!cache.contains_key(&"y"));
}

#[test]
fn test_evicted_key_reenters_at_frequency_one() {
    let mut cache = make_lfu(1);
    cache.put("a", 1);
    cache.get(&"a").unwrap();
    cache.get(&"a").unwrap();
    cache.put("b", 2);
    cache.put("a", 3);
    assert_eq!(cache.key_frequency(&"a"), Ok(1));
    assert_eq!(cache.get(&"b"), Err(CacheError::KeyNotFound));
}

// ============================================================================
// ITERATION
// ============================================================================

#[test]
fn test_all_orders_by_descending_frequency() {
    let mut cache = make_lfu(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    cache.get(&"b").unwrap();
    cache.get(&"c").unwrap();
    cache.get(&"c").unwrap();

    assert_eq!(order(&cache), ["c", "b", "a"]);
    let pairs: Vec<_> = cache.all().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, [("c", 3), ("b", 2), ("a", 1)]);
}

#[test]
fn test_all_most_recent_first_within_frequency() {
    let mut cache = make_lfu(4);
    cache.put(1, ());
    cache.put(2, ());
    cache.put(3, ());
    cache.put(4, ());
    cache.get(&3).unwrap();
    cache.get(&1).unwrap();

    assert_eq!(order(&cache), [1, 3, 4, 2]);
}

#[test]
fn test_all_is_restartable_and_read_only() {
    let mut cache = make_lfu(3);
    cache.put("a", 1);
    cache.put("b", 2);

    let mut iter = cache.all();
    assert_eq!(iter.next(), Some((&"b", &2)));

    assert_eq!(order(&cache), ["b", "a"]);
    assert_eq!(order(&cache), ["b", "a"]);
    assert_eq!(cache.key_frequency(&"a"), Ok(1));
    assert_eq!(cache.key_frequency(&"b"), Ok(1));
    assert_eq!(cache.lfu_metrics().core.requests, 0);
}

// ============================================================================
// MISSES
// ============================================================================

#[test]
fn test_get_absent_key_fails_without_side_effects() {
    let mut cache = make_lfu(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.get(&"b").unwrap();
    cache.put("c", 3);
    cache.put("d", 4); // evicts "a"

    let before: Vec<_> = cache.all().map(|(k, v)| (*k, *v)).collect();
    let freqs: Vec<_> = before
        .iter()
        .map(|(k, _)| cache.key_frequency(k).unwrap())
        .collect();

    assert_eq!(cache.get(&"never"), Err(CacheError::KeyNotFound));
    assert_eq!(cache.get(&"a"), Err(CacheError::KeyNotFound));
    assert_eq!(cache.key_frequency(&"a"), Err(CacheError::KeyNotFound));

    let after: Vec<_> = cache.all().map(|(k, v)| (*k, *v)).collect();
    let freqs_after: Vec<_> = after
        .iter()
        .map(|(k, _)| cache.key_frequency(k).unwrap())
        .collect();
    assert_eq!(before, after);
    assert_eq!(freqs, freqs_after);
    assert_eq!(cache.len(), 3);
}

// ============================================================================
// ZERO CAPACITY
// ============================================================================

#[test]
fn test_zero_capacity_cache_stays_empty() {
    let mut cache: LfuCache<&str, i32> = make_lfu(0);
    cache.put("a", 1);
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.capacity(), 0);
    assert_eq!(cache.get(&"a"), Err(CacheError::KeyNotFound));
    assert_eq!(cache.all().next(), None);
}

// ============================================================================
// METRICS
// ============================================================================

#[test]
fn test_metrics_report() {
    let mut cache = make_lfu(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.get(&"a").unwrap();
    cache.get(&"a").unwrap();
    let _ = cache.get(&"zzz");
    cache.put("c", 3);

    let metrics = cache.metrics();
    assert_eq!(metrics["requests"], 3.0);
    assert_eq!(metrics["cache_hits"], 2.0);
    assert_eq!(metrics["cache_misses"], 1.0);
    assert_eq!(metrics["evictions"], 1.0);
    assert_eq!(metrics["insertions"], 3.0);
    assert_eq!(metrics["max_frequency"], 3.0);
    // Buckets 1 (holding "c") and 3 (holding "a").
    assert_eq!(metrics["active_frequency_levels"], 2.0);
    assert_eq!(cache.algorithm_name(), "LFU");
}

#[test]
fn test_error_display() {
    assert_eq!(CacheError::KeyNotFound.to_string(), "key not found");
}

#[cfg(feature = "std")]
#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(CacheError::KeyNotFound);
    assert_eq!(err.to_string(), "key not found");
}
