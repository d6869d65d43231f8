//! Frequency-ordered iteration over cache contents.

use core::fmt;
use core::iter::FusedIterator;

use crate::entry::{Bucket, Entry};
use crate::list::{Arena, Handle};

/// Borrowing iterator over `(&K, &V)` pairs, highest frequency first.
///
/// Within a frequency, the most recently touched entry comes first. The
/// iterator walks the bucket sequence from its tail and each bucket's entry
/// list from its tail, so it allocates nothing and visits every entry once.
///
/// Created by [`LfuCache::all`](crate::LfuCache::all). Iterating does not
/// count as an access and leaves frequencies untouched; calling `all` again
/// restarts from the top.
pub struct Iter<'a, K, V> {
    entries: &'a Arena<Entry<K, V>>,
    buckets: &'a Arena<Bucket>,
    next_bucket: Option<Handle>,
    next_entry: Option<Handle>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(
        entries: &'a Arena<Entry<K, V>>,
        buckets: &'a Arena<Bucket>,
        last_bucket: Option<Handle>,
    ) -> Self {
        Iter {
            entries,
            buckets,
            next_bucket: last_bucket,
            next_entry: None,
            remaining: entries.len(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(handle) = self.next_entry {
                let node = self.entries.node(handle);
                self.next_entry = node.prev();
                self.remaining -= 1;
                let entry = node.value();
                return Some((&entry.key, &entry.value));
            }

            // Current bucket exhausted (or not started); step to the next lower one.
            let bucket = self.next_bucket?;
            let node = self.buckets.node(bucket);
            self.next_entry = node.value().entries.back();
            self.next_bucket = node.prev();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            entries: self.entries,
            buckets: self.buckets,
            next_bucket: self.next_bucket,
            next_entry: self.next_entry,
            remaining: self.remaining,
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::LfuCache;
    use std::vec::Vec;

    #[test]
    fn test_empty_cache_yields_nothing() {
        let cache: LfuCache<u32, u32> = LfuCache::new(3);
        let mut iter = cache.all();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_descending_frequency_then_most_recent_first() {
        let mut cache = LfuCache::new(5);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        cache.put("d", 4);
        cache.get(&"c").unwrap();
        cache.get(&"a").unwrap();

        // freq 2: c then a touched, so a is newer; freq 1: b, d inserted in order.
        let keys: Vec<_> = cache.all().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["a", "c", "d", "b"]);
    }

    #[test]
    fn test_partial_iteration_does_not_mutate() {
        let mut cache = LfuCache::new(3);
        cache.put(1, "one");
        cache.put(2, "two");
        cache.put(3, "three");

        let first = cache.all().next();
        assert_eq!(first, Some((&3, &"three")));

        for key in 1..=3 {
            assert_eq!(cache.key_frequency(&key), Ok(1));
        }
        let again: Vec<_> = cache.all().map(|(k, _)| *k).collect();
        assert_eq!(again, [3, 2, 1]);
    }

    #[test]
    fn test_size_hint_counts_down() {
        let mut cache = LfuCache::new(3);
        cache.put(1, ());
        cache.put(2, ());
        let mut iter = cache.all();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        iter.next();
        assert_eq!(iter.len(), 1);
        let cloned = iter.clone();
        assert_eq!(cloned.count(), 1);
    }
}
