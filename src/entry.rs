//! Cache entries and frequency buckets.
//!
//! An [`Entry`] holds one key-value pair and the handle of the bucket it is
//! currently linked into. A [`Bucket`] groups every entry sharing one access
//! frequency; its entry list is ordered by recency of touch, oldest at the
//! front and most recently touched at the back.
//!
//! ```text
//!   bucket sequence (ascending frequency)
//!   ┌───────────────┐      ┌───────────────┐      ┌───────────────┐
//!   │ freq 1        │ ───► │ freq 2        │ ───► │ freq 5        │
//!   │ oldest        │ ◄─── │ oldest        │ ◄─── │ oldest        │
//!   │   [k4]        │      │   [k1]        │      │   [k2]        │
//!   │   [k6]        │      │   [k3]        │      │               │
//!   │ newest        │      │ newest        │      │ newest        │
//!   └───────────────┘      └───────────────┘      └───────────────┘
//! ```

use crate::list::{Handle, List};

/// A cached key-value pair.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// Bucket this entry is linked into. Non-owning.
    pub(crate) bucket: Handle,
}

impl<K, V> Entry<K, V> {
    #[inline]
    pub(crate) fn new(key: K, value: V, bucket: Handle) -> Self {
        Entry { key, value, bucket }
    }
}

/// All entries currently sharing one access frequency.
#[derive(Debug)]
pub(crate) struct Bucket {
    pub(crate) frequency: u64,
    pub(crate) entries: List,
}

impl Bucket {
    #[inline]
    pub(crate) fn new(frequency: u64) -> Self {
        debug_assert!(frequency >= 1);
        Bucket {
            frequency,
            entries: List::new(),
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::Arena;

    #[test]
    fn test_new_bucket_is_empty() {
        let bucket = Bucket::new(3);
        assert_eq!(bucket.frequency, 3);
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_entry_points_at_its_bucket() {
        let mut buckets = Arena::with_capacity(1);
        let b = buckets.insert(Bucket::new(1));
        let mut entries = Arena::with_capacity(1);
        let e = entries.insert(Entry::new("k", 7, b));

        buckets.get_mut(b).entries.push_back(&mut entries, e);

        assert!(!buckets.get(b).is_empty());
        assert_eq!(entries.get(e).bucket, b);
        assert_eq!(buckets.get(entries.get(e).bucket).frequency, 1);
    }
}
