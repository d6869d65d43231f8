//! Error types returned by cache lookups.

use core::fmt;

/// Result type alias for fallible cache reads.
pub type Result<T> = core::result::Result<T, CacheError>;

/// Errors returned by cache operations.
///
/// A missing key is an expected outcome of probing the cache, not an
/// exceptional one; callers are expected to branch on it.
///
/// ```
/// use bucket_lfu::{CacheError, LfuCache};
///
/// let mut cache: LfuCache<&str, i32> = LfuCache::new(2);
/// assert_eq!(cache.get(&"missing"), Err(CacheError::KeyNotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CacheError {
    /// The requested key is not present in the cache.
    KeyNotFound,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::KeyNotFound => write!(f, "key not found"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CacheError {}
