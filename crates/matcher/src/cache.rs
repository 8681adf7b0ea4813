//! Memoization of normalization results.
//!
//! A playlist scan evaluates a catalog x provider-list cross product, so the
//! same raw names are normalized over and over. The matcher is handed a
//! [`NameCache`] capability explicitly (never reached through ambient
//! state), keyed by the exact raw string. Because normalization is pure and
//! deterministic, a race that computes the same token twice is benign; an
//! implementation that corrupts a stored mapping violates the contract.

use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use lru::LruCache;
use normalizer::NormalizedName;

/// Lookup contract for memoized normalization results.
///
/// `get`/`put` only ever affect performance, never outcomes: the matcher
/// recomputes on a miss and stores the result, so a cache that forgets
/// (or stores nothing at all) is still correct.
pub trait NameCache: Send + Sync {
    /// Returns the token previously stored for this exact raw string.
    fn get(&self, raw: &str) -> Option<NormalizedName>;

    /// Stores the token computed for this exact raw string.
    fn put(&self, raw: &str, token: NormalizedName);
}

/// Bounded in-memory cache with least-recently-used eviction.
pub struct LruNameCache {
    entries: Mutex<LruCache<String, NormalizedName>>,
}

impl LruNameCache {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity clamped to >= 1");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NameCache for LruNameCache {
    fn get(&self, raw: &str) -> Option<NormalizedName> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(raw)
            .cloned()
    }

    fn put(&self, raw: &str, token: NormalizedName) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(raw.to_string(), token);
    }
}

/// Cache that stores nothing.
///
/// Forces the matcher to recompute every normalization; useful in tests to
/// prove the cache never changes outcomes.
pub struct NoopNameCache;

impl NameCache for NoopNameCache {
    fn get(&self, _raw: &str) -> Option<NormalizedName> {
        None
    }

    fn put(&self, _raw: &str, _token: NormalizedName) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lru_cache_stores_and_evicts() {
        let cache = LruNameCache::new(2);
        cache.put("a", NormalizedName::new("A"));
        cache.put("b", NormalizedName::new("B"));
        cache.put("c", NormalizedName::new("C"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("c"), Some(NormalizedName::new("C")));
    }

    #[test]
    fn keys_are_exact_raw_strings() {
        let cache = LruNameCache::new(8);
        cache.put("RO: HBO", NormalizedName::new("HBO"));
        assert_eq!(cache.get("ro: hbo"), None);
        assert_eq!(cache.get("RO: HBO "), None);
        assert_eq!(cache.get("RO: HBO"), Some(NormalizedName::new("HBO")));
    }

    #[test]
    fn noop_cache_never_stores() {
        let cache = NoopNameCache;
        cache.put("a", NormalizedName::new("A"));
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn zero_capacity_clamped() {
        let cache = LruNameCache::new(0);
        cache.put("a", NormalizedName::new("A"));
        assert_eq!(cache.get("a"), Some(NormalizedName::new("A")));
    }
}
