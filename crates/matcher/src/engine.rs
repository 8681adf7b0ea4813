use std::sync::Arc;
use std::time::Instant;

use normalizer::{NormalizeConfig, NormalizedName, Normalizer, WILDCARD};
use tracing::trace;

use crate::cache::{LruNameCache, NameCache};
use crate::metrics::metrics_recorder;
use crate::types::{ChannelName, MatchError};


/// Decides whether a raw provider label denotes a catalog channel.
///
/// Owns a [`Normalizer`] and an injected [`NameCache`]; both are shared,
/// immutable state, so a single matcher can be used concurrently from any
/// number of threads.
pub struct ChannelMatcher {
    normalizer: Normalizer,
    cache: Arc<dyn NameCache>,
}

impl ChannelMatcher {
    /// Construct a matcher from a normalizer config and an explicit cache
    /// capability.
    pub fn new(cfg: NormalizeConfig, cache: Arc<dyn NameCache>) -> Result<Self, MatchError> {
        Ok(Self {
            normalizer: Normalizer::new(cfg)?,
            cache,
        })
    }

    /// Convenience constructor backed by an [`LruNameCache`] of the given
    /// capacity.
    pub fn with_cache_capacity(cfg: NormalizeConfig, capacity: usize) -> Result<Self, MatchError> {
        Self::new(cfg, Arc::new(LruNameCache::new(capacity)))
    }

    /// Normalize a raw channel label, consulting the cache first.
    ///
    /// Keys are the exact raw string. On a miss the token is computed and
    /// stored; because normalization is pure, a concurrent duplicate
    /// computation is harmless.
    pub fn normalize_name(&self, raw: &str) -> NormalizedName {
        if let Some(token) = self.cache.get(raw) {
            if let Some(recorder) = metrics_recorder() {
                recorder.record_cache_lookup(true);
            }
            return token;
        }
        if let Some(recorder) = metrics_recorder() {
            recorder.record_cache_lookup(false);
        }

        let token = self.normalizer.normalize(raw);
        self.cache.put(raw, token.clone());
        token
    }

    /// Does `provider_raw` denote the same channel as `entry`?
    ///
    /// True when the normalized provider token equals the normalized
    /// canonical name or the normalized alias (when present) under
    /// wildcard-tolerant equality. This is a binary predicate per pair;
    /// picking a best candidate among several true matches belongs to the
    /// aggregation layer.
    pub fn does_match(&self, entry: &ChannelName, provider_raw: &str) -> bool {
        let start = Instant::now();

        let provider = self.normalize_name(provider_raw);
        let canonical = self.normalize_name(entry.canonical_name());

        let mut matched = wildcard_eq(provider.as_str(), canonical.as_str());
        if !matched {
            if let Some(alias) = entry.alias() {
                let alias = self.normalize_name(alias);
                matched = wildcard_eq(provider.as_str(), alias.as_str());
            }
        }

        trace!(
            provider = %provider,
            canonical = %canonical,
            matched,
            "channel name comparison"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(matched, start.elapsed());
        }
        matched
    }
}

/// Wildcard-tolerant token equality.
///
/// Two tokens are equal when they have the same length and, at every
/// position, the characters are identical or at least one side is the
/// [`WILDCARD`] marker. This is the only tolerance granted: no substring,
/// prefix, or edit-distance matching, and tokens of different length never
/// match. Comparison is per scalar value, so one `?` masks exactly one
/// original character even in mixed-script tokens.
pub fn wildcard_eq(left: &str, right: &str) -> bool {
    let mut left = left.chars();
    let mut right = right.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) => {
                if l != r && l != WILDCARD && r != WILDCARD {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
