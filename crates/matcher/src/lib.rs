//! # Channel matching layer
//!
//! ## Purpose
//!
//! `matcher` sits on top of the name-normalization pipeline (`normalizer`)
//! and decides whether a raw, provider-supplied channel label denotes the
//! same channel as a catalog entry. It is the equality contract the rest of
//! playlist aggregation depends on: matching is exact equality of two
//! deterministically normalized tokens, with a single narrow tolerance for
//! charset-corruption wildcards.
//!
//! In a typical deployment you will:
//! - Load catalog entries ([`ChannelName`]: canonical name + optional
//!   provider-style alias) from your catalog source.
//! - Build one [`ChannelMatcher`] with a [`NameCache`] sized for the scan,
//!   and call [`ChannelMatcher::does_match`] for each (entry, provider name)
//!   candidate pair.
//!
//! ## Core Types
//!
//! - [`ChannelName`]: one catalog entry's known textual identities.
//! - [`NameCache`]: get/put memoization capability, keyed by exact raw
//!   string; [`LruNameCache`] and [`NoopNameCache`] are provided.
//! - [`ChannelMatcher`]: owns the normalizer and the injected cache.
//! - [`wildcard_eq`]: the wildcard-tolerant equality rule.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use matcher::{ChannelMatcher, ChannelName, LruNameCache};
//! use normalizer::NormalizeConfig;
//!
//! let matcher = ChannelMatcher::new(
//!     NormalizeConfig::default(),
//!     Arc::new(LruNameCache::new(4096)),
//! )
//! .expect("valid config");
//!
//! let entry = ChannelName::with_alias("Somax", "RO: Somax TV").expect("valid entry");
//! assert!(matcher.does_match(&entry, "Somax TV"));
//! assert!(!matcher.does_match(&entry, "RO: Digi Sport 2"));
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-decision latency and cache hit rates. Match decisions are also
//! emitted as `tracing` trace events.

pub mod cache;
pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::cache::{LruNameCache, NameCache, NoopNameCache};
pub use crate::engine::{wildcard_eq, ChannelMatcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{ChannelName, MatchError};
