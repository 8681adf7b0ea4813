//! # chanrec: channel-name reconciliation for IPTV playlist aggregation
//!
//! Providers label the same channel in wildly different ways (`"RO: DIGI
//! Sport 2"`, `"|RO| Digi Sport 2 FHD"`, `"Digi Sport 2 (backup)"`). chanrec
//! reduces every label to one canonical comparison token and decides, per
//! (catalog entry, provider label) pair, whether they denote the same
//! channel.
//!
//! This crate is an umbrella that re-exports the two member crates and adds
//! YAML configuration loading:
//!
//! - [`normalizer`](https://docs.rs/chanrec-normalizer): the pure, staged
//!   name-normalization pipeline.
//! - [`matcher`](https://docs.rs/chanrec-matcher): wildcard-tolerant
//!   matching on normalized tokens, with a pluggable memoization cache.
//!
//! ## Quick Start
//!
//! ```
//! use chanrec::config::PipelineConfig;
//! use chanrec::ChannelName;
//!
//! let matcher = PipelineConfig::default()
//!     .build_matcher()
//!     .expect("default config is valid");
//!
//! let entry = ChannelName::with_alias("Digi Sport 2", "RO: Digi Sport 2")
//!     .expect("valid entry");
//! assert!(matcher.does_match(&entry, "RO: DIGI Sport 2"));
//! assert!(!matcher.does_match(&entry, "RO: Telekom Sport 2"));
//! ```
//!
//! To tune the tag tables or cache sizing, load a [`config::PipelineConfig`]
//! from YAML with [`config::PipelineConfig::from_yaml_file`] instead of using
//! the defaults.

pub mod config;

pub use matcher::{
    set_match_metrics, wildcard_eq, ChannelMatcher, ChannelName, LruNameCache, MatchError,
    MatchMetrics, NameCache, NoopNameCache,
};
pub use normalizer::{
    normalize, NormalizeConfig, NormalizeError, NormalizedName, Normalizer, WILDCARD,
};

pub use crate::config::{ConfigLoadError, MatcherConfig, PipelineConfig};
