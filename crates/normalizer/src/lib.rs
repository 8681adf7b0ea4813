//! Channel-name normalization for IPTV playlist reconciliation.
//!
//! Third-party playlists spell the same channel a dozen ways: country tags
//! (`RO:`, `|RO|`, `RO-`), quality markers (`HD`, `FHD`, `HEVC`), resolution
//! or freshness annotations (`[768p]`, `(New!)`), stream-variant suffixes
//! (`S1-1`), diacritics, and charset-mangled characters surfacing as `?`.
//! This crate reduces any such label to a deterministic comparable token.
//!
//! ## What we do
//!
//! - Region-tag resolution: the home-region tag is stripped everywhere, a
//!   leading foreign code is kept as an informative prefix
//! - Annotation stripping (parenthesized/bracketed, content-agnostic)
//! - Quality/format marker and variant-suffix removal
//! - Diacritic transliteration with `?` preserved as a corruption wildcard
//! - Final fold to uppercase alphanumerics
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same input + same config
//! = same token on any machine, and normalizing a token again returns it
//! unchanged.
//!
//! All tag and marker tables come from [`NormalizeConfig`]; nothing about a
//! particular region or provider is hard-coded.

mod config;
mod error;
mod markers;
mod pipeline;
mod region;
mod token;
mod translit;

pub use crate::config::NormalizeConfig;
pub use crate::error::NormalizeError;
pub use crate::pipeline::{normalize, Normalizer};
pub use crate::token::{NormalizedName, WILDCARD};
