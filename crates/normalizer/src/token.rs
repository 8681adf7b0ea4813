use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-character wildcard marker preserved through normalization.
///
/// Provider playlists frequently arrive with mangled charsets; the byte that
/// replaced an unrecoverable character shows up as a literal `?`. The marker
/// survives the final fold and stands for "any single character" during
/// comparison.
pub const WILDCARD: char = '?';

/// The canonical comparable form of a channel name.
///
/// Uppercase, alphanumeric-only (plus [`WILDCARD`] markers), no whitespace or
/// punctuation. This is purely derived data used as a comparison key; it is
/// never an identity and never a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Wraps an already-normalized token.
    ///
    /// Callers should obtain tokens from [`Normalizer::normalize`](crate::Normalizer::normalize);
    /// this constructor exists for cache implementations and test doubles.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
