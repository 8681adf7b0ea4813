use normalizer::NormalizeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The known textual identities of one catalog channel entry.
///
/// `canonical_name` is the authoritative display name. `alias` is an
/// alternate, provider-style spelling (it may itself carry region tags or
/// quality markers) used only to widen matching, never for display. Entries
/// are built once when the catalog loads and are immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelName {
    canonical_name: String,
    alias: Option<String>,
}

impl ChannelName {
    /// Creates an entry with no alias. The canonical name must be non-empty.
    pub fn new(canonical_name: impl Into<String>) -> Result<Self, MatchError> {
        let canonical_name = canonical_name.into();
        if canonical_name.trim().is_empty() {
            return Err(MatchError::InvalidChannelName(
                "canonical name must not be empty".into(),
            ));
        }
        Ok(Self {
            canonical_name,
            alias: None,
        })
    }

    /// Creates an entry with an alias. Both names must be non-empty; the
    /// alias may repeat the canonical spelling (some catalogs do this), it
    /// just cannot be blank.
    pub fn with_alias(
        canonical_name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Result<Self, MatchError> {
        let mut entry = Self::new(canonical_name)?;
        let alias = alias.into();
        if alias.trim().is_empty() {
            return Err(MatchError::InvalidChannelName(
                "alias must not be empty when present".into(),
            ));
        }
        entry.alias = Some(alias);
        Ok(entry)
    }

    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A catalog entry violated the channel-name invariants.
    #[error("invalid channel name: {0}")]
    InvalidChannelName(String),
    /// The normalizer configuration was rejected.
    #[error(transparent)]
    Normalizer(#[from] NormalizeError),
}
