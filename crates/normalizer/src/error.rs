use thiserror::Error;

/// Errors that can occur while building a normalizer.
///
/// Normalization itself is total: once a [`Normalizer`](crate::Normalizer)
/// has been constructed, every input string (including the empty string)
/// produces a token. Only configuration can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
