//! YAML configuration file support.
//!
//! Lets deployments define the whole reconciliation pipeline (normalizer tag
//! tables + matcher cache sizing) in a single YAML file and load it at
//! runtime. Every section is optional and falls back to the seeded defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! normalizer:
//!   version: 1
//!   default_region_tags: ["RO", "ROM", "ROU", "ROMANIA", "RUMANIA"]
//!   region_codes: ["US", "UK", "FR", "AR", "DE"]
//!   marketing_markers: ["VIP"]
//!   quality_markers: ["HD", "FHD", "UHD", "SD", "4K", "HEVC"]
//!
//! matcher:
//!   cache_capacity: 4096
//! ```

use std::fs;
use std::path::Path;

use matcher::ChannelMatcher;
use normalizer::NormalizeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level YAML configuration for the reconciliation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Configuration schema version string.
    #[serde(default = "PipelineConfig::default_version")]
    pub version: String,

    /// Normalization stage configuration (tag and marker tables).
    #[serde(default)]
    pub normalizer: NormalizeConfig,

    /// Matching stage configuration.
    #[serde(default)]
    pub matcher: MatcherConfig,
}

/// Matching stage section of the pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Capacity of the normalization memoization cache. Sized for the raw
    /// name population of one playlist scan; evictions only cost recompute.
    #[serde(default = "MatcherConfig::default_cache_capacity")]
    pub cache_capacity: usize,
}

impl MatcherConfig {
    pub(crate) fn default_cache_capacity() -> usize {
        4096
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            cache_capacity: Self::default_cache_capacity(),
        }
    }
}

impl PipelineConfig {
    pub(crate) fn default_version() -> String {
        "1.0".to_string()
    }

    /// Parse a pipeline configuration from a YAML string and validate it.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigLoadError> {
        let config: PipelineConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a pipeline configuration from a YAML file and validate it.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!(path = %path.display(), version = %config.version, "loaded pipeline configuration");
        Ok(config)
    }

    /// Validate the configuration across all sections.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "version must not be empty".into(),
            ));
        }
        if self.matcher.cache_capacity == 0 {
            return Err(ConfigLoadError::Validation(
                "matcher.cache_capacity must be greater than zero".into(),
            ));
        }
        self.normalizer
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))
    }

    /// Build a ready-to-use [`ChannelMatcher`] from this configuration.
    pub fn build_matcher(&self) -> Result<ChannelMatcher, ConfigLoadError> {
        self.validate()?;
        ChannelMatcher::with_cache_capacity(self.normalizer.clone(), self.matcher.cache_capacity)
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            normalizer: NormalizeConfig::default(),
            matcher: MatcherConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_falls_back_to_defaults() {
        let config = PipelineConfig::from_yaml_str("{}").expect("parse empty mapping");
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn sections_override_selectively() {
        let yaml = r#"
version: "2.0"
normalizer:
  version: 3
  quality_markers: ["HD"]
matcher:
  cache_capacity: 16
"#;
        let config = PipelineConfig::from_yaml_str(yaml).expect("parse");
        assert_eq!(config.version, "2.0");
        assert_eq!(config.normalizer.version, 3);
        assert_eq!(config.normalizer.quality_markers, vec!["HD".to_string()]);
        // Untouched tables keep their defaults.
        assert!(config
            .normalizer
            .default_region_tags
            .contains(&"RO".to_string()));
        assert_eq!(config.matcher.cache_capacity, 16);
    }

    #[test]
    fn invalid_sections_rejected() {
        assert!(matches!(
            PipelineConfig::from_yaml_str("version: \"\""),
            Err(ConfigLoadError::Validation(_))
        ));
        assert!(matches!(
            PipelineConfig::from_yaml_str("matcher:\n  cache_capacity: 0"),
            Err(ConfigLoadError::Validation(_))
        ));
        assert!(matches!(
            PipelineConfig::from_yaml_str("normalizer:\n  version: 0"),
            Err(ConfigLoadError::Validation(_))
        ));
    }

    #[test]
    fn malformed_yaml_reported_as_parse_error() {
        assert!(matches!(
            PipelineConfig::from_yaml_str(": not yaml : ["),
            Err(ConfigLoadError::YamlParse(_))
        ));
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let config = PipelineConfig::default();
        let yaml = serde_yaml::to_string(&config).expect("serialize");
        let back = PipelineConfig::from_yaml_str(&yaml).expect("reparse");
        assert_eq!(config, back);
    }
}
