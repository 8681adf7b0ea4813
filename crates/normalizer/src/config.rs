//! Configuration for the channel-name normalization pipeline.
//!
//! All tag and marker tables are injected data, not hard-coded branches: the
//! boundary between "default region" and "foreign region", the quality
//! markers providers decorate names with, and the diacritic fold table are
//! expected to grow as new provider naming conventions are observed. The
//! seeded defaults cover the corpus the pipeline was built against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Configuration for [`Normalizer`](crate::Normalizer).
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// pipeline configs or loaded from YAML.
///
/// # Versioning
///
/// `version` tracks behavior changes. Two deployments running the same
/// version and the same tables produce byte-identical tokens for the same
/// input, on any machine. Version 0 is reserved and rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization configuration. Must be >= 1.
    #[serde(default = "NormalizeConfig::default_version")]
    pub version: u32,

    /// Spellings of the home-region tag, stripped unconditionally wherever
    /// they occur (leading, trailing, or delimiter-wrapped). The default
    /// region denotes the unmarked case and carries no disambiguating value.
    #[serde(default = "NormalizeConfig::default_region_tags")]
    pub default_region_tags: Vec<String>,

    /// Recognized foreign region codes (2-3 letters). A leading foreign tag
    /// is informative and is kept as a bare-letter prefix of the token; a
    /// trailing one is redundant decoration and is stripped. Codes that
    /// collide with common channel-name words (`TV`, `AD`, ...) are
    /// deliberately absent.
    #[serde(default = "NormalizeConfig::default_region_codes")]
    pub region_codes: Vec<String>,

    /// Marketing qualifier words that may precede a region tag (`VIP|RO|:`).
    #[serde(default = "NormalizeConfig::default_marketing_markers")]
    pub marketing_markers: Vec<String>,

    /// Quality/format markers removed wherever they appear as whole words.
    #[serde(default = "NormalizeConfig::default_quality_markers")]
    pub quality_markers: Vec<String>,

    /// Transliterations for Latin letters that NFKD decomposition cannot
    /// reduce to ASCII on its own. Letters with combining-mark
    /// decompositions (the Romanian alphabet included) need no entry here.
    #[serde(default = "NormalizeConfig::default_fold_table")]
    pub fold_table: HashMap<char, String>,
}

impl NormalizeConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_region_tags() -> Vec<String> {
        ["RO", "ROM", "ROU", "ROMANIA", "RUMANIA"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub(crate) fn default_region_codes() -> Vec<String> {
        [
            "US", "UK", "FR", "AR", "DE", "ES", "IT", "HU", "MD", "BG", "TR", "GR", "RS", "UA",
            "PT", "NL", "PL", "SE", "NO", "DK", "FI", "AT", "CH", "BE", "CZ", "SK", "AL", "MK",
            "AE", "SA", "QA", "EG", "MA", "IN", "BR", "MX", "CA", "AU", "NZ", "JP", "KR", "CN",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    pub(crate) fn default_marketing_markers() -> Vec<String> {
        vec!["VIP".to_string()]
    }

    pub(crate) fn default_quality_markers() -> Vec<String> {
        [
            "HD", "FHD", "UHD", "SD", "4K", "8K", "HEVC", "H264", "H265", "HQ", "LQ",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    pub(crate) fn default_fold_table() -> HashMap<char, String> {
        [
            ('ß', "ss"),
            ('ø', "o"),
            ('Ø', "O"),
            ('đ', "d"),
            ('Đ', "D"),
            ('æ', "ae"),
            ('Æ', "AE"),
            ('œ', "oe"),
            ('Œ', "OE"),
            ('ł', "l"),
            ('Ł', "L"),
            ('þ', "th"),
            ('Þ', "TH"),
            ('ð', "d"),
            ('Ð', "D"),
        ]
        .iter()
        .map(|(c, s)| (*c, s.to_string()))
        .collect()
    }

    /// Validate the configuration tables.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.version == 0 {
            return Err(NormalizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        // The tag grammar only captures 2-16 letter candidates, so anything
        // outside that range would validate and then silently never strip.
        for tag in &self.default_region_tags {
            if !(2..=16).contains(&tag.len()) || !tag.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(NormalizeError::InvalidConfig(format!(
                    "default region tag {tag:?} must be 2-16 ASCII letters"
                )));
            }
        }
        for code in &self.region_codes {
            if !(2..=3).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(NormalizeError::InvalidConfig(format!(
                    "region code {code:?} must be 2-3 ASCII letters"
                )));
            }
        }
        for marker in self
            .marketing_markers
            .iter()
            .chain(self.quality_markers.iter())
        {
            if marker.is_empty() || !marker.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(NormalizeError::InvalidConfig(format!(
                    "marker {marker:?} must be non-empty and alphanumeric"
                )));
            }
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            default_region_tags: Self::default_region_tags(),
            region_codes: Self::default_region_codes(),
            marketing_markers: Self::default_marketing_markers(),
            quality_markers: Self::default_quality_markers(),
            fold_table: Self::default_fold_table(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = NormalizeConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.version, 1);
        assert!(cfg.default_region_tags.contains(&"RO".to_string()));
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(NormalizeError::InvalidConfig(msg)) if msg.contains("version")
        ));
    }

    #[test]
    fn default_tag_outside_recognizable_length_rejected() {
        for tag in ["R", "VERYLONGREGIONTAGX"] {
            let cfg = NormalizeConfig {
                default_region_tags: vec![tag.into()],
                ..Default::default()
            };
            assert!(
                matches!(
                    cfg.validate(),
                    Err(NormalizeError::InvalidConfig(msg)) if msg.contains(tag)
                ),
                "tag {tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn overlong_region_code_rejected() {
        let cfg = NormalizeConfig {
            region_codes: vec!["ROMANIA".into()],
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(NormalizeError::InvalidConfig(msg)) if msg.contains("ROMANIA")
        ));
    }

    #[test]
    fn non_alphanumeric_marker_rejected() {
        let cfg = NormalizeConfig {
            quality_markers: vec!["H.265".into()],
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_survives_serde_round_trip() {
        let cfg = NormalizeConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize");
        let back: NormalizeConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(cfg, back);
    }
}
