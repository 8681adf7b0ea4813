use std::borrow::Cow;

use regex::Regex;

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;

/// Compiled annotation, quality-marker, and variant-suffix rules.
pub(crate) struct MarkerRules {
    annotation: Regex,
    quality: Option<Regex>,
    variant_suffix: Regex,
}

impl MarkerRules {
    pub(crate) fn compile(cfg: &NormalizeConfig) -> Result<Self, NormalizeError> {
        let annotation = compile(r"\([^)]*\)|\[[^\]]*\]")?;

        // Longest marker first so overlapping alternatives cannot shadow
        // each other at the same start position.
        let quality = if cfg.quality_markers.is_empty() {
            None
        } else {
            let mut markers: Vec<String> =
                cfg.quality_markers.iter().map(|m| regex::escape(m)).collect();
            markers.sort_by_key(|m| std::cmp::Reverse(m.len()));
            Some(compile(&format!(r"(?i)\b(?:{})\b", markers.join("|")))?)
        };

        let variant_suffix = compile(r"(?i)\s[A-Za-z]\d+-\d+\s*$")?;

        Ok(Self {
            annotation,
            quality,
            variant_suffix,
        })
    }

    /// Removes every parenthesized or bracketed substring, regardless of
    /// content.
    pub(crate) fn strip_annotations<'a>(&self, name: &'a str) -> Cow<'a, str> {
        self.annotation.replace_all(name, " ")
    }

    /// Removes configured quality/format markers wherever they appear as
    /// whole words.
    pub(crate) fn strip_quality<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match &self.quality {
            Some(quality) => quality.replace_all(name, " "),
            None => Cow::Borrowed(name),
        }
    }

    /// Removes a terminating stream-variant tag (`S1-1` and the like).
    pub(crate) fn strip_variant_suffix<'a>(&self, name: &'a str) -> Cow<'a, str> {
        self.variant_suffix.replace(name, "")
    }
}

fn compile(pattern: &str) -> Result<Regex, NormalizeError> {
    Regex::new(pattern)
        .map_err(|e| NormalizeError::InvalidConfig(format!("failed to compile marker rules: {e}")))
}
