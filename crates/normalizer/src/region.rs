use std::collections::HashSet;

use regex::Regex;

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;

/// Compiled region-tag grammar.
///
/// Recognizes tags in the leading position (`RO: `, `RO-`, `RO"`, `|RO|`,
/// optionally preceded by a marketing marker), bare or delimited tags in the
/// trailing position, and delimiter-wrapped default tags anywhere. The
/// classification of a captured code against the configured tag sets happens
/// here, not in the patterns, so the tables stay pure data.
pub(crate) struct RegionRules {
    leading: Regex,
    trailing: Regex,
    delimited_default: Regex,
    default_tags: HashSet<String>,
    region_codes: HashSet<String>,
}

impl RegionRules {
    pub(crate) fn compile(cfg: &NormalizeConfig) -> Result<Self, NormalizeError> {
        let marker = if cfg.marketing_markers.is_empty() {
            String::new()
        } else {
            let alt = cfg
                .marketing_markers
                .iter()
                .map(|m| regex::escape(m))
                .collect::<Vec<_>>()
                .join("|");
            format!("(?:(?:{alt})\\s*)?")
        };

        // Branch 1 captures `|CODE|` (optional colon), branch 2 a bare code
        // followed by a colon, hyphen, or double quote.
        let leading = compile(&format!(
            "(?i)^\\s*{marker}(?:\\|([A-Za-z]{{2,16}})\\|\\s*:?|([A-Za-z]{{2,16}})\\s*[:\"-])\\s*"
        ))?;
        let trailing = compile("(?i)(?:\\s+([A-Za-z]{2,16})|\\s*\\|([A-Za-z]{2,16})\\|)[\\s.]*$")?;

        let default_alt = cfg
            .default_region_tags
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let delimited_default = compile(&format!("(?i)\\|(?:{default_alt})\\|\\s*:?"))?;

        Ok(Self {
            leading,
            trailing,
            delimited_default,
            default_tags: upper_set(&cfg.default_region_tags),
            region_codes: upper_set(&cfg.region_codes),
        })
    }

    /// Applies the region-tag stage.
    ///
    /// Returns the retained foreign-code prefix (if any) and the remainder of
    /// the name with recognized tags removed. Unrecognized codes are left in
    /// place as ordinary words.
    pub(crate) fn resolve(&self, name: &str) -> (Option<String>, String) {
        let mut rest = name;
        let mut prefix = None;

        if let Some(caps) = self.leading.captures(rest) {
            let code = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_uppercase())
                .unwrap_or_default();
            if self.default_tags.contains(&code) {
                rest = &rest[caps.get(0).map_or(0, |m| m.end())..];
            } else if self.region_codes.contains(&code) {
                prefix = Some(code);
                rest = &rest[caps.get(0).map_or(0, |m| m.end())..];
            }
        }

        let mut rest = rest.to_string();
        loop {
            let Some(caps) = self.trailing.captures(&rest) else {
                break;
            };
            let code = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_uppercase())
                .unwrap_or_default();
            if !self.default_tags.contains(&code) && !self.region_codes.contains(&code) {
                break;
            }
            rest.truncate(caps.get(0).map_or(0, |m| m.start()));
        }

        let rest = self.delimited_default.replace_all(&rest, " ").into_owned();
        (prefix, rest)
    }
}

fn upper_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|v| v.to_uppercase()).collect()
}

fn compile(pattern: &str) -> Result<Regex, NormalizeError> {
    Regex::new(pattern)
        .map_err(|e| NormalizeError::InvalidConfig(format!("failed to compile region rules: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RegionRules {
        RegionRules::compile(&NormalizeConfig::default()).expect("compile rules")
    }

    #[test]
    fn leading_default_tag_stripped() {
        let (prefix, rest) = rules().resolve("RO: Ardeal TV");
        assert_eq!(prefix, None);
        assert_eq!(rest, "Ardeal TV");
    }

    #[test]
    fn leading_foreign_code_retained_as_prefix() {
        let (prefix, rest) = rules().resolve("|FR| GOLF CHANNELS HD");
        assert_eq!(prefix.as_deref(), Some("FR"));
        assert_eq!(rest, "GOLF CHANNELS HD");
    }

    #[test]
    fn trailing_tag_stripped_as_decoration() {
        let (prefix, rest) = rules().resolve("US: NASA TV US");
        assert_eq!(prefix.as_deref(), Some("US"));
        assert_eq!(rest, "NASA TV");
    }

    #[test]
    fn marketing_marker_consumed_before_tag() {
        let (prefix, rest) = rules().resolve("VIP|RO|: Discovery Channel FHD");
        assert_eq!(prefix, None);
        assert_eq!(rest, "Discovery Channel FHD");
    }

    #[test]
    fn unknown_code_left_untouched() {
        let (prefix, rest) = rules().resolve("TVR: Targu Mures");
        assert_eq!(prefix, None);
        assert_eq!(rest, "TVR: Targu Mures");
    }

    #[test]
    fn quote_delimiter_with_padding() {
        let (prefix, rest) = rules().resolve("RO    \" DIGI SPORT 1 HD RO");
        assert_eq!(prefix, None);
        assert_eq!(rest, "DIGI SPORT 1 HD");
    }

    #[test]
    fn plain_words_are_not_tags() {
        let (prefix, rest) = rules().resolve("Realitatea Plus");
        assert_eq!(prefix, None);
        assert_eq!(rest, "Realitatea Plus");
    }
}
