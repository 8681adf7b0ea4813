use std::collections::HashMap;

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;
use crate::markers::MarkerRules;
use crate::region::RegionRules;
use crate::token::NormalizedName;
use crate::translit::fold_token;

/// Channel-name normalizer with precompiled stage rules.
///
/// Construction validates the configuration and compiles the region and
/// marker grammars once; [`normalize`](Normalizer::normalize) itself is a
/// total, pure function that never fails and never touches I/O, so a single
/// instance can be shared freely across threads.
pub struct Normalizer {
    region: RegionRules,
    markers: MarkerRules,
    fold_table: HashMap<char, String>,
    cfg: NormalizeConfig,
}

impl Normalizer {
    pub fn new(cfg: NormalizeConfig) -> Result<Self, NormalizeError> {
        cfg.validate()?;
        let region = RegionRules::compile(&cfg)?;
        let markers = MarkerRules::compile(&cfg)?;
        let fold_table = cfg.fold_table.clone();
        Ok(Self {
            region,
            markers,
            fold_table,
            cfg,
        })
    }

    /// The configuration this normalizer was built from.
    pub fn config(&self) -> &NormalizeConfig {
        &self.cfg
    }

    /// Reduce a raw channel label to its canonical comparable token.
    ///
    /// Stages, in order: region-tag resolution, annotation stripping,
    /// quality-marker removal, variant-suffix removal, transliteration,
    /// final fold. Later stages operate on the already-trimmed remainder,
    /// and a retained foreign region code is prepended after the fold.
    pub fn normalize(&self, raw: &str) -> NormalizedName {
        let (prefix, rest) = self.region.resolve(raw);
        let rest = self.markers.strip_annotations(&rest);
        let rest = self.markers.strip_quality(&rest);
        let rest = self.markers.strip_variant_suffix(&rest);
        let body = fold_token(&rest, &self.fold_table);

        let token = match prefix {
            Some(mut code) => {
                code.push_str(&body);
                code
            }
            None => body,
        };
        NormalizedName::new(token)
    }
}

/// One-shot convenience wrapper around [`Normalizer`].
///
/// Builds a normalizer for a single call; callers on a hot path (a playlist
/// scan is a catalog x provider-list cross product) should construct a
/// [`Normalizer`] once and reuse it, or go through the matcher's cache.
pub fn normalize(raw: &str, cfg: &NormalizeConfig) -> Result<NormalizedName, NormalizeError> {
    Ok(Normalizer::new(cfg.clone())?.normalize(raw))
}
