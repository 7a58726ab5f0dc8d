//! Pronunciation lookup.
//!
//! Resolution for one input expression walks three stages: exact
//! dictionary match, separator splitting, then a single morphological
//! segmentation pass through the optional external segmenter. Results
//! keep the order sub-expressions were found in; a miss is an empty
//! result, never an error.

mod split;
mod style;
#[cfg(test)]
mod tests;

pub use split::{split_expression, strip_markup};
pub use style::StyleMapper;

use std::sync::Arc;

use tracing::{debug, debug_span, warn};

use crate::config::Config;
use crate::dict::{AccentDictionary, Pronunciation};
use crate::segment::Segmenter;
use crate::unicode::katakana_to_hiragana;

/// Ordered expression → styled pronunciation strings mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pronunciations {
    entries: Vec<(String, Vec<String>)>,
}

impl Pronunciations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pronunciations for an expression. A duplicate expression
    /// overwrites in place, keeping its first-insertion position.
    fn assign(&mut self, expr: &str, prons: Vec<String>) {
        match self.entries.iter_mut().find(|(e, _)| e == expr) {
            Some((_, existing)) => *existing = prons,
            None => self.entries.push((expr.to_string(), prons)),
        }
    }

    pub fn get(&self, expr: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(e, _)| e == expr)
            .map(|(_, p)| p.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(e, p)| (e.as_str(), p.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render to one string: a lone expression joins its pronunciations
    /// with `sep_single`; multiple expressions join their groups with
    /// `sep_multi`, each group prefixed with the expression and `expr_sep`
    /// when one is given.
    pub fn to_text(&self, sep_single: &str, sep_multi: &str, expr_sep: Option<&str>) -> String {
        if let [(_, prons)] = self.entries.as_slice() {
            return prons.join(sep_single);
        }
        let groups: Vec<String> = self
            .entries
            .iter()
            .map(|(expr, prons)| match expr_sep {
                Some(sep) => format!("{}{}{}", expr, sep, prons.join(sep_single)),
                None => prons.join(sep_single),
            })
            .collect();
        groups.join(sep_multi)
    }
}

/// Resolves free-form expressions against a compiled accent dictionary.
///
/// Construction is explicit: the dictionary is shared behind an `Arc`, the
/// config is copied into the fields that need it, and the segmenter is an
/// optional boxed collaborator. No global state.
pub struct LookupEngine {
    dict: Arc<AccentDictionary>,
    styles: StyleMapper,
    hiragana: bool,
    segmentation: bool,
    segmenter: Option<Box<dyn Segmenter>>,
}

impl LookupEngine {
    pub fn new(
        dict: Arc<AccentDictionary>,
        config: &Config,
        segmenter: Option<Box<dyn Segmenter>>,
    ) -> Self {
        let segmentation = config.use_segmentation_fallback && segmenter.is_some();
        if config.use_segmentation_fallback && segmenter.is_none() {
            warn!("segmentation fallback configured but no segmenter supplied; running without");
        }
        Self {
            dict,
            styles: StyleMapper::new(config),
            hiragana: config.pronunciation_hiragana,
            segmentation,
            segmenter,
        }
    }

    /// Look up one expression. Markup is stripped from the input first;
    /// an empty result is a normal miss.
    pub fn lookup(&self, expr: &str) -> Pronunciations {
        let _span = debug_span!("lookup", expr).entered();
        let mut out = Pronunciations::new();
        self.lookup_inner(expr, true, self.segmentation, &mut out);
        out
    }

    fn lookup_inner(
        &self,
        expr: &str,
        sanitize: bool,
        segmentation: bool,
        out: &mut Pronunciations,
    ) {
        let sanitized;
        let expr = if sanitize {
            sanitized = strip_markup(expr);
            sanitized.trim()
        } else {
            expr
        };
        if expr.is_empty() {
            return;
        }

        if let Some(pairs) = self.dict.lookup(expr) {
            out.assign(expr, self.styled(pairs));
            return;
        }

        let candidates = split_expression(expr);
        if candidates.len() > 1 {
            for candidate in &candidates {
                self.lookup_inner(candidate, false, false, out);
            }
        }

        // Sub-lookups run with segmentation off, so one top-level call
        // reaches the segmenter at most once.
        if out.is_empty() && segmentation {
            if let Some(segmenter) = &self.segmenter {
                debug!(expr, "falling back to segmentation");
                for token in segmenter.segment(expr) {
                    self.lookup_inner(&token, false, false, out);
                }
            }
        }
    }

    /// Style one key's pairs: inline styles, optional hiragana output,
    /// order-preserving dedup of the styled strings.
    fn styled(&self, pairs: &[Pronunciation]) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for pair in pairs {
            let mut pron = self.styles.apply(&pair.markup);
            if self.hiragana {
                pron = katakana_to_hiragana(&pron);
            }
            if !out.contains(&pron) {
                out.push(pron);
            }
        }
        out
    }
}
