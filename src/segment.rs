//! Seam for an external morphological segmenter.
//!
//! The lookup engine never bundles an analyzer; hosts that want
//! segmentation fallback (MeCab, Lindera, ...) implement this trait and
//! hand the engine a boxed instance.

/// Splits free-form Japanese text into word tokens.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}
