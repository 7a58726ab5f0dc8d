//! Markup stripping and expression splitting.
//!
//! Free-form input (a text selection, a note field) reduces to dictionary
//! candidates: tags go, non-Japanese runs and Japanese separators become
//! spaces, the remainder splits on whitespace. The prolonged sound mark ー
//! is part of words and never splits.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::unicode::is_japanese;

/// Separator and punctuation chars that end a candidate even though some
/// of them (the middle dot) sit inside the katakana block.
const SEPARATORS: &[char] = &[
    '・', '、', '。', '！', '？', '：', '；', '〜', '「', '」', '『', '』', '【', '】', '〔',
    '〕', '〈', '〉', '《', '》', '（', '）',
];

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<>]*>").expect("Invalid regex"));

const MAX_STRIP_PASSES: usize = 8;

/// Remove markup tags until the text stops changing.
///
/// Double-encoded input can reveal new tags after a removal pass, so the
/// strip iterates to a fixed point under a hard cap.
pub fn strip_markup(text: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..MAX_STRIP_PASSES {
        match MARKUP_TAG.replace_all(&current, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(stripped) => current = stripped,
        }
    }
    current
}

/// Split sanitized text into lookup candidates.
pub fn split_expression(text: &str) -> Vec<String> {
    let spaced: String = text
        .chars()
        .map(|c| {
            if !is_japanese(c) || SEPARATORS.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();
    spaced.split_whitespace().map(str::to_string).collect()
}
