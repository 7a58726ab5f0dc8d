//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F). This includes a few
/// unassigned codepoints (U+3040, U+3097-3098) but these never appear in
/// accent database readings, so the block-level check suffices.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes rarely-used
/// symbols (゠ U+30A0, ヿ U+30FF) but no unassigned codepoints.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn is_halfwidth_katakana(c: char) -> bool {
    ('\u{FF66}'..='\u{FF9F}').contains(&c)
}

/// Check if a character belongs to any Japanese script range.
pub fn is_japanese(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_kanji(c) || is_halfwidth_katakana(c)
}

/// Transliterate katakana to hiragana.
///
/// Maps the standard katakana block (U+30A1..U+30F6, ァ through ヶ) onto its
/// hiragana counterpart by codepoint shift. Everything else passes through
/// unchanged, including the prolonged sound mark ー and any embedded markup,
/// so the function is safe to apply to already-styled strings.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
