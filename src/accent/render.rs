//! Pitch markup rendering.
//!
//! Turns one `AccentEntry` into the HTML-flavoured markup the dictionary
//! stores: an overline span over high morae, the downstep glyph after the
//! accent nucleus, devoiced kana wrapped in their own span and a degree
//! sign appended after nasalized kana. The class markers are rewritten to
//! inline styles later by the style mapper.

use super::entry::AccentEntry;

const OVERLINE_OPEN: &str = r#"<span class="overline">"#;
const SPAN_CLOSE: &str = "</span>";
const DEVOICED_OPEN: &str = r#"<span class="nopron">"#;
const NASAL_MARK: &str = r#"<span class="nasal">&#176;</span>"#;
const DOWNSTEP: &str = "&#42780;";

/// Render the accent markup for one entry.
///
/// Walks the accent kana pairwise with the digit string, left-padded with
/// '0' to the kana length (digits beyond the kana length are ignored). A
/// digit above zero puts the kana on a high pitch; a digit of exactly two
/// also closes the span and appends the downstep glyph. Total over any
/// field contents: non-digit chars count as zero and out-of-range
/// positions never match.
pub fn render(entry: &AccentEntry) -> String {
    let nasal = entry.nasal_positions();
    let devoiced = entry.devoiced_positions();

    let kana_len = entry.accent_kana.chars().count();
    let pad = kana_len.saturating_sub(entry.pitch.chars().count());
    let digits = std::iter::repeat('0').take(pad).chain(entry.pitch.chars());

    let mut out = String::new();
    let mut overline = false;
    for ((i, c), d) in entry.accent_kana.chars().enumerate().zip(digits) {
        let accent = d.to_digit(10).unwrap_or(0);
        if !overline && accent > 0 {
            out.push_str(OVERLINE_OPEN);
            overline = true;
        }
        if overline && accent == 0 {
            out.push_str(SPAN_CLOSE);
            overline = false;
        }
        let pos = i + 1;
        if devoiced.contains(&pos) {
            out.push_str(DEVOICED_OPEN);
            out.push(c);
            out.push_str(SPAN_CLOSE);
        } else {
            out.push(c);
        }
        if nasal.contains(&pos) {
            out.push_str(NASAL_MARK);
        }
        if accent == 2 {
            out.push_str(SPAN_CLOSE);
            out.push_str(DOWNSTEP);
            overline = false;
        }
    }
    if overline {
        out.push_str(SPAN_CLOSE);
    }
    out
}
