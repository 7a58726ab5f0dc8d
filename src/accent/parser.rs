//! Parser for the raw accent database dump.
//!
//! One line per record, 19 comma-separated columns. A field value
//! containing a literal comma is written in the source as a `{left,right}`
//! or `(left,right)` group with exactly one comma inside; that comma is
//! replaced with ';' before the naive split, matching how the data
//! producer escapes it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::entry::AccentEntry;

/// Column count of the raw schema:
///
///   0 record id, 1 word id, 2 WAV name, 3 K_FLD, 4 ACT,
///   5 katakana spelling, 6 katakana reading, 7 kanji expression,
///   8 expression variant, 9 char count, 10 devoiced positions,
///   11 nasal positions, 12 example fragment, 13 start index,
///   14 K WAV name, 15 accent kana, 16 accent count, 17 sentence,
///   18 accent digits
const FIELD_COUNT: usize = 19;

static BRACE_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^,]*,[^,]*\}").expect("Invalid regex"));
static PAREN_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^,]*,[^,]*\)").expect("Invalid regex"));

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed record at line {line}: expected 19 fields, found {found}")]
    MalformedRecord { line: usize, found: usize },
}

/// Parse the full raw database text into entries.
///
/// The whole parse fails on the first malformed record; a partially loaded
/// accent database would silently miss words.
pub fn parse_entries(text: &str) -> Result<Vec<AccentEntry>, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        entries.push(parse_line(line.trim(), i + 1)?);
    }
    Ok(entries)
}

fn parse_line(line: &str, line_no: usize) -> Result<AccentEntry, ParseError> {
    let escaped = escape_embedded_commas(line);
    let fields: Vec<&str> = escaped.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::MalformedRecord {
            line: line_no,
            found: fields.len(),
        });
    }
    Ok(AccentEntry {
        kana: fields[5].to_string(),
        reading: fields[6].to_string(),
        expression: fields[7].to_string(),
        devoiced_pos: fields[10].to_string(),
        nasal_pos: fields[11].to_string(),
        accent_kana: fields[15].to_string(),
        pitch: fields[18].to_string(),
    })
}

fn escape_embedded_commas(line: &str) -> String {
    let semicolon = |caps: &Captures| caps[0].replace(',', ";");
    let pass = BRACE_GROUP.replace_all(line, &semicolon);
    PAREN_GROUP.replace_all(&pass, &semicolon).into_owned()
}
