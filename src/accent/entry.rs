/// One pronunciation record from the accent database.
///
/// Keeps the columns that drive dictionary keys and markup rendering; the
/// raw dump has 19 (see `parser` for the full schema). Position fields stay
/// in their encoded digit-string form and decode on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentEntry {
    /// Katakana spelling registered in pronunciation pairs.
    pub kana: String,
    /// Katakana reading, one of the two dictionary keys.
    pub reading: String,
    /// Kanji (or mixed-script) expression, the other dictionary key.
    pub expression: String,
    /// Pure-kana form the accent digits align to, char by char.
    pub accent_kana: String,
    /// Accent digit string; shorter strings are left-padded at render time.
    pub pitch: String,
    /// Encoded 1-based positions of nasalized kana.
    pub nasal_pos: String,
    /// Encoded 1-based positions of devoiced kana.
    pub devoiced_pos: String,
}

impl AccentEntry {
    pub fn nasal_positions(&self) -> Vec<usize> {
        decode_positions(&self.nasal_pos)
    }

    pub fn devoiced_positions(&self) -> Vec<usize> {
        decode_positions(&self.devoiced_pos)
    }
}

/// Decode a position list from its digit-string encoding.
///
/// '0' separates numbers: each non-empty fragment of a split on '0' is one
/// number, each empty fragment multiplies the previous number by ten. So
/// "203" decodes to [2, 3] while "2003" decodes to [20, 3]. A leading
/// empty fragment has no previous number and is skipped, as is any
/// fragment that does not parse. Scaling saturates on overlong
/// separator runs.
fn decode_positions(encoded: &str) -> Vec<usize> {
    let mut positions: Vec<usize> = Vec::new();
    for fragment in encoded.split('0') {
        if fragment.is_empty() {
            if let Some(last) = positions.last_mut() {
                *last = last.saturating_mul(10);
            }
        } else if let Ok(n) = fragment.parse::<usize>() {
            positions.push(n);
        }
    }
    positions
}
