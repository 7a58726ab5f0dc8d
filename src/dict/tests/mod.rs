
use crate::accent::AccentEntry;
use crate::dict::AccentDictionary;

fn entry(kana: &str, reading: &str, expression: &str, pitch: &str) -> AccentEntry {
    AccentEntry {
        kana: kana.to_string(),
        reading: reading.to_string(),
        expression: expression.to_string(),
        accent_kana: kana.to_string(),
        pitch: pitch.to_string(),
        nasal_pos: String::new(),
        devoiced_pos: String::new(),
    }
}

fn sample_dict() -> AccentDictionary {
    AccentDictionary::from_entries(vec![
        entry("ニホン", "ニホン", "日本", "020"),
        entry("ニッポン", "ニッポン", "日本", "2000"),
        entry("ガッコウ", "ガッコウ", "学校", "0111"),
        entry("ペン", "ペン", "ペン", "20"),
    ])
}

/// One well-formed 19-column raw database line.
fn raw_line(kana: &str, reading: &str, expression: &str, pitch: &str) -> String {
    [
        "1", "2", "w", "", "", kana, reading, expression, "", "3", "", "", "", "", "", kana,
        "1", "", pitch,
    ]
    .join(",")
}
