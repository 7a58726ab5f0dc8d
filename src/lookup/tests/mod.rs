mod engine;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::accent::AccentEntry;
use crate::dict::AccentDictionary;
use crate::segment::Segmenter;

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

fn sample_dict() -> Arc<AccentDictionary> {
    Arc::new(AccentDictionary::from_entries(vec![
        entry("ニホン", "ニホン", "日本", "020"),
        entry("ニッポン", "ニッポン", "日本", "2000"),
        entry("ガッコウ", "ガッコウ", "学校", "0111"),
        entry("ベンキョウ", "ベンキョウ", "勉強", "01111"),
        entry("ピザ", "ピザ", "ピザ", "10"),
    ]))
}

/// Records invocations and returns a fixed token list.
struct StubSegmenter {
    tokens: Vec<String>,
    calls: Arc<AtomicUsize>,
}

impl Segmenter for StubSegmenter {
    fn segment(&self, _text: &str) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.clone()
    }
}

fn stub(tokens: &[&str]) -> (Box<dyn Segmenter>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let segmenter = StubSegmenter {
        tokens: tokens.iter().map(|t| t.to_string()).collect(),
        calls: Arc::clone(&calls),
    };
    (Box::new(segmenter), calls)
}
