use std::sync::atomic::Ordering;

use super::{sample_dict, stub};
use crate::config::Config;
use crate::lookup::LookupEngine;

fn plain_engine() -> LookupEngine {
    LookupEngine::new(sample_dict(), &Config::default(), None)
}

#[test]
fn test_exact_match_styles_markup() {
    let results = plain_engine().lookup("日本");
    assert_eq!(results.len(), 1);
    let prons = results.get("日本").unwrap();
    assert_eq!(prons.len(), 2);
    assert_eq!(
        prons[0],
        r#"ニ<span style="text-decoration:overline;">ホ</span>&#42780;ン"#
    );
    assert!(prons[1].ends_with("ッポン"));
}

#[test]
fn test_exact_match_by_reading() {
    let results = plain_engine().lookup("ニホン");
    assert_eq!(results.len(), 1);
    assert_eq!(results.get("ニホン").unwrap().len(), 1);
}

#[test]
fn test_input_markup_stripped() {
    let results = plain_engine().lookup("<b>日本</b>\n");
    assert!(results.get("日本").is_some());
}

#[test]
fn test_split_fallback_order() {
    let results = plain_engine().lookup("日本・学校");
    let keys: Vec<&str> = results.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["日本", "学校"]);
}

#[test]
fn test_split_fallback_partial_hit() {
    let results = plain_engine().lookup("日本・フランス");
    assert_eq!(results.len(), 1);
    assert!(results.get("日本").is_some());
}

#[test]
fn test_duplicate_subexpression_kept_once() {
    let results = plain_engine().lookup("日本・学校・日本");
    let keys: Vec<&str> = results.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["日本", "学校"]);
}

#[test]
fn test_miss_is_empty() {
    assert!(plain_engine().lookup("フランス").is_empty());
}

#[test]
fn test_empty_input() {
    assert!(plain_engine().lookup("").is_empty());
    assert!(plain_engine().lookup("<br>").is_empty());
    assert!(plain_engine().lookup("   ").is_empty());
}

#[test]
fn test_hiragana_output() {
    let mut config = Config::default();
    config.pronunciation_hiragana = true;
    let engine = LookupEngine::new(sample_dict(), &config, None);
    let pron = engine.lookup("ニホン").get("ニホン").unwrap()[0].clone();
    assert!(pron.contains('に'));
    assert!(!pron.contains('ニ'));
}

#[test]
fn test_segmentation_fallback_hits() {
    let mut config = Config::default();
    config.use_segmentation_fallback = true;
    let (segmenter, calls) = stub(&["勉強", "する"]);
    let engine = LookupEngine::new(sample_dict(), &config, Some(segmenter));

    let results = engine.lookup("勉強する");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(results.len(), 1);
    assert!(results.get("勉強").is_some());
}

#[test]
fn test_segmentation_invoked_once_even_on_token_misses() {
    let mut config = Config::default();
    config.use_segmentation_fallback = true;
    let (segmenter, calls) = stub(&["謎", "言葉"]);
    let engine = LookupEngine::new(sample_dict(), &config, Some(segmenter));

    let results = engine.lookup("謎の言葉");
    assert!(results.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_segmentation_skipped_when_split_hits() {
    let mut config = Config::default();
    config.use_segmentation_fallback = true;
    let (segmenter, calls) = stub(&["ダミー"]);
    let engine = LookupEngine::new(sample_dict(), &config, Some(segmenter));

    let results = engine.lookup("日本・フランス");
    assert!(results.get("日本").is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_segmentation_disabled_by_config() {
    let (segmenter, calls) = stub(&["勉強", "する"]);
    let engine = LookupEngine::new(sample_dict(), &Config::default(), Some(segmenter));
    assert!(engine.lookup("勉強する").is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_segmentation_configured_without_segmenter() {
    let mut config = Config::default();
    config.use_segmentation_fallback = true;
    let engine = LookupEngine::new(sample_dict(), &config, None);
    assert!(engine.lookup("勉強する").is_empty());
}

#[test]
fn test_lookup_deterministic() {
    let engine = plain_engine();
    assert_eq!(engine.lookup("日本・学校"), engine.lookup("日本・学校"));
}

#[test]
fn test_to_text_single_expression() {
    let results = plain_engine().lookup("日本");
    let text = results.to_text("・", "、", Some("："));
    // A lone expression never takes the prefix.
    assert!(!text.contains('：'));
    assert_eq!(text.matches('・').count(), 1);
}

#[test]
fn test_to_text_multiple_expressions() {
    let results = plain_engine().lookup("日本・学校");
    let text = results.to_text("・", "、", Some("："));
    let parts: Vec<&str> = text.split('、').collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].starts_with("日本："));
    assert!(parts[1].starts_with("学校："));

    let bare = results.to_text("・", "、", None);
    assert!(!bare.contains('：'));
}

#[test]
fn test_to_text_empty() {
    assert_eq!(plain_engine().lookup("フランス").to_text("・", "、", None), "");
}
