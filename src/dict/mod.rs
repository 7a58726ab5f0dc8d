//! Accent dictionary storage.
//!
//! `AccentDictionary` maps lookup keys (katakana readings and kanji
//! expressions) to ordered pronunciation pairs. It is compiled once from
//! the raw database dump and read-only afterwards; `snapshot` adds the
//! HADX binary format and the stale-or-missing orchestration.

mod snapshot;
#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::accent::{self, AccentEntry, ParseError};

/// Unified error type for dictionary compilation and binary I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected HADX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no accent database: neither {} nor {} exists", raw.display(), snapshot.display())]
    MissingDatabase { raw: PathBuf, snapshot: PathBuf },
}

/// One pronunciation of a dictionary key: the katakana spelling plus its
/// rendered accent markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub kana: String,
    pub markup: String,
}

/// Key → ordered pronunciation pairs.
///
/// Every database entry registers under two keys, its katakana reading and
/// its kanji expression, so both 「日本」 and 「ニホン」 resolve. Pairs
/// dedup by full equality with insertion order preserved.
#[derive(Debug, Default, PartialEq)]
pub struct AccentDictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl AccentDictionary {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register one pronunciation under one key. Returns false if the key
    /// already holds an identical pair.
    pub fn register(&mut self, key: &str, pron: Pronunciation) -> bool {
        let prons = self.entries.entry(key.to_string()).or_default();
        if prons.contains(&pron) {
            return false;
        }
        prons.push(pron);
        true
    }

    /// Build from parsed entries: each entry's markup renders once and
    /// registers under both of its keys.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = AccentEntry>,
    {
        let mut dict = Self::new();
        for entry in entries {
            let pron = Pronunciation {
                kana: entry.kana.clone(),
                markup: accent::render(&entry),
            };
            dict.register(&entry.reading, pron.clone());
            dict.register(&entry.expression, pron);
        }
        dict
    }

    /// Parse and build from raw database text.
    pub fn compile_str(text: &str) -> Result<Self, DictError> {
        let dict = Self::from_entries(accent::parse_entries(text)?);
        let (keys, pairs) = dict.stats();
        debug!(keys, pairs, "compiled accent dictionary");
        Ok(dict)
    }

    pub fn compile_file(path: &Path) -> Result<Self, DictError> {
        let _span = debug_span!("compile_accent_db", path = %path.display()).entered();
        let text = fs::read_to_string(path)?;
        Self::compile_str(&text)
    }

    pub fn lookup(&self, key: &str) -> Option<&[Pronunciation]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (distinct keys, total pronunciation pairs).
    pub fn stats(&self) -> (usize, usize) {
        (self.entries.len(), self.entries.values().map(Vec::len).sum())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Pronunciation])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Write the key-sorted TSV derivative: one `key<TAB>kana<TAB>markup`
    /// line per pair, for inspection and diffing.
    pub fn export_tsv(&self, path: &Path) -> Result<(), DictError> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut out = String::new();
        for key in keys {
            for pron in &self.entries[key] {
                out.push_str(key);
                out.push('\t');
                out.push_str(&pron.kana);
                out.push('\t');
                out.push_str(&pron.markup);
                out.push('\n');
            }
        }
        fs::write(path, out)?;
        Ok(())
    }
}
