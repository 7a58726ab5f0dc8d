//! Inline style mapping.
//!
//! Rendered markup carries class markers; hosts without a stylesheet swap
//! them for inline styles. Rules apply in order as literal substring
//! replacements, never as patterns.

use crate::config::{Config, StyleRule};

#[derive(Debug, Clone)]
pub struct StyleMapper {
    rules: Vec<StyleRule>,
}

impl StyleMapper {
    pub fn new(config: &Config) -> Self {
        Self {
            rules: config.styles.clone(),
        }
    }

    pub fn apply(&self, markup: &str) -> String {
        let mut out = markup.to_string();
        for rule in &self.rules {
            out = out.replace(&rule.find, &rule.replace);
        }
        out
    }
}
