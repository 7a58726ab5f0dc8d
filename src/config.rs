//! Lookup configuration loaded from TOML.
//!
//! A `Config` is an explicit value passed to the constructors that need it;
//! there is no process-global instance. Default values are embedded via
//! `include_str!("default_config.toml")`.

use serde::Deserialize;

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// One literal find/replace rule applied to rendered accent markup.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleRule {
    pub find: String,
    pub replace: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Ordered markup replacement rules, applied first to last.
    pub styles: Vec<StyleRule>,
    /// Transliterate styled pronunciations from katakana to hiragana.
    pub pronunciation_hiragana: bool,
    /// Consult the segmenter when exact match and splitting both miss.
    pub use_segmentation_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        parse_config_toml(DEFAULT_CONFIG_TOML).expect("embedded config TOML must be valid")
    }
}

/// Returns the embedded default configuration TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

pub fn parse_config_toml(toml_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    for (i, rule) in config.styles.iter().enumerate() {
        // An empty pattern would match between every pair of chars.
        if rule.find.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("styles[{}].find", i),
                reason: "must be non-empty".to_string(),
            });
        }
    }
    Ok(())
}
