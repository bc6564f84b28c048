//! Tunable defaults loaded from TOML.
//!
//! - `Settings::default()` parses the embedded `default_settings.toml`
//! - `parse_settings_toml(toml_content)` parses and validates a custom file
//! - `default_toml()` returns the embedded file for export

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub dictionary: DictionarySettings,
    pub grammar: GrammarSettings,
    pub phrasebook: PhrasebookSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub search_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrammarSettings {
    pub default_classifier: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhrasebookSettings {
    pub default_greeting: String,
    pub fallback_question: String,
    pub default_proverb_topic: String,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_positive_usize!(dictionary.search_limit);
    check_non_empty!(grammar.default_classifier);
    check_non_empty!(phrasebook.default_greeting);
    check_non_empty!(phrasebook.fallback_question);
    check_non_empty!(phrasebook.default_proverb_topic);

    Ok(())
}
