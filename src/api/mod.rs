//! Engine context, report types and config helpers shared by the CLI and
//! library callers.

mod engine;
#[cfg(test)]
mod tests;
mod types;

pub use engine::HmongEngine;
pub use types::{EngineConfig, HmongError, TokenAnalysis};

use std::fmt;
use std::str::FromStr;

use hmong_core::dict::BilingualDictionary;
use hmong_core::grammar::ParseError;
use hmong_core::phrasebook::Phrasebook;
use hmong_core::settings::{parse_settings_toml, Settings};
use hmong_core::syllable::parse_rpa_toml;

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// One of the TOML tables that can be exported and replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Rpa,
    Dict,
    Phrasebook,
    Settings,
}

impl ConfigKind {
    pub const ALL: [ConfigKind; 4] = [
        ConfigKind::Rpa,
        ConfigKind::Dict,
        ConfigKind::Phrasebook,
        ConfigKind::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKind::Rpa => "rpa",
            ConfigKind::Dict => "dict",
            ConfigKind::Phrasebook => "phrasebook",
            ConfigKind::Settings => "settings",
        }
    }

    /// The embedded default file.
    pub fn default_toml(self) -> &'static str {
        match self {
            ConfigKind::Rpa => hmong_core::syllable::DEFAULT_RPA_TOML,
            ConfigKind::Dict => hmong_core::dict::default_toml(),
            ConfigKind::Phrasebook => hmong_core::phrasebook::default_toml(),
            ConfigKind::Settings => hmong_core::settings::default_toml(),
        }
    }

    /// Parse and validate `content`, returning a one-line summary.
    ///
    /// A phrasebook is checked against the default settings.
    pub fn validate(self, content: &str) -> Result<String, HmongError> {
        Ok(match self {
            ConfigKind::Rpa => {
                let t = parse_rpa_toml(content)?;
                format!("{} onsets, {} vowels", t.onsets.len(), t.vowels.len())
            }
            ConfigKind::Dict => {
                let d = BilingualDictionary::from_toml(content)?;
                format!("{} entries", d.len())
            }
            ConfigKind::Phrasebook => {
                let p = Phrasebook::from_toml(content, &Settings::default().phrasebook)?;
                format!(
                    "{} greetings, {} questions, {} dialogue units, {} proverb topics",
                    p.greeting_times().len(),
                    p.question_topics().len(),
                    p.dialogue_units().len(),
                    p.proverb_topics().len()
                )
            }
            ConfigKind::Settings => {
                let s = parse_settings_toml(content)?;
                format!(
                    "dictionary.search_limit={}, grammar.default_classifier={}",
                    s.dictionary.search_limit, s.grammar.default_classifier
                )
            }
        })
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError {
                kind: "config kind",
                value: s.to_string(),
            })
    }
}
