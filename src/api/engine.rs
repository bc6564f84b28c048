use std::fs;
use std::path::Path;

use tracing::{debug, debug_span};

use hmong_core::dict::{BilingualDictionary, Lang, SearchHit};
use hmong_core::grammar::{self, PartOfSpeech};
use hmong_core::phrasebook::{Phrasebook, DEFAULT_PHRASEBOOK_TOML};
use hmong_core::settings::{parse_settings_toml, Settings};
use hmong_core::text::tokenize;
use hmong_core::SyllableGrammar;

use super::{EngineConfig, HmongError, TokenAnalysis};

/// The loaded tables, passed explicitly wherever they are needed.
#[derive(Debug, Clone)]
pub struct HmongEngine {
    grammar: SyllableGrammar,
    dict: BilingualDictionary,
    phrasebook: Phrasebook,
    settings: Settings,
}

impl Default for HmongEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn read_file(path: &Path) -> Result<String, HmongError> {
    fs::read_to_string(path).map_err(|source| HmongError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `path` if given and parse it, otherwise fall back to `default`.
fn load_or<T, E>(
    path: Option<&Path>,
    parse: impl FnOnce(&str) -> Result<T, E>,
    default: impl FnOnce() -> T,
) -> Result<T, HmongError>
where
    HmongError: From<E>,
{
    match path {
        Some(path) => {
            let content = read_file(path)?;
            parse(&content).map_err(|e| HmongError::from(e).in_file(path))
        }
        None => Ok(default()),
    }
}

impl HmongEngine {
    /// Engine over the embedded default tables.
    pub fn new() -> Self {
        Self {
            grammar: SyllableGrammar::rpa(),
            dict: BilingualDictionary::default(),
            phrasebook: Phrasebook::default(),
            settings: Settings::default(),
        }
    }

    /// Engine with any of the embedded tables replaced by files.
    pub fn from_config(config: &EngineConfig) -> Result<Self, HmongError> {
        let _span = debug_span!("engine_load").entered();

        // Settings first: the phrasebook resolves its fallbacks against them.
        let settings = load_or(
            config.settings.as_deref(),
            parse_settings_toml,
            Settings::default,
        )?;
        let grammar = load_or(
            config.rpa.as_deref(),
            SyllableGrammar::from_toml,
            SyllableGrammar::rpa,
        )?;
        let dict = load_or(
            config.dict.as_deref(),
            BilingualDictionary::from_toml,
            BilingualDictionary::default,
        )?;
        let phrasebook = match config.phrasebook.as_deref() {
            Some(path) => {
                let content = read_file(path)?;
                Phrasebook::from_toml(&content, &settings.phrasebook)
                    .map_err(|e| HmongError::from(e).in_file(path))?
            }
            None => Phrasebook::from_toml(DEFAULT_PHRASEBOOK_TOML, &settings.phrasebook)?,
        };

        debug!(
            custom_rpa = config.rpa.is_some(),
            custom_dict = config.dict.is_some(),
            custom_phrasebook = config.phrasebook.is_some(),
            custom_settings = config.settings.is_some(),
            "engine loaded"
        );
        Ok(Self {
            grammar,
            dict,
            phrasebook,
            settings,
        })
    }

    pub fn grammar(&self) -> &SyllableGrammar {
        &self.grammar
    }

    pub fn dict(&self) -> &BilingualDictionary {
        &self.dict
    }

    pub fn dict_mut(&mut self) -> &mut BilingualDictionary {
        &mut self.dict
    }

    pub fn phrasebook(&self) -> &Phrasebook {
        &self.phrasebook
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Tokenize `text` and report on every token.
    pub fn analyze(&self, text: &str) -> Vec<TokenAnalysis> {
        let _span = debug_span!("analyze", len = text.len()).entered();
        let tokens = tokenize(text);
        let result: Vec<TokenAnalysis> = tokens.iter().map(|t| self.analyze_token(t)).collect();
        debug!(
            tokens = result.len(),
            valid = result.iter().filter(|a| a.valid).count(),
            "analyzed"
        );
        result
    }

    fn analyze_token(&self, token: &str) -> TokenAnalysis {
        let word = token.trim_matches(|c: char| c.is_ascii_punctuation());
        let decomposition = self.grammar.decompose(word);
        let tone = self.grammar.get_tone(word);
        TokenAnalysis {
            token: token.to_string(),
            word: word.to_string(),
            valid: decomposition.is_match(),
            decomposition,
            tone,
            tone_description: tone.description(),
            gloss: self.dict.translate_hm_to_en(word),
            pos: grammar::detect_pos(&self.dict, word),
        }
    }

    /// Dictionary search capped at the configured limit.
    pub fn search(&self, query: &str, lang: Lang) -> Vec<SearchHit> {
        self.dict
            .search(query, lang, self.settings.dictionary.search_limit)
    }

    pub fn detect_pos(&self, word: &str) -> PartOfSpeech {
        grammar::detect_pos(&self.dict, word)
    }

    /// Classifiers for `noun`, defaulting to the configured classifier.
    pub fn classifiers(&self, noun: &str) -> Vec<String> {
        grammar::classifiers(
            &self.dict,
            noun,
            &self.settings.grammar.default_classifier,
        )
    }
}
