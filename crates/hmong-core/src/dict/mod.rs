//! Hmong ↔ English dictionary.
//!
//! Entries keep their table order; a key index serves Hmong lookups and a
//! reverse index maps every lowercased English gloss to the Hmong words
//! that carry it.

mod entry;

pub use entry::DictEntry;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_DICT_TOML: &str = include_str!("default_dict.toml");

/// Returns the embedded default dictionary TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_DICT_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("dictionary has no entries")]
    Empty,
    #[error("entry with an empty hmong key")]
    EmptyKey,
    #[error("entry {0:?} has no english glosses")]
    NoGlosses(String),
    #[error("duplicate entry: {0}")]
    Duplicate(String),
}

#[derive(Deserialize)]
struct DictFile {
    entries: Vec<DictEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Hmong,
    English,
}

impl FromStr for Lang {
    type Err = crate::grammar::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hm" | "hmong" => Ok(Lang::Hmong),
            "en" | "english" => Ok(Lang::English),
            _ => Err(crate::grammar::ParseError {
                kind: "language",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lang::Hmong => "hm",
            Lang::English => "en",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub hmong: String,
    pub english: String,
}

#[derive(Debug, Clone)]
pub struct BilingualDictionary {
    entries: Vec<DictEntry>,
    index: HashMap<String, usize>,
    reverse: HashMap<String, Vec<String>>,
}

impl Default for BilingualDictionary {
    fn default() -> Self {
        Self::from_toml(DEFAULT_DICT_TOML).expect("dictionary TOML must be valid")
    }
}

impl BilingualDictionary {
    pub fn from_toml(toml_str: &str) -> Result<Self, DictError> {
        let file: DictFile =
            toml::from_str(toml_str).map_err(|e| DictError::Parse(e.to_string()))?;
        if file.entries.is_empty() {
            return Err(DictError::Empty);
        }
        let dict = Self::from_entries(file.entries)?;
        debug!(entries = dict.len(), "dictionary loaded");
        Ok(dict)
    }

    /// Build from entries, lowercasing keys. Duplicate keys are rejected.
    pub fn from_entries(entries: Vec<DictEntry>) -> Result<Self, DictError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());
        for e in entries {
            let e = validate_entry(e)?;
            if !seen.insert(e.hmong.clone()) {
                return Err(DictError::Duplicate(e.hmong));
            }
            normalized.push(e);
        }
        let mut dict = Self {
            entries: normalized,
            index: HashMap::new(),
            reverse: HashMap::new(),
        };
        dict.rebuild_indexes();
        Ok(dict)
    }

    fn rebuild_indexes(&mut self) {
        self.index.clear();
        self.reverse.clear();
        for (i, e) in self.entries.iter().enumerate() {
            self.index.insert(e.hmong.clone(), i);
            for gloss in &e.english {
                let words = self.reverse.entry(gloss.trim().to_lowercase()).or_default();
                if !words.contains(&e.hmong) {
                    words.push(e.hmong.clone());
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    /// Sorted Hmong keys.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.iter().map(|e| e.hmong.as_str()).collect();
        words.sort_unstable();
        words
    }

    pub fn lookup(&self, word: &str) -> Option<&DictEntry> {
        self.index
            .get(&normalize_key(word))
            .map(|&i| &self.entries[i])
    }

    pub fn translate_hm_to_en(&self, word: &str) -> Option<String> {
        self.lookup(word).map(DictEntry::gloss)
    }

    /// Hmong words glossed by `word`; empty when there are none.
    pub fn translate_en_to_hm(&self, word: &str) -> &[String] {
        self.reverse
            .get(&word.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Case-insensitive substring search over Hmong keys or English glosses.
    pub fn search(&self, query: &str, lang: Lang, limit: usize) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        let mut hits = Vec::new();
        match lang {
            Lang::Hmong => {
                for e in &self.entries {
                    if e.hmong.contains(&query) {
                        hits.push(SearchHit {
                            hmong: e.hmong.clone(),
                            english: e.gloss(),
                        });
                    }
                }
            }
            Lang::English => {
                for e in &self.entries {
                    for gloss in &e.english {
                        if gloss.to_lowercase().contains(&query) {
                            hits.push(SearchHit {
                                hmong: e.hmong.clone(),
                                english: gloss.clone(),
                            });
                        }
                    }
                }
            }
        }
        hits.truncate(limit);
        hits
    }

    /// Add an entry, replacing any existing entry with the same key.
    ///
    /// The entry is checked like a table row: an empty key or no glosses
    /// leaves the dictionary unchanged.
    pub fn insert(&mut self, entry: DictEntry) -> Result<(), DictError> {
        let entry = validate_entry(entry)?;
        match self.index.get(&entry.hmong) {
            Some(&i) => self.entries[i] = entry,
            None => self.entries.push(entry),
        }
        self.rebuild_indexes();
        Ok(())
    }

    /// Add a word with a comma-separated definition.
    pub fn add_word(&mut self, word: &str, definition: &str) -> Result<(), DictError> {
        let glosses = definition
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();
        self.insert(DictEntry::new(word, glosses))
    }
}

/// Normalize the key and drop blank glosses.
fn validate_entry(mut e: DictEntry) -> Result<DictEntry, DictError> {
    e.hmong = normalize_key(&e.hmong);
    if e.hmong.is_empty() {
        return Err(DictError::EmptyKey);
    }
    e.english.retain(|g| !g.trim().is_empty());
    if e.english.is_empty() {
        return Err(DictError::NoGlosses(e.hmong));
    }
    Ok(e)
}

/// Lowercase and collapse internal whitespace.
fn normalize_key(word: &str) -> String {
    word.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
