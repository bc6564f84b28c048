//! Part-of-speech tags, noun classifiers and sentence-level drills.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dict::BilingualDictionary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Classifier,
    Pronoun,
    Preposition,
    Conjunction,
    Particle,
    Adverb,
    Unknown,
}

impl PartOfSpeech {
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Classifier => "classifier",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for PartOfSpeech {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "classifier" => PartOfSpeech::Classifier,
            "pronoun" => PartOfSpeech::Pronoun,
            "preposition" => PartOfSpeech::Preposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "particle" => PartOfSpeech::Particle,
            "adverb" => PartOfSpeech::Adverb,
            "unknown" => PartOfSpeech::Unknown,
            _ => {
                return Err(ParseError {
                    kind: "part of speech",
                    value: s.to_string(),
                })
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Past,
    Present,
    Future,
}

impl FromStr for Tense {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "past" => Ok(Tense::Past),
            "present" => Ok(Tense::Present),
            "future" => Ok(Tense::Future),
            _ => Err(ParseError {
                kind: "tense",
                value: s.to_string(),
            }),
        }
    }
}

pub fn detect_pos(dict: &BilingualDictionary, word: &str) -> PartOfSpeech {
    dict.lookup(word)
        .and_then(|e| e.pos)
        .unwrap_or(PartOfSpeech::Unknown)
}

/// Classifiers recorded for `noun`, or `[default]` when none are known.
pub fn classifiers(dict: &BilingualDictionary, noun: &str, default: &str) -> Vec<String> {
    match dict.lookup(noun) {
        Some(e) if !e.classifiers.is_empty() => e.classifiers.clone(),
        _ => vec![default.to_string()],
    }
}

/// Mark tense with `lawm` (completed) or `yuav` (future).
pub fn conjugate(sentence: &str, tense: Tense) -> String {
    match tense {
        Tense::Past => format!("{sentence} lawm"),
        Tense::Future => format!("yuav {sentence}"),
        Tense::Present => sentence.to_string(),
    }
}

/// Replace every whole token equal to `target`.
pub fn substitute(sentence: &str, target: &str, replacement: &str) -> String {
    sentence
        .split_whitespace()
        .map(|w| if w == target { replacement } else { w })
        .collect::<Vec<_>>()
        .join(" ")
}
