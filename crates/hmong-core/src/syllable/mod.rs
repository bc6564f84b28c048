//! RPA syllable grammar.
//!
//! A syllable is `onset? nucleus tone?`. Matching is left to right and
//! greedy: onsets are tried trigraphs, then digraphs, then singles; vowel
//! spellings are tried longest first; a single trailing tone letter may
//! close the syllable. Anything left over makes the syllable invalid.

mod config;

pub use config::{parse_rpa_toml, RpaConfigError, RpaTables, DEFAULT_RPA_TOML};

use std::cmp::Reverse;
use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::tone::Tone;

/// Onset / nucleus / coda split of a syllable.
///
/// All fields are `None` when the input is not a valid syllable. Components
/// are lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub onset: Option<String>,
    pub nucleus: Option<String>,
    pub coda: Option<char>,
}

impl Decomposition {
    pub fn is_match(&self) -> bool {
        self.nucleus.is_some()
    }

    /// Tone named by the coda; unmarked when there is none.
    pub fn tone(&self) -> Tone {
        self.coda
            .and_then(Tone::from_letter)
            .unwrap_or(Tone::Unmarked)
    }

    /// Reassemble `onset + nucleus + coda`, or `None` for a failed match.
    pub fn to_syllable(&self) -> Option<String> {
        let nucleus = self.nucleus.as_deref()?;
        let mut s = String::with_capacity(8);
        s.push_str(self.onset.as_deref().unwrap_or(""));
        s.push_str(nucleus);
        if let Some(c) = self.coda {
            s.push(c);
        }
        Some(s)
    }
}

/// Borrowed split over an already lowercased syllable.
struct Parts<'a> {
    onset: Option<&'a str>,
    nucleus: &'a str,
    coda: Option<char>,
}

#[derive(Debug, Clone)]
pub struct SyllableGrammar {
    /// Match priority order.
    onsets: Vec<String>,
    /// Longest spelling first; ties keep table order.
    nuclei: Vec<String>,
    onset_set: HashSet<String>,
    nucleus_set: HashSet<String>,
}

impl Default for SyllableGrammar {
    fn default() -> Self {
        Self::rpa()
    }
}

impl SyllableGrammar {
    /// Grammar over the embedded RPA tables.
    pub fn rpa() -> Self {
        let tables = parse_rpa_toml(DEFAULT_RPA_TOML).expect("RPA table TOML must be valid");
        Self::from_tables(tables)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RpaConfigError> {
        parse_rpa_toml(toml_str).map(Self::from_tables)
    }

    pub fn from_tables(tables: RpaTables) -> Self {
        let RpaTables { onsets, mut vowels } = tables;
        // Stable: equal-length spellings keep their table order.
        vowels.sort_by_key(|v| Reverse(v.len()));
        debug!(
            onsets = onsets.len(),
            nuclei = vowels.len(),
            "syllable grammar built"
        );
        Self {
            onset_set: onsets.iter().cloned().collect(),
            nucleus_set: vowels.iter().cloned().collect(),
            onsets,
            nuclei: vowels,
        }
    }

    fn split<'a>(&self, lowered: &'a str) -> Option<Parts<'a>> {
        let onset = self
            .onsets
            .iter()
            .find(|c| lowered.starts_with(c.as_str()))
            .map(|c| &lowered[..c.len()]);
        let rest = &lowered[onset.map_or(0, str::len)..];

        let nucleus_len = self
            .nuclei
            .iter()
            .find(|v| rest.starts_with(v.as_str()))?
            .len();
        let (nucleus, tail) = rest.split_at(nucleus_len);

        let mut chars = tail.chars();
        let coda = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if Tone::is_tone_letter(c) => Some(c),
            _ => return None,
        };

        Some(Parts {
            onset,
            nucleus,
            coda,
        })
    }

    pub fn is_valid(&self, syllable: &str) -> bool {
        self.split(&syllable.to_lowercase()).is_some()
    }

    pub fn decompose(&self, syllable: &str) -> Decomposition {
        let lowered = syllable.to_lowercase();
        match self.split(&lowered) {
            Some(p) => Decomposition {
                onset: p.onset.map(str::to_string),
                nucleus: Some(p.nucleus.to_string()),
                coda: p.coda,
            },
            None => Decomposition::default(),
        }
    }

    /// Tone marked by the last character, without validating the rest of
    /// the syllable.
    pub fn get_tone(&self, syllable: &str) -> Tone {
        syllable
            .chars()
            .next_back()
            .and_then(Tone::from_letter)
            .unwrap_or(Tone::Unmarked)
    }

    /// Rewrite the tone of `syllable`.
    ///
    /// `target` is a tone letter in either case; an empty or unrecognized
    /// target yields the unmarked form.
    pub fn convert_tone(&self, syllable: &str, target: &str) -> String {
        let tone = target.parse().unwrap_or(Tone::Unmarked);
        self.with_tone(syllable, tone)
    }

    /// Valid syllables are rebuilt from their lowercase onset and nucleus.
    /// Anything else loses at most one trailing tone letter and keeps its
    /// original spelling.
    pub fn with_tone(&self, syllable: &str, tone: Tone) -> String {
        let lowered = syllable.to_lowercase();
        let mut out = match self.split(&lowered) {
            Some(p) => {
                let mut base = p.onset.unwrap_or("").to_string();
                base.push_str(p.nucleus);
                base
            }
            None => strip_tone_letter(syllable).to_string(),
        };
        if let Some(c) = tone.letter() {
            out.push(c);
        }
        out
    }

    pub fn initial_consonants(&self) -> &[String] {
        &self.onsets
    }

    /// Vowel spellings, longest first.
    pub fn vowels(&self) -> &[String] {
        &self.nuclei
    }

    pub fn is_initial_consonant(&self, s: &str) -> bool {
        self.onset_set.contains(s)
    }

    pub fn is_vowel(&self, s: &str) -> bool {
        self.nucleus_set.contains(s)
    }

    pub fn is_tone_letter(&self, c: char) -> bool {
        Tone::is_tone_letter(c)
    }
}

fn strip_tone_letter(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((i, c)) if Tone::is_tone_letter(c) => &s[..i],
        _ => s,
    }
}
