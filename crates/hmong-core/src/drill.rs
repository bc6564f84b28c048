//! Pronunciation drills.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::grammar::ParseError;
use crate::syllable::SyllableGrammar;
use crate::tone::Tone;

const TONE_BASE: &str = "pa";
const CONSONANT_ONSETS: [&str; 5] = ["p", "k", "t", "n", "m"];
const CONSONANT_RHYME: &str = "eb";
const VOWEL_ONSET: &str = "p";
const DRILL_VOWELS: [&str; 5] = ["a", "e", "i", "o", "u"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillKind {
    /// One base syllable in every tone.
    Tone,
    /// Several onsets over one rhyme.
    Consonant,
    /// One onset over the simple vowels.
    Vowel,
}

impl DrillKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DrillKind::Tone => "tone",
            DrillKind::Consonant => "consonant",
            DrillKind::Vowel => "vowel",
        }
    }
}

impl fmt::Display for DrillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrillKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tone" => Ok(DrillKind::Tone),
            "consonant" => Ok(DrillKind::Consonant),
            "vowel" => Ok(DrillKind::Vowel),
            _ => Err(ParseError {
                kind: "drill",
                value: s.to_string(),
            }),
        }
    }
}

pub fn generate_drill(grammar: &SyllableGrammar, kind: DrillKind) -> Vec<String> {
    match kind {
        DrillKind::Tone => Tone::ALL
            .iter()
            .map(|&tone| grammar.with_tone(TONE_BASE, tone))
            .collect(),
        DrillKind::Consonant => CONSONANT_ONSETS
            .iter()
            .map(|onset| format!("{onset}{CONSONANT_RHYME}"))
            .collect(),
        DrillKind::Vowel => DRILL_VOWELS
            .iter()
            .map(|vowel| format!("{VOWEL_ONSET}{vowel}"))
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PronunciationReport {
    pub word: String,
    pub valid: bool,
    pub onset: Option<String>,
    pub nucleus: Option<String>,
    /// Read from the final letter alone, like [`SyllableGrammar::get_tone`].
    pub tone: Tone,
    pub feedback: &'static str,
}

pub fn check_pronunciation(grammar: &SyllableGrammar, word: &str) -> PronunciationReport {
    let parts = grammar.decompose(word);
    let valid = parts.is_match();
    PronunciationReport {
        word: word.to_string(),
        valid,
        onset: parts.onset,
        nucleus: parts.nucleus,
        tone: grammar.get_tone(word),
        feedback: if valid {
            "Valid Hmong syllable"
        } else {
            "Invalid structure"
        },
    }
}
