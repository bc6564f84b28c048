//! RPA tone categories.
//!
//! Seven tones are written with a syllable-final letter; the eighth (mid) tone
//! is the absence of one.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    B,
    J,
    V,
    S,
    G,
    D,
    M,
    Unmarked,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone: {0:?}")]
pub struct UnknownTone(pub String);

impl Tone {
    /// Drill order: the seven marked tones, then the unmarked one.
    pub const ALL: [Tone; 8] = [
        Tone::B,
        Tone::J,
        Tone::V,
        Tone::S,
        Tone::G,
        Tone::D,
        Tone::M,
        Tone::Unmarked,
    ];

    /// The tone written by a syllable-final letter, case-insensitive.
    pub fn from_letter(c: char) -> Option<Tone> {
        match c.to_ascii_lowercase() {
            'b' => Some(Tone::B),
            'j' => Some(Tone::J),
            'v' => Some(Tone::V),
            's' => Some(Tone::S),
            'g' => Some(Tone::G),
            'd' => Some(Tone::D),
            'm' => Some(Tone::M),
            _ => None,
        }
    }

    pub fn is_tone_letter(c: char) -> bool {
        Self::from_letter(c).is_some()
    }

    /// Lowercase marker letter, `None` for the unmarked tone.
    pub fn letter(self) -> Option<char> {
        match self {
            Tone::B => Some('b'),
            Tone::J => Some('j'),
            Tone::V => Some('v'),
            Tone::S => Some('s'),
            Tone::G => Some('g'),
            Tone::D => Some('d'),
            Tone::M => Some('m'),
            Tone::Unmarked => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::B => "B",
            Tone::J => "J",
            Tone::V => "V",
            Tone::S => "S",
            Tone::G => "G",
            Tone::D => "D",
            Tone::M => "M",
            Tone::Unmarked => "NONE",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tone::B => "mid-low tone",
            Tone::J => "high falling tone",
            Tone::V => "mid-high rising tone",
            Tone::S => "low breathy tone",
            Tone::G => "low falling tone",
            Tone::D => "high tone",
            Tone::M => "low glottalized tone",
            Tone::Unmarked => "mid tone (unmarked)",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts a marker letter in either case, `""` or `"none"` for the
/// unmarked tone.
impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Tone::Unmarked);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Tone::from_letter(c).ok_or_else(|| UnknownTone(s.to_string())),
            _ => Err(UnknownTone(s.to_string())),
        }
    }
}

impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
