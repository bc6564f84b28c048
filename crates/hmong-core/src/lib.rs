//! Hmong (RPA) text processing: syllable grammar, tones, dictionary and
//! the helper tables built on top of them.

pub mod dict;
pub mod drill;
pub mod grammar;
pub mod numeric;
pub mod phrasebook;
pub mod settings;
pub mod syllable;
pub mod text;
pub mod tone;

pub use syllable::{Decomposition, SyllableGrammar};
pub use tone::Tone;
