use std::path::PathBuf;

use serde::Serialize;

use hmong_core::dict::DictError;
use hmong_core::grammar::PartOfSpeech;
use hmong_core::phrasebook::PhrasebookError;
use hmong_core::settings::SettingsError;
use hmong_core::syllable::RpaConfigError;
use hmong_core::{Decomposition, Tone};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum HmongError {
    #[error("IO error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid RPA table: {0}")]
    Rpa(#[from] RpaConfigError),
    #[error("invalid dictionary: {0}")]
    Dict(#[from] DictError),
    #[error("invalid phrasebook: {0}")]
    Phrasebook(#[from] PhrasebookError),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<HmongError>,
    },
}

impl HmongError {
    pub(super) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        HmongError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Optional replacement files for the embedded tables.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub rpa: Option<PathBuf>,
    pub dict: Option<PathBuf>,
    pub phrasebook: Option<PathBuf>,
    pub settings: Option<PathBuf>,
}

/// Per-token result of [`HmongEngine::analyze`](super::HmongEngine::analyze).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenAnalysis {
    /// The whitespace token as written.
    pub token: String,
    /// `token` without surrounding punctuation; this is what gets analyzed.
    pub word: String,
    pub valid: bool,
    pub decomposition: Decomposition,
    pub tone: Tone,
    pub tone_description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
    pub pos: PartOfSpeech,
}
