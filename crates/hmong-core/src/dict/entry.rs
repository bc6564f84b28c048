use serde::{Deserialize, Serialize};

use crate::grammar::PartOfSpeech;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub hmong: String,
    pub english: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PartOfSpeech>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifiers: Vec<String>,
}

impl DictEntry {
    pub fn new(hmong: impl Into<String>, english: Vec<String>) -> Self {
        Self {
            hmong: hmong.into(),
            english,
            pos: None,
            classifiers: Vec::new(),
        }
    }

    /// Glosses joined with `", "`.
    pub fn gloss(&self) -> String {
        self.english.join(", ")
    }
}
