//! Greetings, questions, dialogue units, proverbs, idioms and flashcards.
//!
//! Unknown greeting, question and proverb keys fall back to the entries
//! named in [`PhrasebookSettings`]; other misses return `None` or an empty
//! slice.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::settings::PhrasebookSettings;

pub const DEFAULT_PHRASEBOOK_TOML: &str = include_str!("default_phrasebook.toml");

/// Returns the embedded default phrasebook TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_PHRASEBOOK_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum PhrasebookError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{table}] has no {key:?} entry to fall back on")]
    MissingFallback { table: &'static str, key: String },
    #[error("proverb topic {0:?} is empty")]
    EmptyTopic(String),
    #[error("duplicate dialogue unit: {0}")]
    DuplicateUnit(u32),
    #[error("[{table}] has more than one {key:?} entry")]
    DuplicateKey { table: &'static str, key: String },
}

#[derive(Deserialize)]
struct PhrasebookFile {
    greetings: BTreeMap<String, String>,
    questions: BTreeMap<String, String>,
    #[serde(default)]
    dialogues: Vec<DialogueFile>,
    proverbs: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    idioms: BTreeMap<String, String>,
    #[serde(default)]
    flashcards: BTreeMap<String, Vec<(String, String)>>,
}

#[derive(Deserialize)]
struct DialogueFile {
    unit: u32,
    lines: Vec<(String, String)>,
}

/// One line of a dialogue or one flashcard: Hmong text and its English
/// counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    pub hmong: String,
    pub english: String,
}

impl From<(String, String)> for Phrase {
    fn from((hmong, english): (String, String)) -> Self {
        Self { hmong, english }
    }
}

#[derive(Debug, Clone)]
pub struct Phrasebook {
    greetings: BTreeMap<String, String>,
    questions: BTreeMap<String, String>,
    dialogues: BTreeMap<u32, Vec<Phrase>>,
    proverbs: BTreeMap<String, Vec<String>>,
    idioms: BTreeMap<String, String>,
    flashcards: BTreeMap<String, Vec<Phrase>>,
    default_greeting: String,
    fallback_question: String,
    default_proverb_topic: String,
}

impl Default for Phrasebook {
    fn default() -> Self {
        let settings = crate::settings::Settings::default();
        Self::from_toml(DEFAULT_PHRASEBOOK_TOML, &settings.phrasebook)
            .expect("phrasebook TOML must be valid")
    }
}

/// Re-key `map` by normalized key. Keys that collide after normalizing
/// are rejected.
fn normalize_keys<V>(
    table: &'static str,
    map: BTreeMap<String, V>,
) -> Result<BTreeMap<String, V>, PhrasebookError> {
    let mut out = BTreeMap::new();
    for (k, v) in map {
        let key = normalize_key(&k);
        if out.insert(key.clone(), v).is_some() {
            return Err(PhrasebookError::DuplicateKey { table, key });
        }
    }
    Ok(out)
}

fn normalize_key(key: &str) -> String {
    key.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Phrasebook {
    pub fn from_toml(
        toml_str: &str,
        settings: &PhrasebookSettings,
    ) -> Result<Self, PhrasebookError> {
        let file: PhrasebookFile =
            toml::from_str(toml_str).map_err(|e| PhrasebookError::Parse(e.to_string()))?;

        let mut units = HashSet::new();
        let mut dialogues = BTreeMap::new();
        for d in file.dialogues {
            if !units.insert(d.unit) {
                return Err(PhrasebookError::DuplicateUnit(d.unit));
            }
            dialogues.insert(d.unit, d.lines.into_iter().map(Phrase::from).collect());
        }

        if let Some((topic, _)) = file.proverbs.iter().find(|(_, list)| list.is_empty()) {
            return Err(PhrasebookError::EmptyTopic(topic.clone()));
        }

        let book = Self {
            greetings: normalize_keys("greetings", file.greetings)?,
            questions: normalize_keys("questions", file.questions)?,
            dialogues,
            proverbs: normalize_keys("proverbs", file.proverbs)?,
            idioms: normalize_keys("idioms", file.idioms)?,
            flashcards: normalize_keys("flashcards", file.flashcards)?
                .into_iter()
                .map(|(k, cards)| (k, cards.into_iter().map(Phrase::from).collect()))
                .collect(),
            default_greeting: normalize_key(&settings.default_greeting),
            fallback_question: normalize_key(&settings.fallback_question),
            default_proverb_topic: normalize_key(&settings.default_proverb_topic),
        };

        let fallbacks = [
            (
                "greetings",
                &book.default_greeting,
                book.greetings.contains_key(&book.default_greeting),
            ),
            (
                "questions",
                &book.fallback_question,
                book.questions.contains_key(&book.fallback_question),
            ),
            (
                "proverbs",
                &book.default_proverb_topic,
                book.proverbs.contains_key(&book.default_proverb_topic),
            ),
        ];
        for (table, key, present) in fallbacks {
            if !present {
                return Err(PhrasebookError::MissingFallback {
                    table,
                    key: key.clone(),
                });
            }
        }

        debug!(
            greetings = book.greetings.len(),
            dialogues = book.dialogues.len(),
            proverb_topics = book.proverbs.len(),
            "phrasebook loaded"
        );
        Ok(book)
    }

    /// Greeting for a time of day (`morning`, `afternoon`, `evening`,
    /// `general`, `goodbye`).
    pub fn greeting(&self, time: &str) -> &str {
        self.greetings
            .get(&normalize_key(time))
            .or_else(|| self.greetings.get(&self.default_greeting))
            .map_or("", String::as_str)
    }

    pub fn question(&self, topic: &str) -> &str {
        self.questions
            .get(&normalize_key(topic))
            .or_else(|| self.questions.get(&self.fallback_question))
            .map_or("", String::as_str)
    }

    pub fn dialogue(&self, unit: u32) -> &[Phrase] {
        self.dialogues
            .get(&unit)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn dialogue_units(&self) -> Vec<u32> {
        self.dialogues.keys().copied().collect()
    }

    pub fn proverbs(&self, topic: &str) -> &[String] {
        self.proverbs
            .get(&normalize_key(topic))
            .or_else(|| self.proverbs.get(&self.default_proverb_topic))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// One proverb for `topic`; `pick` indexes into the topic's list,
    /// wrapping around.
    pub fn proverb(&self, topic: &str, pick: usize) -> &str {
        let list = self.proverbs(topic);
        if list.is_empty() {
            return "";
        }
        &list[pick % list.len()]
    }

    pub fn explain_idiom(&self, phrase: &str) -> Option<&str> {
        self.idioms.get(&normalize_key(phrase)).map(String::as_str)
    }

    pub fn flashcards(&self, category: &str) -> &[Phrase] {
        self.flashcards
            .get(&normalize_key(category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn greeting_times(&self) -> Vec<&str> {
        self.greetings.keys().map(String::as_str).collect()
    }

    pub fn question_topics(&self) -> Vec<&str> {
        self.questions.keys().map(String::as_str).collect()
    }

    pub fn proverb_topics(&self) -> Vec<&str> {
        self.proverbs.keys().map(String::as_str).collect()
    }

    pub fn flashcard_categories(&self) -> Vec<&str> {
        self.flashcards.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn book() -> Phrasebook {
        Phrasebook::default()
    }

    #[test]
    fn parse_default_toml() {
        let settings = Settings::default();
        let book = Phrasebook::from_toml(DEFAULT_PHRASEBOOK_TOML, &settings.phrasebook).unwrap();
        assert_eq!(book.dialogue_units(), vec![1, 2, 3]);
        assert_eq!(book.proverb_topics(), vec!["family", "wisdom", "work"]);
        assert_eq!(book.flashcard_categories(), vec!["colors", "family", "food"]);
    }

    #[test]
    fn test_greeting() {
        let book = book();
        assert_eq!(book.greeting("morning"), "Nyob zoo sawv ntxov");
        assert_eq!(book.greeting("Goodbye"), "Sib ntsib dua");
        assert_eq!(book.greeting("midnight"), "Nyob zoo");
    }

    #[test]
    fn test_question() {
        let book = book();
        assert_eq!(book.question("name"), "Koj lub npe hu li cas?");
        assert_eq!(book.question("weather"), "Koj nyob li cas?");
    }

    #[test]
    fn test_dialogue() {
        let book = book();
        let lines = book.dialogue(1);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].hmong, "Nyob zoo!");
        assert_eq!(lines[0].english, "Hello!");
        assert!(book.dialogue(99).is_empty());
    }

    #[test]
    fn test_proverb() {
        let book = book();
        assert_eq!(book.proverbs("work").len(), 1);
        assert_eq!(book.proverb("wisdom", 0), "Niam txiv lus yog lus qhuab qhia");
        assert_eq!(book.proverb("wisdom", 3), book.proverb("wisdom", 1));
        // Unknown topics fall back to wisdom.
        assert_eq!(book.proverbs("luck"), book.proverbs("wisdom"));
    }

    #[test]
    fn test_explain_idiom() {
        let book = book();
        assert_eq!(
            book.explain_idiom("Zoo  Siab"),
            Some("happy (lit: good heart)")
        );
        assert_eq!(book.explain_idiom("siab zoo"), None);
    }

    #[test]
    fn test_flashcards() {
        let book = book();
        let cards = book.flashcards("food");
        assert_eq!(cards[0].hmong, "mov");
        assert_eq!(cards[0].english, "rice");
        assert!(book.flashcards("animals").is_empty());
    }

    #[test]
    fn error_missing_fallback() {
        let mut settings = Settings::default().phrasebook;
        settings.default_greeting = "dawn".to_string();
        let err = Phrasebook::from_toml(DEFAULT_PHRASEBOOK_TOML, &settings).unwrap_err();
        assert!(matches!(
            err,
            PhrasebookError::MissingFallback {
                table: "greetings",
                ..
            }
        ));
    }

    #[test]
    fn error_duplicate_unit() {
        let toml = r#"
[greetings]
general = "Nyob zoo"
[questions]
feeling = "Koj nyob li cas?"
[proverbs]
wisdom = ["a"]
[[dialogues]]
unit = 1
lines = []
[[dialogues]]
unit = 1
lines = []
"#;
        let settings = Settings::default().phrasebook;
        let err = Phrasebook::from_toml(toml, &settings).unwrap_err();
        assert!(matches!(err, PhrasebookError::DuplicateUnit(1)));
    }

    #[test]
    fn error_empty_topic() {
        let toml = r#"
[greetings]
general = "Nyob zoo"
[questions]
feeling = "Koj nyob li cas?"
[proverbs]
wisdom = ["a"]
luck = []
"#;
        let settings = Settings::default().phrasebook;
        let err = Phrasebook::from_toml(toml, &settings).unwrap_err();
        assert!(matches!(err, PhrasebookError::EmptyTopic(ref t) if t == "luck"));
    }

    #[test]
    fn fallback_keys_are_normalized() {
        let mut settings = Settings::default().phrasebook;
        settings.default_greeting = " General ".to_string();
        settings.fallback_question = "NAME".to_string();
        settings.default_proverb_topic = "  family".to_string();
        let book = Phrasebook::from_toml(DEFAULT_PHRASEBOOK_TOML, &settings).unwrap();
        assert_eq!(book.greeting("midnight"), "Nyob zoo");
        assert_eq!(book.question("weather"), "Koj lub npe hu li cas?");
        assert_eq!(book.proverbs("luck"), book.proverbs("family"));
    }

    #[test]
    fn error_duplicate_key() {
        let toml = r#"
[greetings]
general = "Nyob zoo"
Morning = "UPPER"
morning = "Nyob zoo sawv ntxov"
[questions]
feeling = "Koj nyob li cas?"
[proverbs]
wisdom = ["a"]
"#;
        let settings = Settings::default().phrasebook;
        let err = Phrasebook::from_toml(toml, &settings).unwrap_err();
        assert!(matches!(
            err,
            PhrasebookError::DuplicateKey { table: "greetings", ref key } if key == "morning"
        ));

        let toml = r#"
[greetings]
general = "Nyob zoo"
[questions]
feeling = "Koj nyob li cas?"
[proverbs]
wisdom = ["a"]
[idioms]
"zoo siab" = "happy"
"Zoo  Siab" = "happy"
"#;
        let err = Phrasebook::from_toml(toml, &settings).unwrap_err();
        assert!(matches!(
            err,
            PhrasebookError::DuplicateKey { table: "idioms", ref key } if key == "zoo siab"
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let settings = Settings::default().phrasebook;
        let err = Phrasebook::from_toml("[greetings", &settings).unwrap_err();
        assert!(matches!(err, PhrasebookError::Parse(_)));
    }
}
