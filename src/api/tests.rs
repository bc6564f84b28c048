use std::fs;
use std::path::Path;

use hmong_core::dict::Lang;
use hmong_core::grammar::PartOfSpeech;
use hmong_core::Tone;

use super::{ConfigKind, EngineConfig, HmongEngine, HmongError};

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn analyze_sentence() {
    let engine = HmongEngine::new();
    let report = engine.analyze("Kuv  nyob zoo!");
    assert_eq!(report.len(), 3);

    assert_eq!(report[0].token, "Kuv");
    assert!(report[0].valid);
    assert_eq!(report[0].tone, Tone::V);
    assert_eq!(report[0].gloss.as_deref(), Some("I, me"));
    assert_eq!(report[0].pos, PartOfSpeech::Pronoun);

    assert_eq!(report[2].token, "zoo!");
    assert_eq!(report[2].word, "zoo");
    assert!(report[2].valid);
    assert_eq!(report[2].decomposition.onset.as_deref(), Some("z"));
    assert_eq!(report[2].decomposition.nucleus.as_deref(), Some("oo"));
    assert_eq!(report[2].tone, Tone::Unmarked);
    assert_eq!(report[2].tone_description, "mid tone (unmarked)");
}

#[test]
fn analyze_invalid_and_empty() {
    let engine = HmongEngine::new();
    assert!(engine.analyze("   ").is_empty());

    let report = engine.analyze("xyz 123");
    assert!(report.iter().all(|a| !a.valid));
    assert!(report.iter().all(|a| a.gloss.is_none()));
    assert_eq!(report[0].pos, PartOfSpeech::Unknown);
}

#[test]
fn analyze_serializes_to_json() {
    let engine = HmongEngine::new();
    let report = engine.analyze("ntxawg");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json[0]["decomposition"]["onset"], "ntx");
    assert_eq!(json[0]["decomposition"]["nucleus"], "aw");
    assert_eq!(json[0]["decomposition"]["coda"], "g");
    assert_eq!(json[0]["tone"], "G");
    assert_eq!(json[0]["pos"], "unknown");
    // No gloss, so the field is omitted.
    assert!(json[0].get("gloss").is_none());
}

#[test]
fn added_words_show_up_in_analysis() {
    let mut engine = HmongEngine::new();
    assert!(engine.analyze("ntxawg")[0].gloss.is_none());

    engine.dict_mut().add_word("Ntxawg", "niece").unwrap();
    let report = engine.analyze("ntxawg");
    assert_eq!(report[0].gloss.as_deref(), Some("niece"));
    assert_eq!(engine.search("ntxaw", Lang::Hmong).len(), 1);

    let before = engine.dict().len();
    assert!(engine.dict_mut().add_word("ntxawg", " ").is_err());
    assert_eq!(engine.dict().len(), before);
    assert_eq!(engine.analyze("ntxawg")[0].gloss.as_deref(), Some("niece"));
}

#[test]
fn search_uses_configured_limit() {
    let dir = tempfile::tempdir().unwrap();
    let settings = hmong_core::settings::default_toml().replace("search_limit = 10", "search_limit = 2");
    let config = EngineConfig {
        settings: Some(write(dir.path(), "settings.toml", &settings)),
        ..Default::default()
    };
    let engine = HmongEngine::from_config(&config).unwrap();
    assert_eq!(engine.settings().dictionary.search_limit, 2);
    assert_eq!(engine.search("a", Lang::Hmong).len(), 2);
    assert_eq!(HmongEngine::new().search("a", Lang::Hmong).len(), 10);
}

#[test]
fn custom_tables_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let rpa = write(
        dir.path(),
        "rpa.toml",
        r#"
[onsets]
trigraphs = ["ntx"]
digraphs = ["ts"]
singles = ["k"]
[nuclei]
vowels = ["a", "u", "aw"]
"#,
    );
    let dict = write(
        dir.path(),
        "dict.toml",
        r#"entries = [{ hmong = "kub", english = ["hot", "gold"], pos = "adjective" }]"#,
    );
    let config = EngineConfig {
        rpa: Some(rpa),
        dict: Some(dict),
        ..Default::default()
    };
    let engine = HmongEngine::from_config(&config).unwrap();
    assert!(engine.grammar().is_valid("ntxawg"));
    assert!(!engine.grammar().is_valid("zoo"));
    assert_eq!(engine.dict().len(), 1);
    assert_eq!(engine.detect_pos("kub"), PartOfSpeech::Adjective);
    assert_eq!(engine.classifiers("kub"), vec!["tus"]);
    // Untouched tables keep their defaults.
    assert_eq!(engine.phrasebook().greeting("morning"), "Nyob zoo sawv ntxov");
}

#[test]
fn custom_settings_change_phrasebook_fallbacks() {
    let dir = tempfile::tempdir().unwrap();
    let settings = hmong_core::settings::default_toml()
        .replace("default_greeting = \"general\"", "default_greeting = \"goodbye\"");
    let config = EngineConfig {
        settings: Some(write(dir.path(), "settings.toml", &settings)),
        ..Default::default()
    };
    let engine = HmongEngine::from_config(&config).unwrap();
    assert_eq!(engine.phrasebook().greeting("midnight"), "Sib ntsib dua");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let config = EngineConfig {
        dict: Some(path.clone()),
        ..Default::default()
    };
    let err = HmongEngine::from_config(&config).unwrap_err();
    match err {
        HmongError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn invalid_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "dict.toml", "entries = []");
    let config = EngineConfig {
        dict: Some(path.clone()),
        ..Default::default()
    };
    let err = HmongEngine::from_config(&config).unwrap_err();
    assert!(err.to_string().starts_with(&path.display().to_string()));
    match err {
        HmongError::InFile { path: p, source } => {
            assert_eq!(p, path);
            assert!(matches!(*source, HmongError::Dict(_)));
        }
        other => panic!("expected InFile, got {other:?}"),
    }
}

#[test]
fn settings_missing_phrasebook_key() {
    let dir = tempfile::tempdir().unwrap();
    let settings = hmong_core::settings::default_toml()
        .replace("default_proverb_topic = \"wisdom\"", "default_proverb_topic = \"luck\"");
    let config = EngineConfig {
        settings: Some(write(dir.path(), "settings.toml", &settings)),
        ..Default::default()
    };
    let err = HmongEngine::from_config(&config).unwrap_err();
    assert!(matches!(err, HmongError::Phrasebook(_)));
}

#[test]
fn config_kind_round_trip() {
    for kind in ConfigKind::ALL {
        assert_eq!(kind.as_str().parse::<ConfigKind>().unwrap(), kind);
        assert!(kind.validate(kind.default_toml()).is_ok(), "{kind}");
    }
    assert_eq!("RPA".parse::<ConfigKind>().unwrap(), ConfigKind::Rpa);
    assert!("keymap".parse::<ConfigKind>().is_err());
}

#[test]
fn config_validate_summaries() {
    assert_eq!(
        ConfigKind::Rpa
            .validate(ConfigKind::Rpa.default_toml())
            .unwrap(),
        "44 onsets, 15 vowels"
    );
    assert_eq!(
        ConfigKind::Settings
            .validate(ConfigKind::Settings.default_toml())
            .unwrap(),
        "dictionary.search_limit=10, grammar.default_classifier=tus"
    );
    let err = ConfigKind::Dict.validate("entries = [").unwrap_err();
    assert!(matches!(err, HmongError::Dict(_)));
}
