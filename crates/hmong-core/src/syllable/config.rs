use std::collections::HashSet;

use serde::Deserialize;

pub const DEFAULT_RPA_TOML: &str = include_str!("default_rpa.toml");

#[derive(Deserialize)]
struct RpaConfig {
    onsets: OnsetConfig,
    nuclei: NucleusConfig,
}

#[derive(Deserialize)]
struct OnsetConfig {
    trigraphs: Vec<String>,
    digraphs: Vec<String>,
    singles: Vec<String>,
}

#[derive(Deserialize)]
struct NucleusConfig {
    vowels: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RpaConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("{table} entry {entry:?} has the wrong length")]
    BadLength { table: &'static str, entry: String },
    #[error("entry {0:?} must be lowercase ASCII letters")]
    NotLowercaseAscii(String),
    #[error("duplicate entry: {0}")]
    Duplicate(String),
}

/// Validated syllable tables.
///
/// `onsets` is in match priority order (trigraphs, digraphs, singles);
/// `vowels` keeps the order of the source table.
#[derive(Debug, Clone)]
pub struct RpaTables {
    pub onsets: Vec<String>,
    pub vowels: Vec<String>,
}

/// Parse and validate an RPA table TOML document.
pub fn parse_rpa_toml(toml_str: &str) -> Result<RpaTables, RpaConfigError> {
    let config: RpaConfig =
        toml::from_str(toml_str).map_err(|e| RpaConfigError::Parse(e.to_string()))?;

    let groups: [(&'static str, &[String], usize); 3] = [
        ("onsets.trigraphs", &config.onsets.trigraphs, 3),
        ("onsets.digraphs", &config.onsets.digraphs, 2),
        ("onsets.singles", &config.onsets.singles, 1),
    ];

    let mut seen = HashSet::new();
    let mut onsets = Vec::new();
    for (table, entries, len) in groups {
        if entries.is_empty() {
            return Err(RpaConfigError::Empty(table));
        }
        for entry in entries {
            check_letters(entry)?;
            if entry.len() != len {
                return Err(RpaConfigError::BadLength {
                    table,
                    entry: entry.clone(),
                });
            }
            if !seen.insert(entry.as_str()) {
                return Err(RpaConfigError::Duplicate(entry.clone()));
            }
            onsets.push(entry.clone());
        }
    }

    let vowels = config.nuclei.vowels;
    if vowels.is_empty() {
        return Err(RpaConfigError::Empty("nuclei.vowels"));
    }
    let mut seen = HashSet::new();
    for vowel in &vowels {
        check_letters(vowel)?;
        if !(1..=4).contains(&vowel.len()) {
            return Err(RpaConfigError::BadLength {
                table: "nuclei.vowels",
                entry: vowel.clone(),
            });
        }
        if !seen.insert(vowel.as_str()) {
            return Err(RpaConfigError::Duplicate(vowel.clone()));
        }
    }

    Ok(RpaTables { onsets, vowels })
}

fn check_letters(entry: &str) -> Result<(), RpaConfigError> {
    if entry.is_empty() || !entry.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(RpaConfigError::NotLowercaseAscii(entry.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[onsets]
trigraphs = ["ntx"]
digraphs = ["ny"]
singles = ["k"]

[nuclei]
vowels = ["a", "aw"]
"#;

    #[test]
    fn parse_default_toml() {
        let tables = parse_rpa_toml(DEFAULT_RPA_TOML).unwrap();
        assert_eq!(tables.onsets.len(), 7 + 19 + 18);
        assert_eq!(tables.vowels.len(), 15);
        // Priority order: trigraphs lead, singles trail.
        assert_eq!(tables.onsets[0], "nch");
        assert_eq!(tables.onsets.last().map(String::as_str), Some("z"));
    }

    #[test]
    fn parse_minimal_toml() {
        let tables = parse_rpa_toml(MINIMAL).unwrap();
        assert_eq!(tables.onsets, vec!["ntx", "ny", "k"]);
        assert_eq!(tables.vowels, vec!["a", "aw"]);
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_rpa_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RpaConfigError::Parse(_)));
    }

    #[test]
    fn error_empty_table() {
        let toml = MINIMAL.replace(r#"digraphs = ["ny"]"#, "digraphs = []");
        let err = parse_rpa_toml(&toml).unwrap_err();
        assert!(matches!(err, RpaConfigError::Empty("onsets.digraphs")));
    }

    #[test]
    fn error_wrong_length() {
        let toml = MINIMAL.replace(r#"trigraphs = ["ntx"]"#, r#"trigraphs = ["nt"]"#);
        let err = parse_rpa_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            RpaConfigError::BadLength {
                table: "onsets.trigraphs",
                ..
            }
        ));

        let toml = MINIMAL.replace(r#"["a", "aw"]"#, r#"["a", "aaaaa"]"#);
        let err = parse_rpa_toml(&toml).unwrap_err();
        assert!(matches!(err, RpaConfigError::BadLength { .. }));
    }

    #[test]
    fn error_uppercase_entry() {
        let toml = MINIMAL.replace(r#"singles = ["k"]"#, r#"singles = ["K"]"#);
        let err = parse_rpa_toml(&toml).unwrap_err();
        assert!(matches!(err, RpaConfigError::NotLowercaseAscii(_)));
    }

    #[test]
    fn error_duplicate() {
        let toml = MINIMAL.replace(r#"["a", "aw"]"#, r#"["a", "a"]"#);
        let err = parse_rpa_toml(&toml).unwrap_err();
        assert!(matches!(err, RpaConfigError::Duplicate(_)));
    }
}
