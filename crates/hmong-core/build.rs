fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/syllable/default_rpa.toml",
        include_str!("src/syllable/default_rpa.toml"),
    );
    validate_toml(
        "src/dict/default_dict.toml",
        include_str!("src/dict/default_dict.toml"),
    );
    validate_toml(
        "src/phrasebook/default_phrasebook.toml",
        include_str!("src/phrasebook/default_phrasebook.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
