use std::fs;

use hmong_engine::ConfigKind;

pub fn export(kind: ConfigKind) {
    print!("{}", kind.default_toml());
}

pub fn validate(kind: ConfigKind, file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let summary = die!(kind.validate(&content), "Error: {}");
    println!("OK: {summary}");
}
