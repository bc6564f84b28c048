use hmong_core::dict::Lang;
use hmong_engine::HmongEngine;

use super::{print_columns, print_json, CliError};

pub fn lookup(engine: &HmongEngine, word: &str, json: bool) {
    let entry = die!(
        engine
            .dict()
            .lookup(word)
            .ok_or_else(|| CliError::NotFound(word.to_string())),
        "Error: {}"
    );
    if json {
        print_json(entry);
        return;
    }
    println!("{}: {}", entry.hmong, entry.gloss());
    if let Some(pos) = entry.pos {
        println!("  pos: {pos}");
    }
    if !entry.classifiers.is_empty() {
        println!("  classifiers: {}", entry.classifiers.join(", "));
    }
}

pub fn reverse(engine: &HmongEngine, word: &str, json: bool) {
    let words = engine.dict().translate_en_to_hm(word);
    if json {
        print_json(words);
        return;
    }
    if words.is_empty() {
        eprintln!("Error: not found: {word}");
        std::process::exit(1);
    }
    println!("{}", words.join(", "));
}

pub fn search(engine: &HmongEngine, query: &str, lang: Lang, limit: Option<usize>, json: bool) {
    let hits = match limit {
        Some(n) => engine.dict().search(query, lang, n),
        None => engine.search(query, lang),
    };
    if json {
        print_json(&hits);
        return;
    }
    print_columns(hits.iter().map(|h| (h.hmong.as_str(), h.english.as_str())));
    eprintln!("{} hits", hits.len());
}

/// All keys, sorted.
pub fn words(engine: &HmongEngine, json: bool) {
    let words = engine.dict().words();
    if json {
        print_json(&words);
    } else {
        for w in words {
            println!("{w}");
        }
    }
}
