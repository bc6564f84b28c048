use hmong_core::grammar::{conjugate, substitute, Tense};
use hmong_engine::HmongEngine;

use super::print_json;

pub fn pos(engine: &HmongEngine, words: &[String], json: bool) {
    let tags: Vec<(&str, &str)> = words
        .iter()
        .map(|w| (w.as_str(), engine.detect_pos(w).as_str()))
        .collect();
    if json {
        print_json(&tags);
        return;
    }
    for (w, tag) in tags {
        println!("{w}\t{tag}");
    }
}

pub fn classifiers(engine: &HmongEngine, noun: &str, json: bool) {
    let cls = engine.classifiers(noun);
    if json {
        print_json(&cls);
    } else {
        println!("{}", cls.join(", "));
    }
}

pub fn conjugate_cmd(sentence: &str, tense: Tense) {
    println!("{}", conjugate(sentence, tense));
}

pub fn substitute_cmd(sentence: &str, target: &str, replacement: &str) {
    println!("{}", substitute(sentence, target, replacement));
}
