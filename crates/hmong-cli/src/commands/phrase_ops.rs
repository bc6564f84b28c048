use hmong_engine::HmongEngine;

use super::{print_columns, print_json, CliError};

pub fn greeting(engine: &HmongEngine, time: &str) {
    println!("{}", engine.phrasebook().greeting(time));
}

pub fn question(engine: &HmongEngine, topic: &str) {
    println!("{}", engine.phrasebook().question(topic));
}

pub fn dialogue(engine: &HmongEngine, unit: u32, json: bool) {
    let book = engine.phrasebook();
    let lines = book.dialogue(unit);
    if lines.is_empty() {
        let available: Vec<String> = book.dialogue_units().iter().map(u32::to_string).collect();
        eprintln!(
            "Error: no dialogue unit {unit} (available: {})",
            available.join(", ")
        );
        std::process::exit(1);
    }
    if json {
        print_json(lines);
        return;
    }
    print_columns(lines.iter().map(|l| (l.hmong.as_str(), l.english.as_str())));
}

/// One proverb, or the whole topic when `pick` is `None`.
pub fn proverb(engine: &HmongEngine, topic: &str, pick: Option<usize>, json: bool) {
    let book = engine.phrasebook();
    match pick {
        Some(i) => {
            let p = book.proverb(topic, i);
            if json {
                print_json(p);
            } else {
                println!("{p}");
            }
        }
        None => {
            let all = book.proverbs(topic);
            if json {
                print_json(all);
            } else {
                for p in all {
                    println!("{p}");
                }
            }
        }
    }
}

pub fn idiom(engine: &HmongEngine, phrase: &str) {
    let meaning = die!(
        engine
            .phrasebook()
            .explain_idiom(phrase)
            .ok_or_else(|| CliError::NotFound(phrase.to_string())),
        "Error: {}"
    );
    println!("{meaning}");
}

pub fn flashcards(engine: &HmongEngine, category: &str, json: bool) {
    let book = engine.phrasebook();
    let cards = book.flashcards(category);
    if cards.is_empty() {
        eprintln!(
            "Error: no flashcards for {category:?} (available: {})",
            book.flashcard_categories().join(", ")
        );
        std::process::exit(1);
    }
    if json {
        print_json(cards);
        return;
    }
    print_columns(cards.iter().map(|c| (c.hmong.as_str(), c.english.as_str())));
}

/// Keys accepted by the phrasebook commands.
pub fn topics(engine: &HmongEngine) {
    let book = engine.phrasebook();
    println!("greetings:  {}", book.greeting_times().join(", "));
    println!("questions:  {}", book.question_topics().join(", "));
    let units: Vec<String> = book.dialogue_units().iter().map(u32::to_string).collect();
    println!("dialogues:  {}", units.join(", "));
    println!("proverbs:   {}", book.proverb_topics().join(", "));
    println!("flashcards: {}", book.flashcard_categories().join(", "));
}
