use hmong_core::drill::{check_pronunciation, generate_drill, DrillKind};
use hmong_core::text;
use hmong_core::Tone;
use hmong_engine::HmongEngine;

use super::print_json;

fn or_dash(s: Option<&str>) -> &str {
    s.unwrap_or("-")
}

pub fn analyze(engine: &HmongEngine, input: &str, json: bool) {
    let report = engine.analyze(input);
    if json {
        print_json(&report);
        return;
    }
    for a in &report {
        let d = &a.decomposition;
        let parts = if a.valid {
            format!(
                "{} + {} + {}",
                or_dash(d.onset.as_deref()),
                or_dash(d.nucleus.as_deref()),
                d.coda.map_or_else(|| "-".to_string(), String::from)
            )
        } else {
            "invalid".to_string()
        };
        println!(
            "{}\t{parts}\ttone={} ({})\tpos={}\t{}",
            a.token,
            a.tone,
            a.tone_description,
            a.pos,
            a.gloss.as_deref().unwrap_or("")
        );
    }
    let valid = report.iter().filter(|a| a.valid).count();
    eprintln!("{} tokens, {valid} valid syllables", report.len());
}

pub fn decompose(engine: &HmongEngine, syllable: &str, json: bool) {
    let d = engine.grammar().decompose(syllable);
    if json {
        print_json(&d);
        return;
    }
    if !d.is_match() {
        println!("{syllable}: invalid syllable");
        return;
    }
    println!("onset:   {}", or_dash(d.onset.as_deref()));
    println!("nucleus: {}", or_dash(d.nucleus.as_deref()));
    println!(
        "coda:    {}",
        d.coda.map_or_else(|| "-".to_string(), String::from)
    );
    println!("tone:    {} ({})", d.tone(), d.tone().description());
}

pub fn tone(engine: &HmongEngine, syllable: &str, json: bool) {
    let t = engine.grammar().get_tone(syllable);
    if json {
        print_json(&t);
    } else {
        println!("{t}\t{}", t.description());
    }
}

pub fn convert_tone(engine: &HmongEngine, syllable: &str, target: &str) {
    println!("{}", engine.grammar().convert_tone(syllable, target));
}

/// Every tone of `syllable`, one per line.
pub fn tone_table(engine: &HmongEngine, syllable: &str) {
    for t in Tone::ALL {
        println!(
            "{}\t{}\t{}",
            t,
            engine.grammar().with_tone(syllable, t),
            t.description()
        );
    }
}

pub fn normalize(input: &str, sentences: bool) {
    if sentences {
        println!("{}", text::normalize_sentences(input));
    } else {
        println!("{}", text::normalize(input));
    }
}

pub fn drill(engine: &HmongEngine, kind: DrillKind, json: bool) {
    let words = generate_drill(engine.grammar(), kind);
    if json {
        print_json(&words);
    } else {
        println!("{}", words.join(" "));
    }
}

pub fn check(engine: &HmongEngine, word: &str, json: bool) {
    let report = check_pronunciation(engine.grammar(), word);
    if json {
        print_json(&report);
        return;
    }
    println!("{}: {}", report.word, report.feedback);
    if report.valid {
        println!(
            "  onset={} nucleus={} tone={}",
            or_dash(report.onset.as_deref()),
            or_dash(report.nucleus.as_deref()),
            report.tone
        );
    }
}
