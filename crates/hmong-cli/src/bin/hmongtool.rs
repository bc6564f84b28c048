use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hmong_cli::commands::{
    config_ops, dict_ops, grammar_ops, number_ops, phrase_ops, syllable_ops,
};
use hmong_core::dict::Lang;
use hmong_core::drill::DrillKind;
use hmong_core::grammar::Tense;
use hmong_engine::{ConfigKind, EngineConfig, HmongEngine};

#[derive(Parser)]
#[command(name = "hmongtool", about = "Hmong RPA syllable, dictionary and phrasebook tool", version)]
struct Cli {
    /// Replacement RPA onset/vowel table (TOML)
    #[arg(long, global = true)]
    rpa: Option<PathBuf>,
    /// Replacement dictionary (TOML)
    #[arg(long, global = true)]
    dict: Option<PathBuf>,
    /// Replacement phrasebook (TOML)
    #[arg(long, global = true)]
    phrasebook: Option<PathBuf>,
    /// Replacement settings (TOML)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Output as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Write a JSON trace to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze every token of a text
    Analyze {
        /// RPA text
        text: String,
    },
    /// Split a syllable into onset, nucleus and tone letter
    Decompose {
        syllable: String,
    },
    /// Show the tone marked by the final letter
    Tone {
        syllable: String,
        /// List the syllable in every tone instead
        #[arg(long)]
        all: bool,
    },
    /// Rewrite the tone letter of a syllable
    ConvertTone {
        syllable: String,
        /// Target tone letter (b j v s g d m); empty for the unmarked tone
        #[arg(default_value = "")]
        target: String,
    },
    /// Normalize casing and whitespace
    Normalize {
        text: String,
        /// Capitalize the start of every sentence
        #[arg(long)]
        sentences: bool,
    },
    /// Look up a Hmong word
    Lookup {
        word: String,
    },
    /// Find Hmong words for an English gloss
    Reverse {
        word: String,
    },
    /// Substring search over Hmong keys or English glosses
    Search {
        query: String,
        /// Language to search: hm or en
        #[arg(long, default_value = "hm")]
        lang: Lang,
        /// Maximum hits (default from settings)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List every dictionary key
    Words,
    /// Part of speech of each word
    Pos {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Classifiers for a noun
    Classifiers {
        noun: String,
    },
    /// Mark a sentence for tense
    Conjugate {
        sentence: String,
        /// past, present or future
        #[arg(long, default_value = "past")]
        tense: Tense,
    },
    /// Replace whole words in a sentence
    Substitute {
        sentence: String,
        target: String,
        replacement: String,
    },
    /// Spell a number in Hmong
    Number {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    /// Parse Hmong number words
    ParseNumber {
        words: String,
    },
    /// Convert between units (lbs/kg, miles/km, feet/meters)
    Measure {
        value: f64,
        from: String,
        to: String,
    },
    /// Greeting for a time of day
    Greeting {
        #[arg(default_value = "general")]
        time: String,
    },
    /// Question on a topic
    Question {
        #[arg(default_value = "feeling")]
        topic: String,
    },
    /// Print a dialogue unit
    Dialogue {
        #[arg(default_value = "1")]
        unit: u32,
    },
    /// Proverbs on a topic
    Proverb {
        #[arg(default_value = "wisdom")]
        topic: String,
        /// Print only the proverb at this index (wraps around)
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Explain an idiom
    Idiom {
        phrase: String,
    },
    /// Flashcards for a category
    Flashcards {
        #[arg(default_value = "food")]
        category: String,
    },
    /// List phrasebook topics and categories
    Topics,
    /// Generate a pronunciation drill
    Drill {
        /// tone, consonant or vowel
        #[arg(default_value = "tone")]
        kind: DrillKind,
    },
    /// Check the structure of a syllable
    Check {
        word: String,
    },
    /// Export or validate configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default file (rpa, dict, phrasebook, settings)
    Export { kind: ConfigKind },
    /// Validate a custom file
    Validate {
        kind: ConfigKind,
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        hmong_engine::trace_init::init_tracing(dir);
    }

    // Config commands work on files directly and need no engine.
    if let Command::Config { action } = &cli.command {
        match action {
            ConfigAction::Export { kind } => config_ops::export(*kind),
            ConfigAction::Validate { kind, file } => config_ops::validate(*kind, file),
        }
        return;
    }

    let config = EngineConfig {
        rpa: cli.rpa,
        dict: cli.dict,
        phrasebook: cli.phrasebook,
        settings: cli.settings,
    };
    let engine = HmongEngine::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let json = cli.json;

    match cli.command {
        Command::Analyze { text } => syllable_ops::analyze(&engine, &text, json),
        Command::Decompose { syllable } => syllable_ops::decompose(&engine, &syllable, json),
        Command::Tone { syllable, all } => {
            if all {
                syllable_ops::tone_table(&engine, &syllable);
            } else {
                syllable_ops::tone(&engine, &syllable, json);
            }
        }
        Command::ConvertTone { syllable, target } => {
            syllable_ops::convert_tone(&engine, &syllable, &target)
        }
        Command::Normalize { text, sentences } => syllable_ops::normalize(&text, sentences),
        Command::Lookup { word } => dict_ops::lookup(&engine, &word, json),
        Command::Reverse { word } => dict_ops::reverse(&engine, &word, json),
        Command::Search { query, lang, limit } => {
            dict_ops::search(&engine, &query, lang, limit, json)
        }
        Command::Words => dict_ops::words(&engine, json),
        Command::Pos { words } => grammar_ops::pos(&engine, &words, json),
        Command::Classifiers { noun } => grammar_ops::classifiers(&engine, &noun, json),
        Command::Conjugate { sentence, tense } => grammar_ops::conjugate_cmd(&sentence, tense),
        Command::Substitute {
            sentence,
            target,
            replacement,
        } => grammar_ops::substitute_cmd(&sentence, &target, &replacement),
        Command::Number { n } => number_ops::number(n),
        Command::ParseNumber { words } => number_ops::parse_number(&words),
        Command::Measure { value, from, to } => number_ops::measure(value, &from, &to),
        Command::Greeting { time } => phrase_ops::greeting(&engine, &time),
        Command::Question { topic } => phrase_ops::question(&engine, &topic),
        Command::Dialogue { unit } => phrase_ops::dialogue(&engine, unit, json),
        Command::Proverb { topic, pick } => phrase_ops::proverb(&engine, &topic, pick, json),
        Command::Idiom { phrase } => phrase_ops::idiom(&engine, &phrase),
        Command::Flashcards { category } => phrase_ops::flashcards(&engine, &category, json),
        Command::Topics => phrase_ops::topics(&engine),
        Command::Drill { kind } => syllable_ops::drill(&engine, kind, json),
        Command::Check { word } => syllable_ops::check(&engine, &word, json),
        Command::Config { .. } => {}
    }
}
