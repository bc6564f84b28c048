macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod dict_ops;
pub mod grammar_ops;
pub mod number_ops;
pub mod phrase_ops;
pub mod syllable_ops;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not a Hmong number: {0:?}")]
    NotANumber(String),
    #[error("no conversion from {from} to {to}")]
    UnknownUnits { from: String, to: String },
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) {
    let s = die!(serde_json::to_string_pretty(value), "Error: {}");
    println!("{s}");
}

/// Left-align `s` to `width` terminal columns.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Print (left, right) pairs as two aligned columns.
pub(crate) fn print_columns<'a>(rows: impl IntoIterator<Item = (&'a str, &'a str)>) {
    let rows: Vec<(&str, &str)> = rows.into_iter().collect();
    let width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    for (left, right) in rows {
        println!("{}  {right}", pad(left, width));
    }
}
