use hmong_core::numeric::{convert_measure, hmong_to_num, num_to_hmong};

use super::CliError;

pub fn number(n: i64) {
    println!("{}", num_to_hmong(n));
}

pub fn parse_number(words: &str) {
    let n = die!(
        hmong_to_num(words).ok_or_else(|| CliError::NotANumber(words.to_string())),
        "Error: {}"
    );
    println!("{n}");
}

pub fn measure(value: f64, from: &str, to: &str) {
    let m = die!(
        convert_measure(value, from, to).ok_or_else(|| CliError::UnknownUnits {
            from: from.to_string(),
            to: to.to_string(),
        }),
        "Error: {}"
    );
    println!("{m}");
}
