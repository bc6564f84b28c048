//! Hmong number words and unit conversions.
//!
//! Spells integers with `kaum` (10), `caug` (tens), `puas` (100),
//! `txhiab` (1000) and `lab` (10^6), and parses the same forms back.

use std::fmt;

const DIGITS: [&str; 11] = [
    "xoom", "ib", "ob", "peb", "plaub", "tsib", "rau", "xya", "yim", "cuaj", "kaum",
];

/// Largest value spelled out in words; larger values fall back to digits.
pub const MAX_SPELLED: i64 = 999_999_999;

/// Spell `n` in Hmong. Values outside `0..=MAX_SPELLED` are returned as
/// decimal digits.
pub fn num_to_hmong(n: i64) -> String {
    if !(0..=MAX_SPELLED).contains(&n) {
        return n.to_string();
    }
    let mut n = n as u64;
    if n <= 10 {
        return DIGITS[n as usize].to_string();
    }

    let mut parts = Vec::new();
    for (scale, word) in [(1_000_000u64, "lab"), (1_000, "txhiab")] {
        if n >= scale {
            parts.push(format!("{} {word}", below_1000(n / scale)));
            n %= scale;
        }
    }
    if n > 0 {
        parts.push(below_1000(n));
    }
    parts.join(" ")
}

/// Spell 1..=999.
fn below_1000(mut n: u64) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if n >= 100 {
        parts.push(DIGITS[(n / 100) as usize]);
        parts.push("puas");
        n %= 100;
    }
    if n >= 20 {
        parts.push(DIGITS[(n / 10) as usize]);
        parts.push("caug");
        n %= 10;
        if n > 0 {
            parts.push(DIGITS[n as usize]);
        }
    } else if n > 10 {
        parts.push("kaum");
        parts.push(DIGITS[(n - 10) as usize]);
    } else if n > 0 {
        parts.push(DIGITS[n as usize]);
    }
    parts.join(" ")
}

fn digit_value(word: &str) -> Option<u64> {
    DIGITS[..10].iter().position(|d| *d == word).map(|i| i as u64)
}

fn nonzero_digit(word: &str) -> Option<u64> {
    digit_value(word).filter(|&d| d > 0)
}

fn scale_value(word: &str) -> Option<u64> {
    match word {
        "lab" => Some(1_000_000),
        "txhiab" => Some(1_000),
        _ => None,
    }
}

/// Parse Hmong number words back into a value.
///
/// Accepts everything [`num_to_hmong`] produces, in any case and with any
/// whitespace between words. Returns `None` for anything else.
pub fn hmong_to_num(words: &str) -> Option<u64> {
    let lowered = words.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    if tokens.as_slice() == ["xoom"] {
        return Some(0);
    }
    if tokens.is_empty() {
        return None;
    }

    let mut rest = tokens.as_slice();
    let mut total = 0;
    let mut last_scale: Option<u64> = None;
    while !rest.is_empty() {
        let group = parse_group(&mut rest)?;
        let scale = match rest.first().and_then(|w| scale_value(w)) {
            Some(scale) => {
                rest = &rest[1..];
                scale
            }
            None => 1,
        };
        // Scales must strictly decrease: "ib txhiab ib lab" is not a number.
        if last_scale.is_some_and(|last| scale >= last) {
            return None;
        }
        last_scale = Some(scale);
        total += group * scale;
    }
    Some(total)
}

/// Consume a 1..=999 group from the front of `rest`.
fn parse_group(rest: &mut &[&str]) -> Option<u64> {
    let mut value = 0;

    if let [d, unit, tail @ ..] = *rest {
        if matches!(*unit, "puas" | "pua") {
            value += nonzero_digit(d)? * 100;
            *rest = tail;
        }
    }

    match *rest {
        ["kaum", tail @ ..] => {
            value += 10;
            *rest = tail;
            if let Some(d) = rest.first().and_then(|w| nonzero_digit(w)) {
                value += d;
                *rest = &rest[1..];
            }
        }
        [d, "caug", tail @ ..] => {
            value += nonzero_digit(d).filter(|&d| d >= 2)? * 10;
            *rest = tail;
            if let Some(d) = rest.first().and_then(|w| nonzero_digit(w)) {
                value += d;
                *rest = &rest[1..];
            }
        }
        [d, tail @ ..] => {
            if let Some(d) = nonzero_digit(d) {
                value += d;
                *rest = tail;
            }
        }
        [] => {}
    }

    (value > 0).then_some(value)
}

/// Known unit pairs and their multiplication factors.
const CONVERSIONS: [(&str, &str, f64); 6] = [
    ("lbs", "kg", 0.453592),
    ("kg", "lbs", 2.20462),
    ("miles", "km", 1.60934),
    ("km", "miles", 0.621371),
    ("feet", "meters", 0.3048),
    ("meters", "feet", 3.28084),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub from_unit: String,
    pub converted: f64,
    pub to_unit: String,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {:.2} {}",
            self.value, self.from_unit, self.converted, self.to_unit
        )
    }
}

/// Convert `value` between two known units (case-insensitive).
pub fn convert_measure(value: f64, from_unit: &str, to_unit: &str) -> Option<Measurement> {
    let (_, _, factor) = CONVERSIONS.iter().find(|(from, to, _)| {
        from.eq_ignore_ascii_case(from_unit) && to.eq_ignore_ascii_case(to_unit)
    })?;
    Some(Measurement {
        value,
        from_unit: from_unit.to_string(),
        converted: value * factor,
        to_unit: to_unit.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(num_to_hmong(0), "xoom");
        assert_eq!(num_to_hmong(1), "ib");
        assert_eq!(num_to_hmong(5), "tsib");
        assert_eq!(num_to_hmong(10), "kaum");
    }

    #[test]
    fn test_teens_and_tens() {
        assert_eq!(num_to_hmong(11), "kaum ib");
        assert_eq!(num_to_hmong(19), "kaum cuaj");
        assert_eq!(num_to_hmong(20), "ob caug");
        assert_eq!(num_to_hmong(35), "peb caug tsib");
        assert_eq!(num_to_hmong(99), "cuaj caug cuaj");
    }

    #[test]
    fn test_hundreds_and_up() {
        assert_eq!(num_to_hmong(100), "ib puas");
        assert_eq!(num_to_hmong(110), "ib puas kaum");
        assert_eq!(num_to_hmong(115), "ib puas kaum tsib");
        assert_eq!(num_to_hmong(305), "peb puas tsib");
        assert_eq!(num_to_hmong(1000), "ib txhiab");
        assert_eq!(num_to_hmong(2024), "ob txhiab ob caug plaub");
        assert_eq!(num_to_hmong(10_000), "kaum txhiab");
        assert_eq!(num_to_hmong(1_000_005), "ib lab tsib");
        assert_eq!(
            num_to_hmong(999_999_999),
            "cuaj puas cuaj caug cuaj lab cuaj puas cuaj caug cuaj txhiab cuaj puas cuaj caug cuaj"
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(num_to_hmong(-1), "-1");
        assert_eq!(num_to_hmong(1_000_000_000), "1000000000");
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(hmong_to_num("xoom"), Some(0));
        assert_eq!(hmong_to_num("ib"), Some(1));
        assert_eq!(hmong_to_num("kaum"), Some(10));
        assert_eq!(hmong_to_num("kaum ib"), Some(11));
        assert_eq!(hmong_to_num("  Peb  Caug  Tsib "), Some(35));
        assert_eq!(hmong_to_num("ib pua"), Some(100));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(hmong_to_num(""), None);
        assert_eq!(hmong_to_num("kuv"), None);
        assert_eq!(hmong_to_num("puas"), None);
        assert_eq!(hmong_to_num("ib caug"), None);
        assert_eq!(hmong_to_num("xoom ib"), None);
        assert_eq!(hmong_to_num("ib ob"), None);
        assert_eq!(hmong_to_num("ib txhiab ib lab"), None);
        assert_eq!(hmong_to_num("ib txhiab ob txhiab"), None);
        assert_eq!(hmong_to_num("lab"), None);
    }

    #[test]
    fn test_parse_inverts_spelling() {
        for n in (0..2000).chain([
            10_000,
            10_001_000,
            20_005_000,
            123_456_789,
            999_999_999,
        ]) {
            let words = num_to_hmong(n);
            assert_eq!(hmong_to_num(&words), Some(n as u64), "{n}: {words}");
        }
    }

    #[test]
    fn test_convert_measure() {
        let m = convert_measure(10.0, "lbs", "kg").unwrap();
        assert_eq!(m.to_string(), "10 lbs = 4.54 kg");
        let m = convert_measure(5.0, "KM", "Miles").unwrap();
        assert_eq!(m.to_string(), "5 KM = 3.11 Miles");
        assert!((convert_measure(1.0, "feet", "meters").unwrap().converted - 0.3048).abs() < 1e-9);
        assert!(convert_measure(1.0, "kg", "km").is_none());
    }
}
