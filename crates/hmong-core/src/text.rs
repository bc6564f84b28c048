//! Whitespace tokenization and casing normalization for RPA text.
//!
//! A "syllable" here is a whitespace-delimited token; no grammar-aware
//! segmentation is attempted.

pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn syllable_split(word: &str) -> Vec<&str> {
    tokenize(word)
}

pub fn count_syllables(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First character uppercase, the rest lowercase.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalize the first token, lowercase the rest and join with single
/// spaces.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        if i == 0 {
            out.push_str(&capitalize(word));
        } else {
            out.push(' ');
            out.push_str(&word.to_lowercase());
        }
    }
    out
}

/// Like [`normalize`], but every token following one that ends a sentence
/// (`.`, `!`, `?`) is capitalized too.
pub fn normalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut sentence_start = true;
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        if sentence_start {
            out.push_str(&capitalize(word));
        } else {
            out.push_str(&word.to_lowercase());
        }
        sentence_start = word.ends_with(['.', '!', '?']);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Kuv yog neeg Hmoob"),
            vec!["Kuv", "yog", "neeg", "Hmoob"]
        );
        assert_eq!(tokenize("  kuv \t\n yog  "), vec!["kuv", "yog"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        // Compound words are not split.
        assert_eq!(syllable_split("nyobzoo"), vec!["nyobzoo"]);
    }

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables("Kuv yog neeg Hmoob"), 4);
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("kuv   yog  NEEG    hmoob"), "Kuv yog neeg hmoob");
        assert_eq!(normalize("  KUV YOG  "), "Kuv yog");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t "), "");
        assert_eq!(normalize("nyob zoo. koj"), "Nyob zoo. koj");
    }

    #[test]
    fn test_normalize_sentences() {
        assert_eq!(
            normalize_sentences("nyob zoo. KOJ nyob li cas? kuv zoo"),
            "Nyob zoo. Koj nyob li cas? Kuv zoo"
        );
        assert_eq!(normalize_sentences("zoo!   ua tsaug"), "Zoo! Ua tsaug");
        assert_eq!(normalize_sentences(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hMOOB"), "Hmoob");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("1st"), "1st");
    }
}
