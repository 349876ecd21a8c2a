// File: src/corpus.rs
use regex::Regex;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[\w\-\d_]+").expect("word pattern is valid"))
}

/// Splits free text into lowercase words, keeping duplicates.
/// Language independent: `\w` matches any Unicode word character.
pub fn parse_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
