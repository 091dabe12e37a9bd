use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

static STOP_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .collect()
});

// Normalized output feeds the frequency table only; sentiment scoring runs on
// the raw text, where punctuation and casing still carry signal.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut kept: Vec<String> = Vec::new();

    for raw in lowered.split_whitespace() {
        let cut = [raw.find("http"), raw.find("www")]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(raw.len());
        let word: String = raw[..cut]
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .collect();
        if word.len() > 1 && !STOP_WORDS.contains(&word) {
            kept.push(word);
        }
    }

    kept.join(" ")
}

#[derive(Debug, Clone, Serialize)]
pub struct WordFrequency {
    pub text: String,
    pub value: u64,
}

pub fn word_frequencies(corpus: &[String], top_n: usize) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for line in corpus {
        for token in line.split_whitespace() {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    // Deterministic ranking: descending count, ascending lexical on ties.
    let mut entries: Vec<(String, u64)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(top_n);

    entries
        .into_iter()
        .map(|(text, value)| WordFrequency { text, value })
        .collect()
}
