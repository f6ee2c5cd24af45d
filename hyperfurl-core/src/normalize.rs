//! Seed normalization and lexical entity extraction.
//!
//! This is a v1 heuristic: lowercase, strip punctuation (commas survive),
//! collapse whitespace, then keep content words by length and stop-word
//! filtering. No stemming, no deduplication, no semantic parsing.

use serde::{Deserialize, Serialize};

/// Words too common to count as content. Checked after lowercasing.
const STOP_WORDS: [&str; 12] = [
    "the", "and", "with", "from", "that", "this", "will", "can", "are", "was", "had", "has",
];

/// Entities are capped at the first five survivors, in original order.
const MAX_ENTITIES: usize = 5;

/// A seed after cleaning, with its extracted content words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedInput {
    pub clean: String,
    pub entities: Vec<String>,
    pub style_hint: Option<String>,
}

/// Clean a seed phrase and extract up to five content-word entities.
///
/// The cleaned form is lowercased, stripped of every character that is not
/// alphanumeric, underscore, space, or comma, and whitespace-collapsed.
/// Entities are words longer than three characters that are not stop words,
/// taken in original order. Duplicates are kept.
pub fn normalize_input(seed: &str, style_hint: Option<&str>) -> NormalizedInput {
    let lowered = seed.trim().to_lowercase();
    let mut clean = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if c.is_alphanumeric() || c == '_' || c == ',' {
            clean.push(c);
        } else if c.is_whitespace() {
            clean.push(' ');
        }
    }
    let clean = clean.split_whitespace().collect::<Vec<_>>().join(" ");

    let entities: Vec<String> = clean
        .split(' ')
        .filter(|word| word.len() > 3 && !STOP_WORDS.contains(word))
        .take(MAX_ENTITIES)
        .map(str::to_string)
        .collect();

    NormalizedInput {
        clean,
        entities,
        style_hint: style_hint.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_punctuation_and_whitespace() {
        let normalized = normalize_input("A Cat!! Sitting   on the Roof", None);
        assert_eq!(normalized.clean, "a cat sitting on the roof");
    }

    #[test]
    fn keeps_commas() {
        let normalized = normalize_input("red, green, and blue", None);
        assert_eq!(normalized.clean, "red, green, and blue");
    }

    #[test]
    fn extracts_content_words_in_order() {
        let normalized = normalize_input("A Cat!! Sitting   on the Roof", None);
        assert_eq!(normalized.entities, vec!["sitting", "roof"]);
    }

    #[test]
    fn filters_stop_words_and_short_words() {
        let normalized = normalize_input("the cat and the dog with a ball", None);
        assert!(!normalized.entities.contains(&"the".to_string()));
        assert!(!normalized.entities.contains(&"and".to_string()));
        assert!(!normalized.entities.contains(&"with".to_string()));
        assert!(normalized.entities.contains(&"ball".to_string()));
    }

    #[test]
    fn caps_entities_at_five() {
        let normalized = normalize_input(
            "crimson dragons soaring above ancient mountains under golden evening skies",
            None,
        );
        assert_eq!(normalized.entities.len(), 5);
        assert_eq!(
            normalized.entities,
            vec!["crimson", "dragons", "soaring", "above", "ancient"]
        );
    }

    #[test]
    fn keeps_duplicates() {
        let normalized = normalize_input("mirror facing mirror", None);
        assert_eq!(normalized.entities, vec!["mirror", "facing", "mirror"]);
    }

    #[test]
    fn empty_seed_yields_empty_entities() {
        let normalized = normalize_input("", None);
        assert_eq!(normalized.clean, "");
        assert!(normalized.entities.is_empty());
    }

    #[test]
    fn passes_style_hint_through() {
        let normalized = normalize_input("a cat", Some("cyberpunk"));
        assert_eq!(normalized.style_hint.as_deref(), Some("cyberpunk"));
    }
}
