//! English gloss index
//!
//! Maps English words and short phrases taken from each entry's gloss back
//! to the entry. Built in memory when a dictionary is assembled; it is
//! never written to the artifact.

use std::collections::{BTreeMap, BTreeSet};

use ludus_domain::{DictionaryEntry, EntryId};

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "among", "around", "over", "under", "beside", "beyond", "within", "without",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "must", "shall",
    "ought", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they",
    "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their", "mine",
    "yours", "ours", "theirs", "myself", "yourself", "himself", "herself", "itself",
    "ourselves", "yourselves", "themselves", "what", "which", "who", "whom", "whose",
    "where", "when", "why", "how", "all", "any", "both", "each", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "just", "now", "here", "there", "then", "also", "still", "again", "back", "down",
    "off", "out", "away", "once", "never", "always", "often", "sometimes", "usually",
    "rarely", "hardly", "almost", "quite", "rather", "really", "truly", "certainly",
    "perhaps", "maybe", "probably", "possibly", "indeed", "actually", "definitely",
    "absolutely", "completely", "entirely", "totally", "exactly", "particularly",
    "especially", "specifically", "generally", "etc", "usu", "archaic", "esp", "lit", "fig",
    "abbr", "fem", "masc", "neut", "inf", "fut", "perf", "pass", "act", "subj", "ind", "imp",
];

/// Grammar abbreviations that disqualify a phrase
const PHRASE_NOISE: &[&str] = &["pl", "sg", "usu", "esp", "lit", "fig", "abbr", "fem", "masc", "neut"];

/// Reverse index from English keyword to entry ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossIndex {
    keywords: BTreeMap<String, Vec<EntryId>>,
}

impl GlossIndex {
    /// Index the glosses of the given entries
    pub fn build<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a DictionaryEntry>,
    {
        let mut keywords: BTreeMap<String, Vec<EntryId>> = BTreeMap::new();

        for entry in entries {
            for keyword in gloss_keywords(&entry.record.gloss) {
                let ids = keywords.entry(keyword).or_default();
                if !ids.contains(&entry.id) {
                    ids.push(entry.id);
                }
            }
        }

        Self { keywords }
    }

    /// Entries whose gloss yields the word or phrase
    pub fn get(&self, word: &str) -> &[EntryId] {
        let key = normalize_phrase(word);
        self.keywords
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// English keywords for a gloss
///
/// Only the gloss up to the first `;` is used, with bracketed Latin and
/// parenthetical notes removed. Yields single words (letters and
/// apostrophes, longer than two characters, not stop words) followed by
/// two- and three-word phrases from the comma-separated senses.
pub fn gloss_keywords(gloss: &str) -> Vec<String> {
    let lowered = gloss.to_lowercase();
    let head = lowered.split(';').next().unwrap_or("");
    let cleaned = remove_enclosed(&remove_enclosed(head, '[', ']'), '(', ')');

    let mut keywords = BTreeSet::new();
    let mut ordered = Vec::new();

    let words = cleaned
        .split(|c: char| c.is_whitespace() || c == '/' || c == '-' || c == ',' || c == '.')
        .map(|word| word.trim_matches(|c: char| !c.is_ascii_alphabetic() && c != '\''))
        .filter(|word| word.chars().count() > 2)
        .filter(|word| word.chars().all(|c| c.is_ascii_lowercase() || c == '\''))
        .filter(|word| !STOP_WORDS.contains(word));

    for word in words {
        if keywords.insert(word.to_string()) {
            ordered.push(word.to_string());
        }
    }

    for sense in cleaned.split([',', '.']) {
        let phrase = normalize_phrase(sense);
        let length = phrase.split(' ').count();
        if phrase.len() <= 3 || phrase.len() >= 50 || !(2..=3).contains(&length) {
            continue;
        }
        if phrase.contains('/') || phrase.split(' ').any(|word| PHRASE_NOISE.contains(&word)) {
            continue;
        }
        if keywords.insert(phrase.clone()) {
            ordered.push(phrase);
        }
    }

    ordered
}

fn normalize_phrase(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Replace every `open ... close` span with a space
fn remove_enclosed(text: &str, open: char, close: char) -> String {
    let mut result = String::with_capacity(text.len());
    let mut depth = 0usize;

    for c in text.chars() {
        if c == open {
            depth += 1;
        } else if c == close && depth > 0 {
            depth -= 1;
            if depth == 0 {
                result.push(' ');
            }
        } else if depth == 0 {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::{LexicalRecord, PartOfSpeech};

    fn entry(id: u32, gloss: &str) -> DictionaryEntry {
        let record = LexicalRecord::new(vec!["aqu".into()], PartOfSpeech::Noun, "1 1", None, gloss);
        DictionaryEntry::new(EntryId::new(id), record, "aqua, aquae")
    }

    #[test]
    fn test_keywords_skip_stop_words() {
        let keywords = gloss_keywords("water, the sea");
        assert_eq!(keywords, vec!["water", "sea", "the sea"]);
    }

    #[test]
    fn test_keywords_use_first_sense_only() {
        let keywords = gloss_keywords("love; like; fall in love with");
        assert_eq!(keywords, vec!["love"]);
    }

    #[test]
    fn test_keywords_drop_notes() {
        assert!(gloss_keywords("go (by land) [eo, ire]").is_empty());
        assert!(gloss_keywords("carry (off) [fero]").contains(&"carry".to_string()));
        assert!(!gloss_keywords("carry (off) [fero]").contains(&"fero".to_string()));
    }

    #[test]
    fn test_keywords_include_short_phrases() {
        let keywords = gloss_keywords("be able, can");
        assert!(keywords.contains(&"able".to_string()));
        assert!(keywords.contains(&"be able".to_string()));
    }

    #[test]
    fn test_index_lookup() {
        let entries = vec![entry(0, "water"), entry(1, "rain water, water")];
        let index = GlossIndex::build(&entries);

        assert_eq!(index.get("water"), &[EntryId::new(0), EntryId::new(1)]);
        assert_eq!(index.get("Rain  Water"), &[EntryId::new(1)]);
        assert!(index.get("fire").is_empty());
    }
}
