//! Lexical records - the raw input unit of the build
//!
//! A record is one stem set plus a grammatical code per headword, exactly
//! as the lexicon provides it. Records never persist; accepted records
//! become [`DictionaryEntry`](crate::DictionaryEntry) values.

use crate::{Gender, ParadigmCode, PartOfSpeech, WordClass};

/// Sentinel stems marking a principal part that does not exist
pub const PLACEHOLDER_STEMS: &[&str] = &["zzz", "xxx", "ZZZ", "XXX"];

/// Whether a stem is a placeholder sentinel
pub fn is_placeholder(stem: &str) -> bool {
    PLACEHOLDER_STEMS.contains(&stem)
}

/// A single headword as read from the lexicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalRecord {
    /// Principal stems in lexicon order; placeholders mark missing parts
    pub stems: Vec<String>,

    /// Part of speech
    pub part_of_speech: PartOfSpeech,

    /// Paradigm-class code, e.g. `"3 1 DEP"`
    pub code: String,

    /// Gender (nouns only)
    pub gender: Option<Gender>,

    /// Free-text English gloss
    pub gloss: String,
}

impl LexicalRecord {
    /// Create a record from its parts
    pub fn new(
        stems: Vec<String>,
        part_of_speech: PartOfSpeech,
        code: impl Into<String>,
        gender: Option<Gender>,
        gloss: impl Into<String>,
    ) -> Self {
        Self {
            stems,
            part_of_speech,
            code: code.into(),
            gender,
            gloss: gloss.into(),
        }
    }

    /// The main stem: the first stem that is not a placeholder
    ///
    /// For ordinary records this is the first stem. Perfect-only verbs
    /// carry placeholders for their present stems, so their main stem is
    /// the perfect stem. Returns an empty string if every stem is a
    /// placeholder.
    pub fn main_stem(&self) -> &str {
        self.real_stems().next().unwrap_or("")
    }

    /// The stem at `index`, if present and not a placeholder
    pub fn stem(&self, index: usize) -> Option<&str> {
        self.stems
            .get(index)
            .map(String::as_str)
            .filter(|stem| !stem.is_empty() && !is_placeholder(stem))
    }

    /// Stems that are not placeholders, in order
    pub fn real_stems(&self) -> impl Iterator<Item = &str> {
        self.stems
            .iter()
            .map(String::as_str)
            .filter(|stem| !stem.is_empty() && !is_placeholder(stem))
    }

    /// Number of placeholder stems
    pub fn placeholder_count(&self) -> usize {
        self.stems.iter().filter(|stem| is_placeholder(stem)).count()
    }

    /// Parse the paradigm-class code
    pub fn paradigm_code(&self) -> ParadigmCode {
        ParadigmCode::parse(&self.code)
    }

    /// Classify the record into its paradigm family
    pub fn word_class(&self) -> WordClass {
        WordClass::classify(self.part_of_speech, &self.paradigm_code(), self.gender)
    }

    /// Content key used for duplicate detection
    ///
    /// Real stems joined by `|`, then the part-of-speech tag, then the
    /// gloss. Placeholders are left out, so two rows of one lexeme that
    /// differ only in which principal parts are attested share a key.
    pub fn dedup_key(&self) -> String {
        let stems: Vec<&str> = self.real_stems().collect();
        format!(
            "{}::{}::{}",
            stems.join("|"),
            self.part_of_speech.tag(),
            self.gloss
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_placeholder_count_plus_real_stems_is_total(
            stems in prop::collection::vec(prop_oneof!["[a-z]{1,8}", Just("zzz".to_string())], 1..6)
        ) {
            let record = LexicalRecord::new(stems.clone(), PartOfSpeech::Noun, "1 1", None, "x");
            prop_assert_eq!(record.placeholder_count() + record.real_stems().count(), stems.len());
        }

        #[test]
        fn prop_main_stem_is_never_placeholder(
            stems in prop::collection::vec(prop_oneof!["[a-z]{1,8}", Just("zzz".to_string())], 1..6)
        ) {
            let record = LexicalRecord::new(stems, PartOfSpeech::Verb, "1 1", None, "x");
            prop_assert!(!is_placeholder(record.main_stem()));
        }
    }
}
