//! Part-of-speech and gender tags

use std::fmt;

/// Part of speech of a headword, as tagged in the source lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    /// Noun (`N`)
    Noun,

    /// Verb (`V`)
    Verb,

    /// Adjective (`ADJ`)
    Adjective,

    /// Adverb (`ADV`)
    Adverb,

    /// Preposition (`PREP`)
    Preposition,

    /// Conjunction (`CONJ`)
    Conjunction,

    /// Interjection (`INTERJ`)
    Interjection,

    /// Pronoun (`PRON`)
    Pronoun,

    /// Numeral (`NUM`)
    Numeral,

    /// Pronoun-plus-particle pseudo class (`PACK`)
    Packon,

    /// Any tag the lexicon uses that is not listed above
    Other,
}

impl PartOfSpeech {
    /// Every part of speech, in display order
    pub const ALL: [PartOfSpeech; 11] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Interjection,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Numeral,
        PartOfSpeech::Packon,
        PartOfSpeech::Other,
    ];

    /// Parse a lexicon tag (`N`, `V`, `ADJ`, ...)
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "N" => Some(PartOfSpeech::Noun),
            "V" => Some(PartOfSpeech::Verb),
            "ADJ" => Some(PartOfSpeech::Adjective),
            "ADV" => Some(PartOfSpeech::Adverb),
            "PREP" => Some(PartOfSpeech::Preposition),
            "CONJ" => Some(PartOfSpeech::Conjunction),
            "INTERJ" => Some(PartOfSpeech::Interjection),
            "PRON" => Some(PartOfSpeech::Pronoun),
            "NUM" => Some(PartOfSpeech::Numeral),
            "PACK" => Some(PartOfSpeech::Packon),
            "X" => Some(PartOfSpeech::Other),
            _ => None,
        }
    }

    /// The lexicon tag for this part of speech
    pub fn tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "N",
            PartOfSpeech::Verb => "V",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Preposition => "PREP",
            PartOfSpeech::Conjunction => "CONJ",
            PartOfSpeech::Interjection => "INTERJ",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::Numeral => "NUM",
            PartOfSpeech::Packon => "PACK",
            PartOfSpeech::Other => "X",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Packon => "packon",
            PartOfSpeech::Other => "other",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|pos| pos.display_name().eq_ignore_ascii_case(s.trim()))
            })
            .ok_or_else(|| format!("Invalid part of speech: {}", s))
    }
}

/// Grammatical gender of a noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Masculine (`M`)
    Masculine,

    /// Feminine (`F`)
    Feminine,

    /// Neuter (`N`)
    Neuter,

    /// Common, masculine or feminine (`C`)
    Common,

    /// Unknown or unspecified (`X`)
    Unknown,
}

impl Gender {
    /// Parse a lexicon gender tag; empty input has no gender
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "M" => Some(Gender::Masculine),
            "F" => Some(Gender::Feminine),
            "N" => Some(Gender::Neuter),
            "C" => Some(Gender::Common),
            "X" => Some(Gender::Unknown),
            _ => None,
        }
    }

    /// The lexicon tag for this gender
    pub fn tag(&self) -> &'static str {
        match self {
            Gender::Masculine => "M",
            Gender::Feminine => "F",
            Gender::Neuter => "N",
            Gender::Common => "C",
            Gender::Unknown => "X",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
            Gender::Common => "common",
            Gender::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
