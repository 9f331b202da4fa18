//! Word classes - the closed set of paradigm families
//!
//! Every rule table in the morphology layer matches exhaustively on
//! [`WordClass`], so adding a class forces every table to handle it.

use crate::{Gender, ParadigmCode, PartOfSpeech};

/// Paradigm family of a headword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// Declined noun
    Noun(NounClass),

    /// Conjugated verb
    Verb(VerbClass),

    /// Declined adjective
    Adjective(AdjectiveClass),

    /// Pronoun (hand-written paradigms only)
    Pronoun,

    /// Numeral (hand-written paradigms only)
    Numeral,

    /// Preposition
    Preposition,

    /// Adverb
    Adverb,

    /// Conjunctions, interjections, packons and untagged words
    Uninflected,
}

/// Noun declension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declension {
    /// `-a, -ae`
    First,
    /// `-us, -i` / `-um, -i`
    Second,
    /// Consonant and i-stems
    Third,
    /// `-us, -us` / `-u, -us`
    Fourth,
    /// `-es, -ei`
    Fifth,
    /// Any other class number
    Unrecognized,
}

/// Noun class: declension plus gender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounClass {
    /// Declension family
    pub declension: Declension,

    /// Gender, if the lexicon gives one
    pub gender: Option<Gender>,
}

impl NounClass {
    /// Whether the noun is neuter
    pub fn is_neuter(&self) -> bool {
        self.gender == Some(Gender::Neuter)
    }
}

/// Verb conjugation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjugation {
    /// `-are`
    First,
    /// `-ere` (long e)
    Second,
    /// `-ere` (short e), including `-io` verbs
    Third,
    /// `-ire`
    Fourth,
    /// Class 5: the linking verb and its compounds
    Esse,
    /// Class 6: irregular verbs (eo, volo and their compounds)
    Irregular,
    /// Class 7: defective verbs with scattered forms
    Defective,
    /// Any other class number
    Unrecognized,
}

/// How a verb distributes active and passive forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbKind {
    /// Both voices, regular meaning
    Regular,
    /// Passive in form, active in meaning
    Deponent,
    /// Active present system, passive-form perfect system
    SemiDeponent,
    /// Only the perfect system exists, with present meaning
    PerfectOnly,
}

/// Transitivity marking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valency {
    /// No marking in the lexicon
    Unmarked,
    /// Takes a direct object
    Transitive,
    /// Takes no direct object
    Intransitive,
}

/// Verb class: conjugation plus flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbClass {
    /// Conjugation family
    pub conjugation: Conjugation,

    /// Variant number within the conjugation
    pub variant: u8,

    /// Voice distribution
    pub kind: VerbKind,

    /// Transitivity
    pub valency: Valency,

    /// Third person singular only
    pub impersonal: bool,

    /// Linking verb or compound of one
    pub copulative: bool,
}

/// Adjective class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjectiveClass {
    /// `-us, -a, -um` (variant 2: `-er, -ra, -rum`)
    FirstSecond {
        /// Variant number
        variant: u8,
    },
    /// Third declension (variant 1: one termination, 2: two, 3: three)
    Third {
        /// Variant number
        variant: u8,
    },
    /// Never inflects (`9 9`)
    Indeclinable,
    /// Any other class
    Unrecognized,
}

impl WordClass {
    /// Classify a headword from its part of speech, code, and gender
    ///
    /// # Examples
    ///
    /// ```
    /// use ludus_domain::{ParadigmCode, PartOfSpeech, WordClass, Declension};
    ///
    /// let class = WordClass::classify(PartOfSpeech::Noun, &ParadigmCode::parse("1 1"), None);
    /// match class {
    ///     WordClass::Noun(noun) => assert_eq!(noun.declension, Declension::First),
    ///     _ => panic!("expected a noun"),
    /// }
    /// ```
    pub fn classify(pos: PartOfSpeech, code: &ParadigmCode, gender: Option<Gender>) -> Self {
        match pos {
            PartOfSpeech::Noun => WordClass::Noun(NounClass {
                declension: match code.class {
                    Some(1) => Declension::First,
                    Some(2) => Declension::Second,
                    Some(3) => Declension::Third,
                    Some(4) => Declension::Fourth,
                    Some(5) => Declension::Fifth,
                    _ => Declension::Unrecognized,
                },
                gender,
            }),
            PartOfSpeech::Verb => WordClass::Verb(classify_verb(code)),
            PartOfSpeech::Adjective => WordClass::Adjective(match code.class {
                Some(1) => AdjectiveClass::FirstSecond {
                    variant: code.variant.unwrap_or(1),
                },
                Some(3) => AdjectiveClass::Third {
                    variant: code.variant.unwrap_or(2),
                },
                Some(9) => AdjectiveClass::Indeclinable,
                _ => AdjectiveClass::Unrecognized,
            }),
            PartOfSpeech::Pronoun => WordClass::Pronoun,
            PartOfSpeech::Numeral => WordClass::Numeral,
            PartOfSpeech::Preposition => WordClass::Preposition,
            PartOfSpeech::Adverb => WordClass::Adverb,
            PartOfSpeech::Conjunction
            | PartOfSpeech::Interjection
            | PartOfSpeech::Packon
            | PartOfSpeech::Other => WordClass::Uninflected,
        }
    }
}

fn classify_verb(code: &ParadigmCode) -> VerbClass {
    let flags = code.flags;

    let conjugation = match code.class {
        Some(1) => Conjugation::First,
        Some(2) => Conjugation::Second,
        Some(3) => Conjugation::Third,
        Some(4) => Conjugation::Fourth,
        Some(5) => Conjugation::Esse,
        Some(6) => Conjugation::Irregular,
        Some(7) => Conjugation::Defective,
        _ => Conjugation::Unrecognized,
    };

    // Perfect-only outranks the voice flags: memini is never deponent
    let kind = if flags.perfect_only {
        VerbKind::PerfectOnly
    } else if flags.semi_deponent {
        VerbKind::SemiDeponent
    } else if flags.deponent {
        VerbKind::Deponent
    } else {
        VerbKind::Regular
    };

    let valency = if flags.transitive {
        Valency::Transitive
    } else if flags.intransitive {
        Valency::Intransitive
    } else {
        Valency::Unmarked
    };

    VerbClass {
        conjugation,
        variant: code.variant.unwrap_or(0),
        kind,
        valency,
        impersonal: flags.impersonal,
        copulative: flags.copulative,
    }
}
