//! Irregular lexemes
//!
//! A handful of headwords do not follow any regular paradigm. Each one is
//! interned as a [`Lexeme`] and keyed by part of speech plus literal main
//! stem, with a guard on the record's class where a regular homograph
//! shares that stem. Supporting another irregular word is a table row,
//! not a new branch in the rule code.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{LexicalRecord, PartOfSpeech};

/// Interned identifier of an irregular headword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexeme {
    /// sum, esse, fui: to be
    Sum,
    /// possum, posse, potui: to be able
    Possum,
    /// volo, velle, volui: to wish
    Volo,
    /// nolo, nolle, nolui: to be unwilling
    Nolo,
    /// malo, malle, malui: to prefer
    Malo,
    /// eo, ire, ii: to go
    Eo,
    /// fero, ferre, tuli, latum: to carry
    Fero,
    /// edo, esse, edi, esum: to eat
    Edo,
    /// fio, fieri, factus sum: to become
    Fio,
    /// inquam: to say
    Inquam,
    /// aio: to say yes
    Aio,
    /// quaeso: to ask
    Quaeso,
    /// memini, meminisse: to remember
    Memini,
    /// odi, odisse: to hate
    Odi,
    /// ego, mei: I
    Ego,
    /// tu, tui: you
    Tu,
    /// hic, haec, hoc: this
    Hic,
    /// ille, illa, illud: that
    Ille,
    /// is, ea, id: he, she, it
    Is,
    /// qui, quae, quod: who, which
    Qui,
    /// duo, duae, duo: two
    Duo,
    /// tres, tria: three
    Tres,
    /// malus, peior, pessimus: bad
    Malus,
    /// bonus, melior, optimus: good
    Bonus,
    /// magnus, maior, maximus: great
    Magnus,
    /// parvus, minor, minimus: small
    Parvus,
    /// multus, plus, plurimus: much
    Multus,
    /// satis: enough (adjective and adverb)
    Satis,
    /// a, ab: from
    Ab,
}

/// Condition a record must meet, beyond its main stem, to take an override
///
/// Regular homographs share a main stem with an irregular headword
/// (`volo` "fly", `suo` "sew", `edo` "give out"), so most verb rows also
/// require the class or flag the irregular word is listed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guard {
    /// Main stem alone decides
    Any,
    /// `TO_BEING` flag
    Copulative,
    /// `PERFDEF` flag
    PerfectOnly,
    /// Primary class number
    Class(u8),
    /// Primary class and variant
    ClassVariant(u8, u8),
    /// Primary class plus one of the listed participle stems
    ClassParticiple(u8, &'static [&'static str]),
}

impl Guard {
    fn admits(&self, record: &LexicalRecord) -> bool {
        let code = record.paradigm_code();
        match *self {
            Guard::Any => true,
            Guard::Copulative => code.flags.copulative,
            Guard::PerfectOnly => code.flags.perfect_only,
            Guard::Class(class) => code.class == Some(class),
            Guard::ClassVariant(class, variant) => {
                code.class == Some(class) && code.variant == Some(variant)
            }
            Guard::ClassParticiple(class, participles) => {
                code.class == Some(class)
                    && record
                        .stem(3)
                        .is_some_and(|participle| participles.contains(&participle))
            }
        }
    }
}

/// Rows of the override table: part of speech, literal main stem, guard, lexeme
const LEXEME_STEMS: &[(PartOfSpeech, &str, Guard, Lexeme)] = &[
    (PartOfSpeech::Verb, "su", Guard::Copulative, Lexeme::Sum),
    (PartOfSpeech::Verb, "poss", Guard::Copulative, Lexeme::Possum),
    (PartOfSpeech::Verb, "vol", Guard::ClassVariant(6, 2), Lexeme::Volo),
    (PartOfSpeech::Verb, "nol", Guard::ClassVariant(6, 2), Lexeme::Nolo),
    (PartOfSpeech::Verb, "mal", Guard::ClassVariant(6, 2), Lexeme::Malo),
    (PartOfSpeech::Verb, "e", Guard::Class(6), Lexeme::Eo),
    (PartOfSpeech::Verb, "fer", Guard::ClassVariant(3, 2), Lexeme::Fero),
    (PartOfSpeech::Verb, "ed", Guard::ClassParticiple(3, &["es", "ess"]), Lexeme::Edo),
    (PartOfSpeech::Verb, "fi", Guard::Class(3), Lexeme::Fio),
    (PartOfSpeech::Verb, "inqu", Guard::Class(7), Lexeme::Inquam),
    (PartOfSpeech::Verb, "ai", Guard::Class(7), Lexeme::Aio),
    (PartOfSpeech::Verb, "quaes", Guard::Any, Lexeme::Quaeso),
    (PartOfSpeech::Verb, "memin", Guard::PerfectOnly, Lexeme::Memini),
    (PartOfSpeech::Verb, "od", Guard::PerfectOnly, Lexeme::Odi),
    (PartOfSpeech::Pronoun, "ego", Guard::Any, Lexeme::Ego),
    (PartOfSpeech::Pronoun, "tu", Guard::Any, Lexeme::Tu),
    (PartOfSpeech::Pronoun, "hic", Guard::Any, Lexeme::Hic),
    (PartOfSpeech::Pronoun, "ille", Guard::Any, Lexeme::Ille),
    (PartOfSpeech::Pronoun, "is", Guard::Any, Lexeme::Is),
    (PartOfSpeech::Pronoun, "qui", Guard::Any, Lexeme::Qui),
    (PartOfSpeech::Numeral, "du", Guard::Any, Lexeme::Duo),
    (PartOfSpeech::Numeral, "tre", Guard::Any, Lexeme::Tres),
    (PartOfSpeech::Adjective, "mal", Guard::Any, Lexeme::Malus),
    (PartOfSpeech::Adjective, "bon", Guard::Any, Lexeme::Bonus),
    (PartOfSpeech::Adjective, "magn", Guard::Any, Lexeme::Magnus),
    (PartOfSpeech::Adjective, "parv", Guard::Any, Lexeme::Parvus),
    (PartOfSpeech::Adjective, "mult", Guard::Any, Lexeme::Multus),
    (PartOfSpeech::Adjective, "sat", Guard::Any, Lexeme::Satis),
    (PartOfSpeech::Adverb, "sat", Guard::Any, Lexeme::Satis),
    (PartOfSpeech::Preposition, "a", Guard::Any, Lexeme::Ab),
    (PartOfSpeech::Preposition, "ab", Guard::Any, Lexeme::Ab),
];

static LEXEMES: LazyLock<HashMap<(PartOfSpeech, &'static str), (Guard, Lexeme)>> =
    LazyLock::new(|| {
        LEXEME_STEMS
            .iter()
            .map(|&(pos, stem, guard, lexeme)| ((pos, stem), (guard, lexeme)))
            .collect()
    });

impl Lexeme {
    /// Look up the irregular lexeme for a part of speech and main stem
    ///
    /// Only the stem is consulted; [`for_record`](Self::for_record) also
    /// checks the record's class.
    ///
    /// # Examples
    ///
    /// ```
    /// use ludus_domain::{Lexeme, PartOfSpeech};
    ///
    /// assert_eq!(Lexeme::lookup(PartOfSpeech::Verb, "su"), Some(Lexeme::Sum));
    /// assert_eq!(Lexeme::lookup(PartOfSpeech::Noun, "su"), None);
    /// ```
    pub fn lookup(pos: PartOfSpeech, main_stem: &str) -> Option<Self> {
        LEXEMES.get(&(pos, main_stem)).map(|&(_, lexeme)| lexeme)
    }

    /// Irregular lexeme of a record
    ///
    /// Matches on the main stem, then requires the class or flag the
    /// irregular word is listed with, so regular homographs fall through.
    pub fn for_record(record: &LexicalRecord) -> Option<Self> {
        LEXEMES
            .get(&(record.part_of_speech, record.main_stem()))
            .filter(|(guard, _)| guard.admits(record))
            .map(|&(_, lexeme)| lexeme)
    }

    /// Dictionary headword of the lexeme
    pub fn lemma(&self) -> &'static str {
        match self {
            Lexeme::Sum => "sum",
            Lexeme::Possum => "possum",
            Lexeme::Volo => "volo",
            Lexeme::Nolo => "nolo",
            Lexeme::Malo => "malo",
            Lexeme::Eo => "eo",
            Lexeme::Fero => "fero",
            Lexeme::Edo => "edo",
            Lexeme::Fio => "fio",
            Lexeme::Inquam => "inquam",
            Lexeme::Aio => "aio",
            Lexeme::Quaeso => "quaeso",
            Lexeme::Memini => "memini",
            Lexeme::Odi => "odi",
            Lexeme::Ego => "ego",
            Lexeme::Tu => "tu",
            Lexeme::Hic => "hic",
            Lexeme::Ille => "ille",
            Lexeme::Is => "is",
            Lexeme::Qui => "qui",
            Lexeme::Duo => "duo",
            Lexeme::Tres => "tres",
            Lexeme::Malus => "malus",
            Lexeme::Bonus => "bonus",
            Lexeme::Magnus => "magnus",
            Lexeme::Parvus => "parvus",
            Lexeme::Multus => "multus",
            Lexeme::Satis => "satis",
            Lexeme::Ab => "ab",
        }
    }
}
