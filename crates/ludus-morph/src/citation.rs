//! Citation-form synthesizer

use ludus_domain::{
    AdjectiveClass, Conjugation, Declension, LexicalRecord, Lexeme, VerbClass, VerbKind, WordClass,
    PLACEHOLDER_STEMS,
};

use crate::irregular::{self, verbs};
use crate::paradigm::noun::is_er_noun;
use crate::stems::{compound_of, er_heads, present_stem, third_declension_heads, CompoundBase};

/// Synthesize the canonical dictionary headword of a record
///
/// An irregular-lexeme override wins over every class-based rule. The
/// result never contains a placeholder-derived fragment.
///
/// # Examples
///
/// ```
/// use ludus_domain::{LexicalRecord, PartOfSpeech};
/// use ludus_morph::citation_form;
///
/// let record = LexicalRecord::new(
///     vec!["am".into(), "am".into(), "amav".into(), "amat".into()],
///     PartOfSpeech::Verb,
///     "1 1 TRANS",
///     None,
///     "love",
/// );
/// assert_eq!(citation_form(&record), "amo, amare, amavi, amatum");
/// ```
pub fn citation_form(record: &LexicalRecord) -> String {
    if let Some(lexeme) = Lexeme::for_record(record) {
        return irregular::lookup(lexeme).citation().to_string();
    }

    let raw = match record.word_class() {
        WordClass::Noun(noun) => {
            let s = record.main_stem();
            match noun.declension {
                Declension::First => format!("{s}a, {s}ae"),
                Declension::Second if noun.is_neuter() => format!("{s}um, {s}i"),
                Declension::Second if is_er_noun(record) => {
                    let (nominative, oblique) = er_heads(record);
                    format!("{nominative}, {oblique}i")
                }
                Declension::Second => format!("{s}us, {s}i"),
                Declension::Third => {
                    let (nominative, oblique) = third_declension_heads(record);
                    format!("{nominative}, {oblique}is")
                }
                Declension::Fourth if noun.is_neuter() => format!("{s}u, {s}us"),
                Declension::Fourth => format!("{s}us, {s}us"),
                Declension::Fifth => format!("{s}es, {s}ei"),
                Declension::Unrecognized => joined_stems(record, usize::MAX),
            }
        }
        WordClass::Verb(verb) => verb_citation(record, verb),
        WordClass::Adjective(adjective) => adjective_citation(record, adjective),
        WordClass::Pronoun => joined_stems(record, 3),
        WordClass::Numeral | WordClass::Preposition | WordClass::Adverb | WordClass::Uninflected => {
            record.main_stem().to_string()
        }
    };

    strip_placeholders(&raw)
}

fn verb_citation(record: &LexicalRecord, verb: VerbClass) -> String {
    let main = record.main_stem();
    let perfect = record.stem(2);
    let participle = record.stem(3);

    if verb.kind == VerbKind::PerfectOnly {
        return match perfect {
            Some(perfect) => format!("{perfect}i, {perfect}isse"),
            None => joined_stems(record, usize::MAX),
        };
    }

    if let Some((base, p)) = compound_of(record, &verb) {
        return match base {
            CompoundBase::Sum => principal_parts([
                Some(format!("{p}sum")),
                Some(format!("{p}esse")),
                suffixed(perfect, "i"),
                suffixed(participle, "urus"),
            ]),
            CompoundBase::Eo => principal_parts([
                Some(format!("{p}eo")),
                Some(format!("{p}ire")),
                suffixed(perfect, "i"),
                suffixed(participle, "um"),
            ]),
        };
    }

    let reduced = record.stems.len() < 4;

    match verb.conjugation {
        Conjugation::First | Conjugation::Second | Conjugation::Third | Conjugation::Fourth => {
            let Some((endings, stem)) = present_stem(verb.conjugation, main) else {
                return joined_stems(record, usize::MAX);
            };

            // Missing first-conjugation parts are filled in as -av and -at
            let (perfect, participle) = if reduced && verb.conjugation == Conjugation::First {
                (
                    Some(perfect.map_or_else(|| format!("{main}av"), str::to_string)),
                    Some(participle.map_or_else(|| format!("{main}at"), str::to_string)),
                )
            } else {
                (perfect.map(str::to_string), participle.map(str::to_string))
            };
            let participle = participle.as_deref();

            match verb.kind {
                VerbKind::Deponent => principal_parts([
                    Some(format!("{stem}{}", endings.passive_present[0])),
                    Some(format!("{stem}{}", endings.passive_infinitive)),
                    suffixed(participle, "us sum"),
                    None,
                ]),
                VerbKind::SemiDeponent => principal_parts([
                    Some(format!("{stem}{}", endings.present[0])),
                    Some(format!("{stem}{}", endings.infinitive)),
                    suffixed(participle, "us sum"),
                    None,
                ]),
                VerbKind::Regular | VerbKind::PerfectOnly => principal_parts([
                    Some(format!("{stem}{}", endings.present[0])),
                    Some(format!("{stem}{}", endings.infinitive)),
                    suffixed(perfect.as_deref(), "i"),
                    suffixed(participle, "um"),
                ]),
            }
        }
        Conjugation::Esse | Conjugation::Irregular => {
            let second = match record.stem(1) {
                Some(second) => format!("{second}re"),
                None => format!("{main}ere"),
            };
            principal_parts([
                Some(format!("{main}o")),
                Some(second),
                suffixed(perfect, "i"),
                suffixed(participle, "um"),
            ])
        }
        Conjugation::Defective => format!("{main}{}", verbs::DEFECTIVE_PRESENT[0]),
        Conjugation::Unrecognized => format!("{main}o, {main}ere"),
    }
}

/// Stem plus ending, or nothing when the stem is not attested
fn suffixed(stem: Option<&str>, ending: &str) -> Option<String> {
    stem.map(|stem| format!("{stem}{ending}"))
}

fn principal_parts(parts: [Option<String>; 4]) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(", ")
}

fn adjective_citation(record: &LexicalRecord, adjective: AdjectiveClass) -> String {
    let s = record.main_stem();
    let oblique = record.stem(1).unwrap_or(s);
    let distinct = oblique != s;

    match adjective {
        AdjectiveClass::FirstSecond { variant: 2 } if distinct => {
            format!("{s}, {oblique}a, {oblique}um")
        }
        AdjectiveClass::FirstSecond { .. } => format!("{s}us, {s}a, {s}um"),
        AdjectiveClass::Third { variant: 1 } if distinct => format!("{s}, {oblique}is"),
        AdjectiveClass::Third { variant: 3 } if distinct => {
            format!("{s}, {oblique}is, {oblique}e")
        }
        AdjectiveClass::Third { .. } => format!("{s}is, {s}e"),
        AdjectiveClass::Indeclinable => s.to_string(),
        AdjectiveClass::Unrecognized => joined_stems(record, usize::MAX),
    }
}

fn joined_stems(record: &LexicalRecord, limit: usize) -> String {
    record.real_stems().take(limit).collect::<Vec<_>>().join(", ")
}

/// Remove placeholder-derived fragments from a comma-separated citation
///
/// Any fragment containing a word that begins with a placeholder is
/// dropped, as are empty fragments and trailing separators.
///
/// # Examples
///
/// ```
/// use ludus_morph::strip_placeholders;
///
/// assert_eq!(strip_placeholders("conor, conari, zzzus sum"), "conor, conari");
/// assert_eq!(strip_placeholders("aqua, aquae"), "aqua, aquae");
/// ```
pub fn strip_placeholders(citation: &str) -> String {
    citation
        .split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .filter(|fragment| {
            !fragment.split_whitespace().any(|word| {
                PLACEHOLDER_STEMS
                    .iter()
                    .any(|placeholder| word.starts_with(placeholder))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use ludus_domain::PartOfSpeech;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn first_declension_citation(stem in "[a-w]{1,12}") {
            let record = LexicalRecord::new(vec![stem.clone()], PartOfSpeech::Noun, "1 1", None, "gloss");
            prop_assume!(Lexeme::for_record(&record).is_none());
            prop_assert_eq!(citation_form(&record), format!("{stem}a, {stem}ae"));
        }

        #[test]
        fn citation_is_deterministic(stem in "[a-z]{1,12}", class in 0u8..10) {
            let code = format!("{class} 1");
            let record = LexicalRecord::new(vec![stem], PartOfSpeech::Verb, code, None, "gloss");
            prop_assert_eq!(citation_form(&record), citation_form(&record.clone()));
        }

        #[test]
        fn citation_never_contains_placeholders(
            stem in "[a-w]{1,8}",
            class in 1u8..5,
            flag in prop::sample::select(vec!["", " DEP", " SEMIDEP", " PERFDEF"]),
            perfect_missing in any::<bool>(),
            participle_missing in any::<bool>(),
        ) {
            let perfect = if perfect_missing { "zzz".to_string() } else { format!("{stem}u") };
            let participle = if participle_missing { "zzz".to_string() } else { format!("{stem}t") };
            let record = LexicalRecord::new(
                vec![stem.clone(), stem, perfect, participle],
                PartOfSpeech::Verb,
                format!("{class} 1{flag}"),
                None,
                "gloss",
            );
            prop_assume!(Lexeme::for_record(&record).is_none());

            let citation = citation_form(&record);
            prop_assert!(!citation.contains("zzz"), "{}", citation);
            for fragment in citation.split(", ") {
                prop_assert!(!fragment.is_empty(), "{}", citation);
                prop_assert!(
                    !["i", "um", "us sum", "urus", "isse"].contains(&fragment),
                    "bare ending in {}",
                    citation
                );
            }
        }
    }
}
