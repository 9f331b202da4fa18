//! Stem selection
//!
//! Which stem an ending attaches to is decided here and nowhere else, so
//! citation forms, search forms and paradigms cannot disagree.

use ludus_domain::{Conjugation, LexicalRecord, VerbClass};

use crate::endings::{
    PresentEndings, FIRST_CONJUGATION, FOURTH_CONJUGATION, SECOND_CONJUGATION,
    THIRD_CONJUGATION, THIRD_IO_CONJUGATION,
};

/// Long and short present stems of a third-conjugation verb
///
/// `long` is the main stem as listed. `short` drops a final `i`, so for
/// `-io` verbs (`capi`, `pati`) the two differ and the `-io` endings attach
/// to `short`. The lexicon's second stem is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThirdConjugationStems<'a> {
    /// The main stem as listed, e.g. `pati`
    pub long: &'a str,
    /// The main stem without a final `i`, e.g. `pat`
    pub short: &'a str,
}

impl ThirdConjugationStems<'_> {
    /// Whether this is an `-io` verb
    pub fn is_io(&self) -> bool {
        self.long != self.short
    }
}

/// Split a third-conjugation main stem into its long and short forms
///
/// # Examples
///
/// ```
/// use ludus_morph::third_conjugation_stems;
///
/// let stems = third_conjugation_stems("pati");
/// assert_eq!(stems.short, "pat");
/// assert!(stems.is_io());
/// assert!(!third_conjugation_stems("duc").is_io());
/// ```
pub fn third_conjugation_stems(main_stem: &str) -> ThirdConjugationStems<'_> {
    let short = match main_stem.strip_suffix('i') {
        Some(short) if !short.is_empty() => short,
        _ => main_stem,
    };

    ThirdConjugationStems {
        long: main_stem,
        short,
    }
}

/// Ending table and the stem it attaches to, for conjugations 1-4
pub(crate) fn present_stem(
    conjugation: Conjugation,
    main_stem: &str,
) -> Option<(&'static PresentEndings, &str)> {
    match conjugation {
        Conjugation::First => Some((&FIRST_CONJUGATION, main_stem)),
        Conjugation::Second => Some((&SECOND_CONJUGATION, main_stem)),
        Conjugation::Third => {
            let stems = third_conjugation_stems(main_stem);
            if stems.is_io() {
                Some((&THIRD_IO_CONJUGATION, stems.short))
            } else {
                Some((&THIRD_CONJUGATION, stems.long))
            }
        }
        Conjugation::Fourth => Some((&FOURTH_CONJUGATION, main_stem)),
        Conjugation::Esse
        | Conjugation::Irregular
        | Conjugation::Defective
        | Conjugation::Unrecognized => None,
    }
}

/// Nominative singular and oblique stem of a third-declension noun
///
/// A distinct second stem means the first is the nominative (`rex`, `reg`).
/// Otherwise the nominative is guessed from the stem's final letter.
pub(crate) fn third_declension_heads(record: &LexicalRecord) -> (String, String) {
    let main = record.main_stem();

    if let Some(oblique) = record.stem(1).filter(|oblique| *oblique != main) {
        return (main.to_string(), oblique.to_string());
    }

    let nominative = if let Some(head) = main.strip_suffix('n') {
        format!("{}x", head)
    } else if main.ends_with('r') {
        main.to_string()
    } else {
        format!("{}s", main)
    };

    (nominative, main.to_string())
}

/// Nominative singular and oblique stem of a second-declension `-er` noun
/// or first/second-declension `-er` adjective (`ager`, `agr`; `pulcher`, `pulchr`)
pub(crate) fn er_heads(record: &LexicalRecord) -> (String, String) {
    let main = record.main_stem();
    let oblique = record.stem(1).unwrap_or(main);
    (main.to_string(), oblique.to_string())
}

/// Irregular verb a compound is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompoundBase {
    /// `absum`, `adsum`: main stem ends in `su`
    Sum,
    /// `abeo`, `redeo`: main stem ends in `e`, second stem is prefix + `i`
    Eo,
}

/// Detect a compound of *sum* or *eo* among class 5 and 6 verbs
///
/// Returns the base and the prefix in front of it.
pub(crate) fn compound_of<'a>(
    record: &'a LexicalRecord,
    verb: &VerbClass,
) -> Option<(CompoundBase, &'a str)> {
    let main = record.main_stem();
    match verb.conjugation {
        Conjugation::Esse if verb.copulative => main
            .strip_suffix("su")
            .map(|prefix| (CompoundBase::Sum, prefix)),
        Conjugation::Irregular => {
            let prefix = main.strip_suffix('e')?;
            let second = record.stem(1)?;
            (second.strip_prefix(prefix) == Some("i")).then_some((CompoundBase::Eo, prefix))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::{PartOfSpeech, WordClass};

    fn noun(stems: &[&str]) -> LexicalRecord {
        LexicalRecord::new(
            stems.iter().map(|s| s.to_string()).collect(),
            PartOfSpeech::Noun,
            "3 1",
            None,
            "x",
        )
    }

    #[test]
    fn test_third_conjugation_stems() {
        let pati = third_conjugation_stems("pati");
        assert_eq!(pati.long, "pati");
        assert_eq!(pati.short, "pat");

        let i = third_conjugation_stems("i");
        assert_eq!(i.short, "i");
        assert!(!i.is_io());
    }

    #[test]
    fn test_present_stem_selects_io_table() {
        let (endings, stem) = present_stem(Conjugation::Third, "capi").unwrap();
        assert_eq!(stem, "cap");
        assert_eq!(endings.present[5], "iunt");

        let (endings, stem) = present_stem(Conjugation::Third, "duc").unwrap();
        assert_eq!(stem, "duc");
        assert_eq!(endings.present[5], "unt");

        assert!(present_stem(Conjugation::Esse, "su").is_none());
    }

    #[test]
    fn test_compound_of() {
        let absum = LexicalRecord::new(
            vec!["absu".into(), "abes".into(), "afu".into(), "afut".into()],
            PartOfSpeech::Verb,
            "5 1 TO_BEING",
            None,
            "be away",
        );
        let WordClass::Verb(verb) = absum.word_class() else {
            panic!("expected a verb");
        };
        assert_eq!(compound_of(&absum, &verb), Some((CompoundBase::Sum, "ab")));

        let redeo = LexicalRecord::new(
            vec!["rede".into(), "redi".into(), "rediv".into(), "redit".into()],
            PartOfSpeech::Verb,
            "6 1",
            None,
            "go back",
        );
        let WordClass::Verb(verb) = redeo.word_class() else {
            panic!("expected a verb");
        };
        assert_eq!(compound_of(&redeo, &verb), Some((CompoundBase::Eo, "red")));

        let volo = LexicalRecord::new(
            vec!["vol".into(), "vel".into()],
            PartOfSpeech::Verb,
            "6 2",
            None,
            "wish",
        );
        let WordClass::Verb(verb) = volo.word_class() else {
            panic!("expected a verb");
        };
        assert_eq!(compound_of(&volo, &verb), None);
    }

    #[test]
    fn test_third_declension_heads() {
        assert_eq!(third_declension_heads(&noun(&["rex", "reg"])), ("rex".into(), "reg".into()));
        assert_eq!(third_declension_heads(&noun(&["luc"])), ("lucs".into(), "luc".into()));
        assert_eq!(third_declension_heads(&noun(&["pater", "pater"])), ("pater".into(), "pater".into()));
        assert_eq!(third_declension_heads(&noun(&["regin"])), ("regix".into(), "regin".into()));
    }
}
