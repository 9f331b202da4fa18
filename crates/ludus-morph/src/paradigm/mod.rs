//! Full-paradigm generator
//!
//! Builds the complete table for one entry on demand. Irregular lexemes
//! are served from the override table; everything else dispatches on the
//! entry's [`WordClass`].

mod adjective;
pub(crate) mod noun;
mod pronoun;
pub(crate) mod verb;

use ludus_domain::{
    CaseForms, DeclensionColumn, DictionaryEntry, Gap, GapScope, Gender, GenderGroup,
    LexicalRecord, Lexeme, Paradigm, ParadigmTable, WordClass,
};
use tracing::debug;

use crate::endings::{CaseEndings, DEFAULT_NOMINAL};
use crate::irregular;

/// Generate the complete paradigm of a stored entry
///
/// Pure and stateless; never touches the morphological index.
///
/// # Examples
///
/// ```
/// use ludus_domain::{DictionaryEntry, EntryId, LexicalRecord, PartOfSpeech, Case, Number, ParadigmTable};
/// use ludus_morph::full_paradigm;
///
/// let record = LexicalRecord::new(vec!["aqu".into()], PartOfSpeech::Noun, "1 1", None, "water");
/// let entry = DictionaryEntry::new(EntryId::new(0), record, "aqua, aquae");
/// let paradigm = full_paradigm(&entry);
///
/// match &paradigm.table {
///     ParadigmTable::Declension(columns) => {
///         assert_eq!(columns[0].get(Case::Genitive, Number::Plural), Some("aquarum"));
///     }
///     _ => panic!("expected a declension"),
/// }
/// ```
pub fn full_paradigm(entry: &DictionaryEntry) -> Paradigm {
    paradigm_for(&entry.record, &entry.citation_form)
}

/// Generate the complete paradigm of a record under a given citation form
pub fn paradigm_for(record: &LexicalRecord, citation_form: &str) -> Paradigm {
    let (table, gaps) = table_for(record, citation_form);

    Paradigm {
        citation_form: citation_form.to_string(),
        part_of_speech: record.part_of_speech,
        table,
        gaps,
    }
}

/// Table and gaps for a record, overrides first
pub(crate) fn table_for(record: &LexicalRecord, citation_form: &str) -> (ParadigmTable, Vec<Gap>) {
    if let Some(found) = Lexeme::for_record(record).and_then(|lexeme| irregular::lookup(lexeme).paradigm()) {
        return found;
    }

    match record.word_class() {
        WordClass::Noun(noun) => noun::declension(record, noun),
        WordClass::Verb(verb) => verb::conjugation(record, verb),
        WordClass::Adjective(adjective) => adjective::declension(record, adjective),
        WordClass::Pronoun => pronoun::declension(record, citation_form),
        WordClass::Numeral | WordClass::Preposition | WordClass::Adverb | WordClass::Uninflected => {
            (ParadigmTable::Indeclinable(record.main_stem().to_string()), Vec::new())
        }
    }
}

/// Stem plus every ending of a declension
pub(crate) fn declined(gender: GenderGroup, stem: &str, endings: &CaseEndings) -> DeclensionColumn {
    DeclensionColumn {
        gender,
        singular: CaseForms::from_forms(endings.singular.map(|ending| format!("{}{}", stem, ending))),
        plural: CaseForms::from_forms(endings.plural.map(|ending| format!("{}{}", stem, ending))),
    }
}

/// Like [`declined`], but slots whose ending is empty take the bare nominative
pub(crate) fn declined_with_nominative(
    gender: GenderGroup,
    nominative: &str,
    oblique: &str,
    endings: &CaseEndings,
) -> DeclensionColumn {
    let inflect = |ending: &str| {
        if ending.is_empty() {
            nominative.to_string()
        } else {
            format!("{}{}", oblique, ending)
        }
    };

    DeclensionColumn {
        gender,
        singular: CaseForms::from_forms(endings.singular.map(inflect)),
        plural: CaseForms::from_forms(endings.plural.map(inflect)),
    }
}

/// Flat listing for nominals whose class is not recognized
pub(crate) fn unrecognized_nominal(record: &LexicalRecord) -> (ParadigmTable, Vec<Gap>) {
    debug!(stem = record.main_stem(), code = %record.code, "unrecognized nominal class");

    let main = record.main_stem();
    let forms = DEFAULT_NOMINAL
        .iter()
        .map(|ending| format!("{}{}", main, ending))
        .collect();

    (
        ParadigmTable::Forms(forms),
        vec![Gap::new(
            GapScope::UnrecognizedClass,
            format!("paradigm class \"{}\" not recognized", record.code),
        )],
    )
}

pub(crate) fn gender_group(gender: Option<Gender>) -> GenderGroup {
    match gender {
        Some(Gender::Masculine) => GenderGroup::Masculine,
        Some(Gender::Feminine) => GenderGroup::Feminine,
        Some(Gender::Neuter) => GenderGroup::Neuter,
        Some(Gender::Common) | Some(Gender::Unknown) | None => GenderGroup::All,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::{Case, EntryId, Mood, Number, PartOfSpeech, Person, Tense, Voice};

    fn entry(stems: &[&str], pos: PartOfSpeech, code: &str) -> DictionaryEntry {
        let record = LexicalRecord::new(
            stems.iter().map(|s| s.to_string()).collect(),
            pos,
            code,
            None,
            "gloss",
        );
        let citation = crate::citation_form(&record);
        DictionaryEntry::new(EntryId::new(0), record, citation)
    }

    #[test]
    fn test_sum_has_no_passive() {
        let paradigm = full_paradigm(&entry(&["su", "es", "fu", "fut"], PartOfSpeech::Verb, "5 1 TO_BEING"));
        assert_eq!(paradigm.citation_form, "sum, esse, fui, futurus");
        assert!(paradigm.has_gap(GapScope::PassiveVoice));
        assert!(paradigm
            .gaps
            .iter()
            .any(|gap| gap.reason.contains("no passive forms")));
    }

    #[test]
    fn test_pati_third_singular_passive() {
        let paradigm = full_paradigm(&entry(&["pati", "pat", "zzz", "pass"], PartOfSpeech::Verb, "3 1 DEP"));
        let ParadigmTable::Conjugation(table) = &paradigm.table else {
            panic!("expected a conjugation");
        };
        assert_eq!(
            table.get(Mood::Indicative, Tense::Present, Voice::Passive, Person::ThirdSingular),
            Some("patitur")
        );
        assert_eq!(paradigm.citation_form, "patior, pati, passus sum");
    }

    #[test]
    fn test_indeclinable_parts_of_speech() {
        let paradigm = full_paradigm(&entry(&["et"], PartOfSpeech::Conjunction, ""));
        assert_eq!(paradigm.table, ParadigmTable::Indeclinable("et".into()));
        assert!(paradigm.gaps.is_empty());
    }

    #[test]
    fn test_pronoun_override() {
        let paradigm = full_paradigm(&entry(&["ille", "illa", "illud"], PartOfSpeech::Pronoun, "9 8"));
        let ParadigmTable::Declension(columns) = &paradigm.table else {
            panic!("expected a declension");
        };
        assert_eq!(columns[2].get(Case::Nominative, Number::Singular), Some("illud"));
    }

    #[test]
    fn test_paradigm_is_deterministic() {
        let entry = entry(&["duc", "duc", "dux", "duct"], PartOfSpeech::Verb, "3 1 TRANS");
        assert_eq!(full_paradigm(&entry), full_paradigm(&entry));
    }
}
