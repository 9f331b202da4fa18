//! Search-form generator

use indexmap::IndexSet;
use ludus_domain::{Declension, LexicalRecord, Lexeme, NonFinite, ParadigmTable, WordClass};

use crate::citation::citation_form;
use crate::endings::{FIRST_SECOND_ADJECTIVE, PARTICIPLE_OBLIQUE};
use crate::irregular::{self, OverrideMode};
use crate::paradigm::table_for;
use crate::stems::present_stem;

/// Insertion-ordered, duplicate-free set of surface forms
pub type SearchForms = IndexSet<String>;

/// Every surface form a reader might type for a record
///
/// Always contains every real stem. An irregular lexeme that replaces its
/// paradigm returns its hand-written forms without consulting the regular
/// rules. Never fails: unrecognized classes fall back to a minimal default.
///
/// # Examples
///
/// ```
/// use ludus_domain::{LexicalRecord, PartOfSpeech};
/// use ludus_morph::search_forms;
///
/// let record = LexicalRecord::new(
///     vec!["su".into(), "es".into(), "fu".into(), "fut".into()],
///     PartOfSpeech::Verb,
///     "5 1 TO_BEING",
///     None,
///     "be",
/// );
/// let forms = search_forms(&record);
/// for form in ["sum", "es", "est", "sumus", "estis", "sunt", "esse", "fui"] {
///     assert!(forms.contains(form));
/// }
/// ```
pub fn search_forms(record: &LexicalRecord) -> SearchForms {
    let mut forms: SearchForms = record.real_stems().map(str::to_string).collect();

    if let Some(lexeme) = Lexeme::for_record(record) {
        let entry = irregular::lookup(lexeme);
        forms.extend(entry.forms());
        if entry.mode() == OverrideMode::Replace {
            return forms;
        }
    }

    let (table, _) = table_for(record, &citation_form(record));
    forms.extend(table.surface_forms().into_iter().map(str::to_string));

    match record.word_class() {
        WordClass::Noun(noun) if noun.declension == Declension::Third => {
            third_declension_variants(record, &mut forms)
        }
        WordClass::Verb(verb) => {
            if let Some((endings, stem)) = present_stem(verb.conjugation, record.main_stem()) {
                let oblique = format!("{}{}", stem, endings.participle_oblique);
                forms.extend(PARTICIPLE_OBLIQUE.iter().map(|ending| format!("{}{}", oblique, ending)));
            }
            if let ParadigmTable::Conjugation(verb_table) = &table {
                participle_declension(verb_table, &mut forms);
            }
        }
        _ => {}
    }

    forms
}

/// Main-stem oblique forms for third-declension nouns whose stems differ
fn third_declension_variants(record: &LexicalRecord, forms: &mut SearchForms) {
    let main = record.main_stem();
    if record.stem(1).is_some_and(|oblique| oblique != main) {
        forms.extend(["is", "em", "es"].iter().map(|ending| format!("{}{}", main, ending)));
    }
}

/// Decline the perfect and future participles and the gerundive like `bonus`
fn participle_declension(table: &ludus_domain::VerbTable, forms: &mut SearchForms) {
    for kind in [NonFinite::PerfectParticiple, NonFinite::FutureParticiple, NonFinite::Gerundive] {
        let Some(stem) = table.non_finite(kind).and_then(|form| form.strip_suffix("us")) else {
            continue;
        };
        forms.extend(FIRST_SECOND_ADJECTIVE.iter().map(|ending| format!("{}{}", stem, ending)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::{Gender, PartOfSpeech};

    fn record(stems: &[&str], pos: PartOfSpeech, code: &str, gender: Option<Gender>) -> LexicalRecord {
        LexicalRecord::new(
            stems.iter().map(|s| s.to_string()).collect(),
            pos,
            code,
            gender,
            "gloss",
        )
    }

    fn assert_contains(forms: &SearchForms, expected: &[&str]) {
        for form in expected {
            assert!(forms.contains(*form), "missing {form} in {forms:?}");
        }
    }

    #[test]
    fn test_first_declension_forms() {
        let forms = search_forms(&record(&["aqu"], PartOfSpeech::Noun, "1", None));
        assert_contains(&forms, &["aqu", "aqua", "aquae", "aquam", "aquas", "aquarum", "aquis"]);
    }

    #[test]
    fn test_stems_come_first() {
        let forms = search_forms(&record(&["rex", "reg"], PartOfSpeech::Noun, "3 1", Some(Gender::Masculine)));
        let head: Vec<&str> = forms.iter().take(2).map(String::as_str).collect();
        assert_eq!(head, vec!["rex", "reg"]);
        assert_contains(&forms, &["regis", "regem", "regibus", "rexis"]);
    }

    #[test]
    fn test_sum_override_replaces() {
        let forms = search_forms(&record(&["su", "es", "fu", "fut"], PartOfSpeech::Verb, "5 1 TO_BEING", None));
        assert_contains(&forms, &["sum", "es", "est", "sumus", "estis", "sunt", "esse", "fui", "fore"]);
        assert!(!forms.contains("suo"));
        assert!(!forms.contains("suere"));
    }

    #[test]
    fn test_regular_homographs_use_regular_forms() {
        let fly = search_forms(&record(&["vol", "vol", "volav", "volat"], PartOfSpeech::Verb, "1 1", None));
        assert_contains(&fly, &["volo", "volare", "volavit", "volatus"]);
        assert!(!fly.contains("velle"));

        let sew = search_forms(&record(&["su", "su", "su", "sut"], PartOfSpeech::Verb, "3 1", None));
        assert_contains(&sew, &["suo", "suere", "sutus"]);
        assert!(!sew.contains("est"));

        let give_out = search_forms(&record(&["ed", "ed", "edid", "edit"], PartOfSpeech::Verb, "3 1", None));
        assert_contains(&give_out, &["edo", "edere", "edidit", "editus"]);
    }

    #[test]
    fn test_volo_and_fero() {
        let volo = search_forms(&record(&["vol", "vel", "volu", "zzz"], PartOfSpeech::Verb, "6 2", None));
        assert_contains(&volo, &["volo", "vis", "vult", "volt", "velle", "voluit"]);
        assert!(!volo.contains("zzz"));

        let fero = search_forms(&record(&["fer", "fer", "tul", "lat"], PartOfSpeech::Verb, "3 2 TRANS", None));
        assert_contains(&fero, &["fero", "fers", "fert", "ferre", "tuli", "latus", "feror"]);
    }

    #[test]
    fn test_regular_verb_forms() {
        let forms = search_forms(&record(&["am", "am", "amav", "amat"], PartOfSpeech::Verb, "1 1 TRANS", None));
        assert_contains(
            &forms,
            &[
                "amo", "amas", "amabam", "amabo", "amem", "amarem", "ama", "amate", "amor", "amatur",
                "amavi", "amaveram", "amavero", "amaverim", "amavissem", "amare", "amari", "amavisse",
                "amans", "amantis", "amantium", "amatus", "amatam", "amaturus", "amandus", "amandae",
                "amatum",
            ],
        );
        assert!(!forms.iter().any(|form| form.contains(' ')));
    }

    #[test]
    fn test_deponent_third_io() {
        let forms = search_forms(&record(&["pati", "pat", "zzz", "pass"], PartOfSpeech::Verb, "3 1 DEP", None));
        assert_contains(&forms, &["patior", "pateris", "patitur", "patimur", "patiuntur", "pati", "passus"]);
        assert!(!forms.contains("patio"));
    }

    #[test]
    fn test_adjective_comparison_augments() {
        let forms = search_forms(&record(&["bon", "bon"], PartOfSpeech::Adjective, "1 1", None));
        assert_contains(&forms, &["bonus", "bona", "bonorum", "melior", "melioris", "optimus", "optimae"]);
    }

    #[test]
    fn test_preposition_alias() {
        let forms = search_forms(&record(&["ab"], PartOfSpeech::Preposition, "", None));
        assert_contains(&forms, &["a", "ab", "abs"]);
    }

    #[test]
    fn test_unrecognized_defaults() {
        let verb = search_forms(&record(&["fooz"], PartOfSpeech::Verb, "", None));
        assert_contains(&verb, &["fooz", "foozare", "foozere", "foozire"]);

        let noun = search_forms(&record(&["fooz"], PartOfSpeech::Noun, "8", None));
        assert_contains(&noun, &["foozus", "fooza", "foozum", "foozi", "foozis", "fooze", "foozes"]);
    }

    #[test]
    fn test_pronoun_and_numeral_overrides() {
        let hic = search_forms(&record(&["hic", "haec", "hoc"], PartOfSpeech::Pronoun, "3 1", None));
        assert_contains(&hic, &["hic", "huius", "hunc", "hanc", "horum", "harum"]);

        let duo = search_forms(&record(&["du", "du", "du", "du"], PartOfSpeech::Numeral, "2 2", None));
        assert_contains(&duo, &["duo", "duae", "duorum", "duabus", "duos"]);
    }

    #[test]
    fn test_placeholders_are_not_indexed() {
        let forms = search_forms(&record(&["zzz", "zzz", "memin", "zzz"], PartOfSpeech::Verb, "1 1 PERFDEF", None));
        assert_contains(&forms, &["memin", "memini", "meministi", "meminit", "memento", "meminisse"]);
        assert!(!forms.contains("zzz"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use ludus_domain::PartOfSpeech;
    use proptest::prelude::*;

    fn part_of_speech() -> impl Strategy<Value = PartOfSpeech> {
        prop::sample::select(PartOfSpeech::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn stems_are_always_searchable(
            stems in prop::collection::vec("[a-z]{1,10}", 1..5),
            pos in part_of_speech(),
            class in 0u8..10,
            variant in 0u8..5,
        ) {
            let record = LexicalRecord::new(stems, pos, format!("{class} {variant}"), None, "gloss");
            let forms = search_forms(&record);
            for stem in record.real_stems() {
                prop_assert!(forms.contains(stem));
            }
        }

        #[test]
        fn search_forms_are_deterministic(
            stems in prop::collection::vec("[a-z]{1,10}", 1..5),
            pos in part_of_speech(),
            class in 0u8..10,
        ) {
            let record = LexicalRecord::new(stems, pos, format!("{class} 1 TRANS"), None, "gloss");
            let first: Vec<String> = search_forms(&record).into_iter().collect();
            let second: Vec<String> = search_forms(&record).into_iter().collect();
            prop_assert_eq!(first, second);
        }
    }
}
