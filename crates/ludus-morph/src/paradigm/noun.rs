//! Noun declensions

use ludus_domain::{Declension, Gap, LexicalRecord, NounClass, ParadigmTable};

use super::{declined, declined_with_nominative, gender_group, unrecognized_nominal};
use crate::endings::{
    CaseEndings, FIFTH_DECLENSION, FIRST_DECLENSION, FOURTH_DECLENSION, FOURTH_DECLENSION_NEUTER,
    SECOND_DECLENSION, SECOND_DECLENSION_NEUTER, THIRD_DECLENSION, THIRD_DECLENSION_NEUTER,
};
use crate::stems::{er_heads, third_declension_heads};

/// Nominative/vocative-only slots for second-declension `-er` nouns
const SECOND_DECLENSION_ER: CaseEndings = CaseEndings {
    singular: ["", "i", "o", "um", "o", ""],
    plural: SECOND_DECLENSION.plural,
};

pub(crate) fn declension(record: &LexicalRecord, noun: NounClass) -> (ParadigmTable, Vec<Gap>) {
    let gender = gender_group(noun.gender);
    let main = record.main_stem();

    let column = match noun.declension {
        Declension::First => declined(gender, main, &FIRST_DECLENSION),
        Declension::Second if noun.is_neuter() => declined(gender, main, &SECOND_DECLENSION_NEUTER),
        Declension::Second if is_er_noun(record) => {
            let (nominative, oblique) = er_heads(record);
            declined_with_nominative(gender, &nominative, &oblique, &SECOND_DECLENSION_ER)
        }
        Declension::Second => declined(gender, main, &SECOND_DECLENSION),
        Declension::Third => {
            let (nominative, oblique) = third_declension_heads(record);
            let endings = if noun.is_neuter() {
                &THIRD_DECLENSION_NEUTER
            } else {
                &THIRD_DECLENSION
            };
            declined_with_nominative(gender, &nominative, &oblique, endings)
        }
        Declension::Fourth if noun.is_neuter() => declined(gender, main, &FOURTH_DECLENSION_NEUTER),
        Declension::Fourth => declined(gender, main, &FOURTH_DECLENSION),
        Declension::Fifth => declined(gender, main, &FIFTH_DECLENSION),
        Declension::Unrecognized => return unrecognized_nominal(record),
    };

    (ParadigmTable::Declension(vec![column]), Vec::new())
}

/// Second-declension variant 3 (`ager, agri`; `puer, pueri`)
pub(crate) fn is_er_noun(record: &LexicalRecord) -> bool {
    record.paradigm_code().variant == Some(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::{Case, DeclensionColumn, Gender, Number, PartOfSpeech, WordClass};

    fn column(stems: &[&str], code: &str, gender: Option<Gender>) -> DeclensionColumn {
        let record = LexicalRecord::new(
            stems.iter().map(|s| s.to_string()).collect(),
            PartOfSpeech::Noun,
            code,
            gender,
            "gloss",
        );
        let WordClass::Noun(noun) = record.word_class() else {
            panic!("expected a noun");
        };
        match declension(&record, noun) {
            (ParadigmTable::Declension(mut columns), _) => columns.remove(0),
            (other, _) => panic!("expected a declension, got {:?}", other),
        }
    }

    #[test]
    fn test_first_declension() {
        let aqua = column(&["aqu"], "1 1", Some(Gender::Feminine));
        assert_eq!(aqua.get(Case::Nominative, Number::Singular), Some("aqua"));
        assert_eq!(aqua.get(Case::Genitive, Number::Plural), Some("aquarum"));
        assert_eq!(aqua.get(Case::Ablative, Number::Plural), Some("aquis"));
    }

    #[test]
    fn test_second_declension_neuter() {
        let bellum = column(&["bell"], "2 2", Some(Gender::Neuter));
        assert_eq!(bellum.get(Case::Nominative, Number::Singular), Some("bellum"));
        assert_eq!(bellum.get(Case::Nominative, Number::Plural), Some("bella"));
    }

    #[test]
    fn test_second_declension_er() {
        let ager = column(&["ager", "agr"], "2 3", Some(Gender::Masculine));
        assert_eq!(ager.get(Case::Nominative, Number::Singular), Some("ager"));
        assert_eq!(ager.get(Case::Genitive, Number::Singular), Some("agri"));
        assert_eq!(ager.get(Case::Accusative, Number::Plural), Some("agros"));
    }

    #[test]
    fn test_third_declension() {
        let rex = column(&["rex", "reg"], "3 1", Some(Gender::Masculine));
        assert_eq!(rex.get(Case::Nominative, Number::Singular), Some("rex"));
        assert_eq!(rex.get(Case::Accusative, Number::Singular), Some("regem"));
        assert_eq!(rex.get(Case::Dative, Number::Plural), Some("regibus"));

        let tempus = column(&["tempus", "tempor"], "3 2", Some(Gender::Neuter));
        assert_eq!(tempus.get(Case::Accusative, Number::Singular), Some("tempus"));
        assert_eq!(tempus.get(Case::Nominative, Number::Plural), Some("tempora"));
    }

    #[test]
    fn test_fourth_and_fifth() {
        let manus = column(&["man"], "4 1", Some(Gender::Feminine));
        assert_eq!(manus.get(Case::Genitive, Number::Plural), Some("manuum"));

        let cornu = column(&["corn"], "4 2", Some(Gender::Neuter));
        assert_eq!(cornu.get(Case::Nominative, Number::Plural), Some("cornua"));

        let res = column(&["r"], "5 1", Some(Gender::Feminine));
        assert_eq!(res.get(Case::Genitive, Number::Singular), Some("rei"));
    }

    #[test]
    fn test_unrecognized_declension() {
        let record = LexicalRecord::new(vec!["xen".into()], PartOfSpeech::Noun, "8 1", None, "gloss");
        let WordClass::Noun(noun) = record.word_class() else {
            panic!("expected a noun");
        };
        let (table, gaps) = declension(&record, noun);
        assert!(matches!(table, ParadigmTable::Forms(ref forms) if forms.contains(&"xenus".to_string())));
        assert_eq!(gaps.len(), 1);
    }
}
