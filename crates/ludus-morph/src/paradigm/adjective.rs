//! Adjective declensions

use ludus_domain::{AdjectiveClass, Gap, GenderGroup, LexicalRecord, ParadigmTable};

use super::{declined, declined_with_nominative, unrecognized_nominal};
use crate::endings::{
    CaseEndings, FIRST_DECLENSION, SECOND_DECLENSION, SECOND_DECLENSION_NEUTER, THIRD_ADJECTIVE,
    THIRD_ADJECTIVE_NEUTER,
};

/// Masculine `-er` adjectives keep the bare nominative in the nominative and vocative
const SECOND_DECLENSION_ER: CaseEndings = CaseEndings {
    singular: ["", "i", "o", "um", "o", ""],
    plural: SECOND_DECLENSION.plural,
};

/// One-termination adjectives: the neuter nominative and accusative are the bare nominative
const THIRD_NEUTER_ONE_TERMINATION: CaseEndings = CaseEndings {
    singular: ["", "is", "i", "", "i", ""],
    plural: THIRD_ADJECTIVE_NEUTER.plural,
};

/// Masculine and feminine of one-termination adjectives (`ferox, ferocis`)
const THIRD_ONE_TERMINATION: CaseEndings = CaseEndings {
    singular: ["", "is", "i", "em", "i", ""],
    plural: THIRD_ADJECTIVE.plural,
};

pub(crate) fn declension(record: &LexicalRecord, adjective: AdjectiveClass) -> (ParadigmTable, Vec<Gap>) {
    let main = record.main_stem();
    let oblique = record.stem(1).unwrap_or(main);
    let distinct = oblique != main;

    let columns = match adjective {
        AdjectiveClass::FirstSecond { variant: 2 } if distinct => vec![
            declined_with_nominative(GenderGroup::Masculine, main, oblique, &SECOND_DECLENSION_ER),
            declined(GenderGroup::Feminine, oblique, &FIRST_DECLENSION),
            declined(GenderGroup::Neuter, oblique, &SECOND_DECLENSION_NEUTER),
        ],
        AdjectiveClass::FirstSecond { .. } => vec![
            declined(GenderGroup::Masculine, main, &SECOND_DECLENSION),
            declined(GenderGroup::Feminine, main, &FIRST_DECLENSION),
            declined(GenderGroup::Neuter, main, &SECOND_DECLENSION_NEUTER),
        ],
        AdjectiveClass::Third { variant: 1 } if distinct => vec![
            declined_with_nominative(GenderGroup::MasculineFeminine, main, oblique, &THIRD_ONE_TERMINATION),
            declined_with_nominative(GenderGroup::Neuter, main, oblique, &THIRD_NEUTER_ONE_TERMINATION),
        ],
        AdjectiveClass::Third { variant: 3 } if distinct => vec![
            declined_with_nominative(GenderGroup::Masculine, main, oblique, &THIRD_ONE_TERMINATION),
            declined(GenderGroup::Feminine, oblique, &THIRD_ADJECTIVE),
            declined(GenderGroup::Neuter, oblique, &THIRD_ADJECTIVE_NEUTER),
        ],
        AdjectiveClass::Third { .. } => vec![
            declined(GenderGroup::MasculineFeminine, main, &THIRD_ADJECTIVE),
            declined(GenderGroup::Neuter, main, &THIRD_ADJECTIVE_NEUTER),
        ],
        AdjectiveClass::Indeclinable => {
            return (ParadigmTable::Indeclinable(main.to_string()), Vec::new());
        }
        AdjectiveClass::Unrecognized => return unrecognized_nominal(record),
    };

    (ParadigmTable::Declension(columns), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::{Case, DeclensionColumn, Number, PartOfSpeech, WordClass};

    fn columns(stems: &[&str], code: &str) -> Vec<DeclensionColumn> {
        let record = LexicalRecord::new(
            stems.iter().map(|s| s.to_string()).collect(),
            PartOfSpeech::Adjective,
            code,
            None,
            "gloss",
        );
        let WordClass::Adjective(adjective) = record.word_class() else {
            panic!("expected an adjective");
        };
        match declension(&record, adjective) {
            (ParadigmTable::Declension(columns), _) => columns,
            (other, _) => panic!("expected a declension, got {:?}", other),
        }
    }

    #[test]
    fn test_first_second() {
        let bonus = columns(&["bon", "bon"], "1 1");
        assert_eq!(bonus.len(), 3);
        assert_eq!(bonus[0].get(Case::Nominative, Number::Singular), Some("bonus"));
        assert_eq!(bonus[1].get(Case::Genitive, Number::Plural), Some("bonarum"));
        assert_eq!(bonus[2].get(Case::Nominative, Number::Plural), Some("bona"));
    }

    #[test]
    fn test_first_second_er() {
        let pulcher = columns(&["pulcher", "pulchr"], "1 2");
        assert_eq!(pulcher[0].get(Case::Nominative, Number::Singular), Some("pulcher"));
        assert_eq!(pulcher[0].get(Case::Genitive, Number::Singular), Some("pulchri"));
        assert_eq!(pulcher[1].get(Case::Nominative, Number::Singular), Some("pulchra"));
    }

    #[test]
    fn test_third_declension_variants() {
        let fortis = columns(&["fort", "fort"], "3 2");
        assert_eq!(fortis[0].gender, GenderGroup::MasculineFeminine);
        assert_eq!(fortis[0].get(Case::Nominative, Number::Singular), Some("fortis"));
        assert_eq!(fortis[1].get(Case::Nominative, Number::Plural), Some("fortia"));

        let ferox = columns(&["ferox", "feroc"], "3 1");
        assert_eq!(ferox[0].get(Case::Nominative, Number::Singular), Some("ferox"));
        assert_eq!(ferox[0].get(Case::Accusative, Number::Singular), Some("ferocem"));
        assert_eq!(ferox[1].get(Case::Accusative, Number::Singular), Some("ferox"));

        let acer = columns(&["acer", "acr"], "3 3");
        assert_eq!(acer.len(), 3);
        assert_eq!(acer[1].get(Case::Nominative, Number::Singular), Some("acris"));
        assert_eq!(acer[2].get(Case::Nominative, Number::Singular), Some("acre"));
    }
}
