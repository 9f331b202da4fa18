//! Hand-written declensions of pronouns and numerals, and the irregular
//! comparison of adjectives

use ludus_domain::{CaseForms, DeclensionColumn, GapScope, GenderGroup};

use crate::endings::{Row, COMPARATIVE, FIRST_SECOND_ADJECTIVE};

/// Complete declension data for one pronoun or numeral
pub(crate) struct IrregularNominal {
    pub citation: &'static str,
    /// Gender group, singular, plural
    columns: &'static [(GenderGroup, Row, Row)],
    pub extra_forms: &'static [&'static str],
    pub gaps: &'static [(GapScope, &'static str)],
}

impl IrregularNominal {
    pub(crate) fn columns(&self) -> Vec<DeclensionColumn> {
        self.columns
            .iter()
            .map(|&(gender, singular, plural)| DeclensionColumn {
                gender,
                singular: CaseForms::from_forms(singular),
                plural: CaseForms::from_forms(plural),
            })
            .collect()
    }
}

const NONE: Row = ["", "", "", "", "", ""];

pub(crate) const EGO: IrregularNominal = IrregularNominal {
    citation: "ego, mei",
    columns: &[(
        GenderGroup::All,
        ["ego", "mei", "mihi / mi", "me", "me", ""],
        ["nos", "nostrum / nostri", "nobis", "nos", "nobis", ""],
    )],
    extra_forms: &["mecum", "nobiscum"],
    gaps: &[],
};

pub(crate) const TU: IrregularNominal = IrregularNominal {
    citation: "tu, tui",
    columns: &[(
        GenderGroup::All,
        ["tu", "tui", "tibi", "te", "te", "tu"],
        ["vos", "vestrum / vestri", "vobis", "vos", "vobis", "vos"],
    )],
    extra_forms: &["tecum", "vobiscum"],
    gaps: &[],
};

pub(crate) const HIC: IrregularNominal = IrregularNominal {
    citation: "hic, haec, hoc",
    columns: &[
        (
            GenderGroup::Masculine,
            ["hic", "huius", "huic", "hunc", "hoc", ""],
            ["hi", "horum", "his", "hos", "his", ""],
        ),
        (
            GenderGroup::Feminine,
            ["haec", "huius", "huic", "hanc", "hac", ""],
            ["hae", "harum", "his", "has", "his", ""],
        ),
        (
            GenderGroup::Neuter,
            ["hoc", "huius", "huic", "hoc", "hoc", ""],
            ["haec", "horum", "his", "haec", "his", ""],
        ),
    ],
    extra_forms: &[],
    gaps: &[],
};

pub(crate) const ILLE: IrregularNominal = IrregularNominal {
    citation: "ille, illa, illud",
    columns: &[
        (
            GenderGroup::Masculine,
            ["ille", "illius", "illi", "illum", "illo", ""],
            ["illi", "illorum", "illis", "illos", "illis", ""],
        ),
        (
            GenderGroup::Feminine,
            ["illa", "illius", "illi", "illam", "illa", ""],
            ["illae", "illarum", "illis", "illas", "illis", ""],
        ),
        (
            GenderGroup::Neuter,
            ["illud", "illius", "illi", "illud", "illo", ""],
            ["illa", "illorum", "illis", "illa", "illis", ""],
        ),
    ],
    extra_forms: &[],
    gaps: &[],
};

pub(crate) const IS: IrregularNominal = IrregularNominal {
    citation: "is, ea, id",
    columns: &[
        (
            GenderGroup::Masculine,
            ["is", "eius", "ei", "eum", "eo", ""],
            ["ei / ii", "eorum", "eis / iis", "eos", "eis / iis", ""],
        ),
        (
            GenderGroup::Feminine,
            ["ea", "eius", "ei", "eam", "ea", ""],
            ["eae", "earum", "eis / iis", "eas", "eis / iis", ""],
        ),
        (
            GenderGroup::Neuter,
            ["id", "eius", "ei", "id", "eo", ""],
            ["ea", "eorum", "eis / iis", "ea", "eis / iis", ""],
        ),
    ],
    extra_forms: &[],
    gaps: &[],
};

pub(crate) const QUI: IrregularNominal = IrregularNominal {
    citation: "qui, quae, quod",
    columns: &[
        (
            GenderGroup::Masculine,
            ["qui", "cuius", "cui", "quem", "quo", ""],
            ["qui", "quorum", "quibus", "quos", "quibus", ""],
        ),
        (
            GenderGroup::Feminine,
            ["quae", "cuius", "cui", "quam", "qua", ""],
            ["quae", "quarum", "quibus", "quas", "quibus", ""],
        ),
        (
            GenderGroup::Neuter,
            ["quod", "cuius", "cui", "quod", "quo", ""],
            ["quae", "quorum", "quibus", "quae", "quibus", ""],
        ),
    ],
    extra_forms: &["quocum", "quibuscum"],
    gaps: &[],
};

pub(crate) const DUO: IrregularNominal = IrregularNominal {
    citation: "duo, duae, duo",
    columns: &[
        (
            GenderGroup::Masculine,
            NONE,
            ["duo", "duorum", "duobus", "duos / duo", "duobus", "duo"],
        ),
        (
            GenderGroup::Feminine,
            NONE,
            ["duae", "duarum", "duabus", "duas", "duabus", "duae"],
        ),
        (
            GenderGroup::Neuter,
            NONE,
            ["duo", "duorum", "duobus", "duo", "duobus", "duo"],
        ),
    ],
    extra_forms: &[],
    gaps: &[(GapScope::Singular, "plural only")],
};

pub(crate) const TRES: IrregularNominal = IrregularNominal {
    citation: "tres, tria",
    columns: &[
        (
            GenderGroup::MasculineFeminine,
            NONE,
            ["tres", "trium", "tribus", "tres", "tribus", "tres"],
        ),
        (
            GenderGroup::Neuter,
            NONE,
            ["tria", "trium", "tribus", "tria", "tribus", "tria"],
        ),
    ],
    extra_forms: &[],
    gaps: &[(GapScope::Singular, "plural only")],
};

/// Irregular comparative and superlative of an adjective
pub(crate) struct Comparison {
    pub citation: &'static str,
    comparative_stem: &'static str,
    /// Replaces the regular comparative endings when not empty
    comparative_forms: &'static [&'static str],
    superlative_stem: &'static str,
}

impl Comparison {
    pub(crate) fn forms(&self) -> Vec<String> {
        let comparative: Vec<String> = if self.comparative_forms.is_empty() {
            COMPARATIVE
                .iter()
                .map(|ending| format!("{}{}", self.comparative_stem, ending))
                .collect()
        } else {
            self.comparative_forms.iter().map(|form| form.to_string()).collect()
        };

        let superlative = FIRST_SECOND_ADJECTIVE
            .iter()
            .map(|ending| format!("{}{}", self.superlative_stem, ending));

        comparative.into_iter().chain(superlative).collect()
    }
}

pub(crate) const MALUS: Comparison = Comparison {
    citation: "malus, peior, pessimus",
    comparative_stem: "pei",
    comparative_forms: &[],
    superlative_stem: "pessim",
};

pub(crate) const BONUS: Comparison = Comparison {
    citation: "bonus, melior, optimus",
    comparative_stem: "meli",
    comparative_forms: &[],
    superlative_stem: "optim",
};

pub(crate) const MAGNUS: Comparison = Comparison {
    citation: "magnus, maior, maximus",
    comparative_stem: "mai",
    comparative_forms: &[],
    superlative_stem: "maxim",
};

pub(crate) const PARVUS: Comparison = Comparison {
    citation: "parvus, minor, minimus",
    comparative_stem: "min",
    comparative_forms: &[],
    superlative_stem: "minim",
};

pub(crate) const MULTUS: Comparison = Comparison {
    citation: "multus, plus, plurimus",
    comparative_stem: "plur",
    comparative_forms: &["plus", "pluris", "plures", "plura", "plurium", "pluribus"],
    superlative_stem: "plurim",
};

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::{Case, Number};

    #[test]
    fn test_hic_columns() {
        let columns = HIC.columns();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].get(Case::Accusative, Number::Singular), Some("hunc"));
        assert_eq!(columns[1].get(Case::Genitive, Number::Plural), Some("harum"));
        assert_eq!(columns[2].get(Case::Vocative, Number::Singular), None);
    }

    #[test]
    fn test_duo_has_no_singular() {
        for column in DUO.columns() {
            assert!(column.singular.iter().all(|(_, form)| form.is_none()));
        }
    }

    #[test]
    fn test_comparison_forms() {
        let forms = MALUS.forms();
        assert!(forms.contains(&"peior".to_string()));
        assert!(forms.contains(&"peioris".to_string()));
        assert!(forms.contains(&"pessimus".to_string()));

        let forms = MULTUS.forms();
        assert!(forms.contains(&"plus".to_string()));
        assert!(!forms.contains(&"pluror".to_string()));
        assert!(forms.contains(&"plurimorum".to_string()));
    }
}
