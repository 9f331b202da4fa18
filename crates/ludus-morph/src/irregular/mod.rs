//! Irregular-lexeme override table
//!
//! Every [`Lexeme`] maps to one override. Verbs, pronouns and numerals carry
//! a complete hand-written paradigm that replaces the regular rules; the
//! adjective comparisons and the adverb/preposition aliases only add forms
//! on top of them.

pub(crate) mod nominals;
pub(crate) mod verbs;

use ludus_domain::{Gap, GapScope, Lexeme, ParadigmTable};

pub(crate) use nominals::{Comparison, IrregularNominal};
pub(crate) use verbs::IrregularVerb;

/// How an override combines with the regular rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverrideMode {
    /// The override is the whole answer
    Replace,
    /// The override adds to the regular output
    Augment,
}

pub(crate) enum Override {
    Verb(&'static IrregularVerb),
    Nominal(&'static IrregularNominal),
    Comparison(&'static Comparison),
    Alias {
        citation: &'static str,
        forms: &'static [&'static str],
    },
}

/// The override for a lexeme
pub(crate) fn lookup(lexeme: Lexeme) -> Override {
    match lexeme {
        Lexeme::Sum => Override::Verb(&verbs::SUM),
        Lexeme::Possum => Override::Verb(&verbs::POSSUM),
        Lexeme::Volo => Override::Verb(&verbs::VOLO),
        Lexeme::Nolo => Override::Verb(&verbs::NOLO),
        Lexeme::Malo => Override::Verb(&verbs::MALO),
        Lexeme::Eo => Override::Verb(&verbs::EO),
        Lexeme::Fero => Override::Verb(&verbs::FERO),
        Lexeme::Edo => Override::Verb(&verbs::EDO),
        Lexeme::Fio => Override::Verb(&verbs::FIO),
        Lexeme::Inquam => Override::Verb(&verbs::INQUAM),
        Lexeme::Aio => Override::Verb(&verbs::AIO),
        Lexeme::Quaeso => Override::Verb(&verbs::QUAESO),
        Lexeme::Memini => Override::Verb(&verbs::MEMINI),
        Lexeme::Odi => Override::Verb(&verbs::ODI),
        Lexeme::Ego => Override::Nominal(&nominals::EGO),
        Lexeme::Tu => Override::Nominal(&nominals::TU),
        Lexeme::Hic => Override::Nominal(&nominals::HIC),
        Lexeme::Ille => Override::Nominal(&nominals::ILLE),
        Lexeme::Is => Override::Nominal(&nominals::IS),
        Lexeme::Qui => Override::Nominal(&nominals::QUI),
        Lexeme::Duo => Override::Nominal(&nominals::DUO),
        Lexeme::Tres => Override::Nominal(&nominals::TRES),
        Lexeme::Malus => Override::Comparison(&nominals::MALUS),
        Lexeme::Bonus => Override::Comparison(&nominals::BONUS),
        Lexeme::Magnus => Override::Comparison(&nominals::MAGNUS),
        Lexeme::Parvus => Override::Comparison(&nominals::PARVUS),
        Lexeme::Multus => Override::Comparison(&nominals::MULTUS),
        Lexeme::Satis => Override::Alias {
            citation: "satis",
            forms: &["satis", "sat"],
        },
        Lexeme::Ab => Override::Alias {
            citation: "a, ab",
            forms: &["a", "ab", "abs"],
        },
    }
}

impl Override {
    pub(crate) fn citation(&self) -> &'static str {
        match self {
            Override::Verb(verb) => verb.citation,
            Override::Nominal(nominal) => nominal.citation,
            Override::Comparison(comparison) => comparison.citation,
            Override::Alias { citation, .. } => *citation,
        }
    }

    pub(crate) fn mode(&self) -> OverrideMode {
        match self {
            Override::Verb(_) | Override::Nominal(_) => OverrideMode::Replace,
            Override::Comparison(_) | Override::Alias { .. } => OverrideMode::Augment,
        }
    }

    /// Hand-written paradigm, for overrides that replace the regular one
    pub(crate) fn paradigm(&self) -> Option<(ParadigmTable, Vec<Gap>)> {
        match self {
            Override::Verb(verb) => Some((
                ParadigmTable::Conjugation(verb.table("", None, None)),
                gaps(verb.gaps),
            )),
            Override::Nominal(nominal) => Some((
                ParadigmTable::Declension(nominal.columns()),
                gaps(nominal.gaps),
            )),
            Override::Comparison(_) | Override::Alias { .. } => None,
        }
    }

    /// Surface forms the override contributes to the search set
    pub(crate) fn forms(&self) -> Vec<String> {
        let extras: &[&str] = match self {
            Override::Verb(verb) => verb.extra_forms,
            Override::Nominal(nominal) => nominal.extra_forms,
            Override::Comparison(comparison) => return comparison.forms(),
            Override::Alias { forms, .. } => *forms,
        };

        let mut forms: Vec<String> = match self.paradigm() {
            Some((table, _)) => table.surface_forms().into_iter().map(str::to_string).collect(),
            None => Vec::new(),
        };
        forms.extend(extras.iter().map(|form| form.to_string()));
        forms
    }
}

pub(crate) fn gaps(annotations: &[(GapScope, &str)]) -> Vec<Gap> {
    annotations
        .iter()
        .map(|&(scope, reason)| Gap::new(scope, reason))
        .collect()
}
