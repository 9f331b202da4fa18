//! Pronoun paradigms
//!
//! A closed set of hand-written tables selected by the citation form. Any
//! other pronoun is listed by its stems.

use ludus_domain::{Gap, LexicalRecord, ParadigmTable};

use crate::irregular::{self, IrregularNominal};

/// Citation prefix of each hand-written pronoun
fn table_for_citation(citation_form: &str) -> Option<&'static IrregularNominal> {
    const TABLES: [(&str, &IrregularNominal); 6] = [
        ("ego", &irregular::nominals::EGO),
        ("tu, tui", &irregular::nominals::TU),
        ("hic, haec", &irregular::nominals::HIC),
        ("ille, illa", &irregular::nominals::ILLE),
        ("is, ea", &irregular::nominals::IS),
        ("qui, quae", &irregular::nominals::QUI),
    ];

    TABLES
        .iter()
        .find(|(prefix, _)| citation_form.starts_with(prefix))
        .map(|&(_, table)| table)
}

pub(crate) fn declension(record: &LexicalRecord, citation_form: &str) -> (ParadigmTable, Vec<Gap>) {
    match table_for_citation(citation_form) {
        Some(table) => (
            ParadigmTable::Declension(table.columns()),
            irregular::gaps(table.gaps),
        ),
        None => (
            ParadigmTable::Forms(record.real_stems().take(3).map(str::to_string).collect()),
            Vec::new(),
        ),
    }
}
