//! Paradigm command implementation.

use ludus_domain::{DictionaryEntry, EntryId};
use ludus_store::Dictionary;

use crate::cli::ParadigmArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Entries selected by a paradigm request.
///
/// With both a term and an id, the id must be one of the term's entries.
pub fn select_entries<'a>(args: &ParadigmArgs, dictionary: &'a Dictionary) -> Result<Vec<&'a DictionaryEntry>> {
    let by_id = match args.id {
        Some(id) => Some(
            dictionary
                .entry(EntryId::new(id))
                .ok_or_else(|| CliError::InvalidInput(format!("No entry with id {}", id)))?,
        ),
        None => None,
    };

    match (&args.term, by_id) {
        (Some(term), Some(entry)) => Ok(dictionary
            .lookup(term)
            .into_iter()
            .filter(|found| found.id == entry.id)
            .collect()),
        (Some(term), None) => Ok(dictionary.lookup(term)),
        (None, Some(entry)) => Ok(vec![entry]),
        (None, None) => Err(CliError::InvalidInput(
            "Give a form or an entry id".to_string(),
        )),
    }
}

/// Execute the paradigm command.
pub fn execute_paradigm(args: ParadigmArgs, dictionary: &Dictionary, formatter: &Formatter) -> Result<()> {
    let entries = select_entries(&args, dictionary)?;
    if entries.is_empty() {
        println!("{}", formatter.format_entries(&[])?);
        return Ok(());
    }

    for entry in entries {
        let paradigm = ludus_morph::full_paradigm(entry);
        println!("{}", formatter.format_paradigm(&paradigm)?);
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludus_domain::{LexicalRecord, PartOfSpeech};
    use ludus_store::BuildContext;

    fn dictionary() -> Dictionary {
        let mut context = BuildContext::with_defaults();
        context.ingest(LexicalRecord::new(
            vec!["aqu".into()],
            PartOfSpeech::Noun,
            "1 1",
            None,
            "water",
        ));
        context.ingest(LexicalRecord::new(
            vec!["terr".into()],
            PartOfSpeech::Noun,
            "1 1",
            None,
            "earth",
        ));
        context.finish()
    }

    fn args(term: Option<&str>, id: Option<u32>) -> ParadigmArgs {
        ParadigmArgs {
            term: term.map(str::to_string),
            id,
        }
    }

    #[test]
    fn test_select_by_term() {
        let dictionary = dictionary();
        let entries = select_entries(&args(Some("terrae"), None), &dictionary).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].citation_form, "terra, terrae");
    }

    #[test]
    fn test_select_by_id() {
        let dictionary = dictionary();
        let entries = select_entries(&args(None, Some(0)), &dictionary).unwrap();
        assert_eq!(entries[0].citation_form, "aqua, aquae");
    }

    #[test]
    fn test_term_and_mismatched_id_selects_nothing() {
        let dictionary = dictionary();
        let entries = select_entries(&args(Some("terrae"), Some(0)), &dictionary).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let dictionary = dictionary();
        assert!(matches!(
            select_entries(&args(None, Some(42)), &dictionary),
            Err(CliError::InvalidInput(_))
        ));
    }
}
