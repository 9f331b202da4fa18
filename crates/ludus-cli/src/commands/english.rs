//! English gloss search implementation.

use ludus_store::Dictionary;

use crate::cli::EnglishArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the english command.
pub fn execute_english(args: EnglishArgs, dictionary: &Dictionary, formatter: &Formatter) -> Result<()> {
    let query = args.words.join(" ");
    if query.trim().is_empty() {
        return Err(CliError::InvalidInput("Search words cannot be empty".to_string()));
    }

    let entries = dictionary.lookup_english(&query);
    println!("{}", formatter.format_entries(&entries)?);
    Ok(())
}
