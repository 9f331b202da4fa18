//! Lookup command implementation.

use ludus_store::Dictionary;

use crate::cli::LookupArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the lookup command.
pub fn execute_lookup(args: LookupArgs, dictionary: &Dictionary, formatter: &Formatter) -> Result<()> {
    let term = args.term.trim();
    if term.is_empty() {
        return Err(CliError::InvalidInput("Lookup term cannot be empty".to_string()));
    }

    let entries = dictionary.lookup(term);
    println!("{}", formatter.format_entries(&entries)?);
    Ok(())
}
