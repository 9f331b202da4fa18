//! Stats command implementation.

use ludus_store::Dictionary;

use crate::error::Result;
use crate::output::Formatter;

/// Execute the stats command.
pub fn execute_stats(dictionary: &Dictionary, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_metadata(dictionary.metadata())?);
    Ok(())
}
