//! Command implementations.

pub mod build;
pub mod english;
pub mod lookup;
pub mod paradigm;
pub mod stats;

pub use self::build::execute_build;
pub use self::english::execute_english;
pub use self::lookup::execute_lookup;
pub use self::paradigm::execute_paradigm;
pub use self::stats::execute_stats;

use std::path::Path;

use ludus_store::Dictionary;
use tracing::debug;

use crate::error::{CliError, Result};

/// Load the dictionary artifact, or explain how to build one.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    if !path.exists() {
        return Err(CliError::NoDictionary(path.to_path_buf()));
    }

    let dictionary = Dictionary::load(path)?;
    debug!(
        path = %path.display(),
        entries = dictionary.len(),
        "Dictionary loaded"
    );
    Ok(dictionary)
}
