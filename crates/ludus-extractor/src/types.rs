//! Types describing loader outcomes

use std::fmt;

/// Why a lexicon line could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedLine {
    /// Line shorter than the configured minimum
    TooShort {
        /// Actual length in characters
        length: usize,
        /// Required minimum
        min: usize,
    },

    /// Stem field is empty
    MissingStems,

    /// Part-of-speech field is empty
    MissingCode,

    /// Gloss field is empty after cleaning
    MissingGloss,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedLine::TooShort { length, min } => {
                write!(f, "line too short: {} characters (min {})", length, min)
            }
            MalformedLine::MissingStems => write!(f, "missing stem field"),
            MalformedLine::MissingCode => write!(f, "missing part-of-speech field"),
            MalformedLine::MissingGloss => write!(f, "missing gloss field"),
        }
    }
}
