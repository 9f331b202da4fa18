//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::LexicalRecord;

/// A stream of lexical records
///
/// Implemented by the loading layer (ludus-extractor). Malformed input is
/// the source's concern: it skips and counts what it cannot parse, and only
/// reports errors that make the whole stream unusable.
pub trait RecordSource {
    /// Error type for source operations
    type Error;

    /// Load the next raw record, or `None` at end of input
    fn next_record(&mut self) -> Result<Option<LexicalRecord>, Self::Error>;

    /// Number of input items skipped as malformed so far
    fn malformed_count(&self) -> usize {
        0
    }
}

/// In-memory sources never fail
impl RecordSource for std::vec::IntoIter<LexicalRecord> {
    type Error = std::convert::Infallible;

    fn next_record(&mut self) -> Result<Option<LexicalRecord>, Self::Error> {
        Ok(self.next())
    }
}
