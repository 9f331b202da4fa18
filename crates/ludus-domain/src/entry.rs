//! Dictionary entries - accepted records with a stable id

use std::fmt;

use crate::LexicalRecord;

/// Stable small-integer identifier; also the index into the entry table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u32);

impl EntryId {
    /// Create an id from its raw value
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Position of the entry in the entry table
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| format!("Invalid entry id '{}': {}", s, e))
    }
}

/// A stored dictionary entry
///
/// The citation form is a pure function of the record; it is computed once
/// when the entry is created or replaced and must be reproducible from the
/// record alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Stable id
    pub id: EntryId,

    /// The record this entry was built from
    pub record: LexicalRecord,

    /// Canonical display string, e.g. `"aqua, aquae"`
    pub citation_form: String,
}

impl DictionaryEntry {
    /// Create an entry
    pub fn new(id: EntryId, record: LexicalRecord, citation_form: impl Into<String>) -> Self {
        Self {
            id,
            record,
            citation_form: citation_form.into(),
        }
    }

    /// Main stem of the underlying record
    pub fn main_stem(&self) -> &str {
        self.record.main_stem()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartOfSpeech;

    #[test]
    fn test_entry_id_parse() {
        let id: EntryId = " 42 ".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.index(), 42);
        assert!("abc".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_entry_main_stem() {
        let record = LexicalRecord::new(
            vec!["aqu".to_string()],
            PartOfSpeech::Noun,
            "1 1",
            None,
            "water",
        );
        let entry = DictionaryEntry::new(EntryId::new(0), record, "aqua, aquae");
        assert_eq!(entry.main_stem(), "aqu");
        assert_eq!(entry.id.to_string(), "0");
    }
}
