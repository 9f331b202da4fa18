//! Read-only dictionary surface
//!
//! A [`Dictionary`] is what the display layer holds after a build or after
//! loading an artifact: the entry table, the form index and the English
//! gloss index. Nothing here mutates after construction.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ludus_domain::{DictionaryEntry, EntryId, Paradigm};
use ludus_morph::full_paradigm;
use tracing::info;

use crate::artifact::{entry_from_dto, entry_to_dto, index_from_dto, index_to_dto};
use crate::{Artifact, ArtifactMetadata, GlossIndex, MorphIndex, StoreError};

/// Entries, form index and gloss index of a finished build
#[derive(Debug, Clone)]
pub struct Dictionary {
    metadata: ArtifactMetadata,
    entries: Vec<DictionaryEntry>,
    index: MorphIndex,
    glosses: GlossIndex,
}

impl Dictionary {
    /// Assemble a dictionary and build its gloss index
    pub fn new(metadata: ArtifactMetadata, entries: Vec<DictionaryEntry>, index: MorphIndex) -> Self {
        let glosses = GlossIndex::build(&entries);
        Self {
            metadata,
            entries,
            index,
            glosses,
        }
    }

    /// Entries that produce the term
    ///
    /// The term is lowercased and trimmed. An unknown term yields an empty
    /// list, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ludus_domain::{LexicalRecord, PartOfSpeech};
    /// use ludus_store::BuildContext;
    ///
    /// let mut context = BuildContext::with_defaults();
    /// context.ingest(LexicalRecord::new(vec!["aqu".into()], PartOfSpeech::Noun, "1 1", None, "water"));
    /// let dictionary = context.finish();
    ///
    /// assert_eq!(dictionary.lookup("Aquarum")[0].citation_form, "aqua, aquae");
    /// assert!(dictionary.lookup("ignis").is_empty());
    /// ```
    pub fn lookup(&self, term: &str) -> Vec<&DictionaryEntry> {
        self.resolve(self.index.get(term))
    }

    /// Entries whose gloss contains the English word or short phrase
    pub fn lookup_english(&self, word: &str) -> Vec<&DictionaryEntry> {
        self.resolve(self.glosses.get(word))
    }

    /// Entry by id
    pub fn entry(&self, id: EntryId) -> Option<&DictionaryEntry> {
        self.entries.get(id.index())
    }

    /// Full paradigm of one entry
    pub fn paradigm(&self, id: EntryId) -> Option<Paradigm> {
        self.entry(id).map(full_paradigm)
    }

    /// Build counts
    pub fn metadata(&self) -> &ArtifactMetadata {
        &self.metadata
    }

    /// Every entry, in id order
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// The form index
    pub fn index(&self) -> &MorphIndex {
        &self.index
    }

    /// The English gloss index
    pub fn glosses(&self) -> &GlossIndex {
        &self.glosses
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn resolve(&self, ids: &[EntryId]) -> Vec<&DictionaryEntry> {
        ids.iter().filter_map(|id| self.entry(*id)).collect()
    }

    /// Convert to the serialized shape
    pub fn to_artifact(&self) -> Artifact {
        Artifact {
            metadata: self.metadata.clone(),
            entries: self.entries.iter().map(entry_to_dto).collect(),
            morph_index: index_to_dto(&self.index),
        }
    }

    /// Rebuild from the serialized shape, checking its consistency
    pub fn from_artifact(artifact: Artifact) -> Result<Self, StoreError> {
        let entries = artifact
            .entries
            .into_iter()
            .map(entry_from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        for (position, entry) in entries.iter().enumerate() {
            if entry.id.index() != position {
                return Err(StoreError::InvalidArtifact(format!(
                    "entry {} stored at position {}",
                    entry.id, position
                )));
            }
        }

        let index = index_from_dto(artifact.morph_index);
        for (form, ids) in index.iter() {
            if let Some(id) = ids.iter().find(|id| id.index() >= entries.len()) {
                return Err(StoreError::InvalidArtifact(format!(
                    "form '{}' refers to missing entry {}",
                    form, id
                )));
            }
        }

        Ok(Self::new(artifact.metadata, entries, index))
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.to_artifact())?)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Self::from_artifact(serde_json::from_str(json)?)
    }

    /// Write the artifact to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(fs::File::create(path)?);
        serde_json::to_writer(&mut writer, &self.to_artifact())?;
        writer.flush()?;

        info!(
            path = %path.display(),
            entries = self.entries.len(),
            forms = self.index.len(),
            "Artifact written"
        );
        Ok(())
    }

    /// Read an artifact from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let reader = BufReader::new(fs::File::open(path.as_ref())?);
        let artifact: Artifact = serde_json::from_reader(reader)?;
        Self::from_artifact(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuildContext;
    use ludus_domain::{LexicalRecord, PartOfSpeech};

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
            vec!["su".into(), "es".into(), "fu".into(), "fut".into()],
            PartOfSpeech::Verb,
            "5 1 TO_BEING",
            None,
            "be, exist",
        ));
        context.finish()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dictionary = dictionary();
        let found = dictionary.lookup("AQUIS");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, EntryId::new(0));
    }

    #[test]
    fn test_lookup_unknown_is_empty() {
        assert!(dictionary().lookup("ignis").is_empty());
    }

    #[test]
    fn test_lookup_english() {
        let dictionary = dictionary();
        let found = dictionary.lookup_english("exist");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, EntryId::new(1));
        assert!(dictionary.lookup_english("fire").is_empty());
    }

    #[test]
    fn test_paradigm_by_id() {
        let dictionary = dictionary();
        let paradigm = dictionary.paradigm(EntryId::new(1)).unwrap();
        assert!(paradigm.surface_forms().contains(&"estis"));
        assert!(dictionary.paradigm(EntryId::new(9)).is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let dictionary = dictionary();
        let json = dictionary.to_json().unwrap();
        let loaded = Dictionary::from_json(&json).unwrap();

        assert_eq!(loaded.entries(), dictionary.entries());
        assert_eq!(loaded.index(), dictionary.index());
        assert_eq!(loaded.metadata(), dictionary.metadata());
        assert_eq!(loaded.lookup("est").len(), 1);
    }

    #[test]
    fn test_dangling_index_rejected() {
        let mut artifact = dictionary().to_artifact();
        artifact.morph_index.insert("ghost".to_string(), vec![42]);
        assert!(matches!(
            Dictionary::from_artifact(artifact),
            Err(StoreError::InvalidArtifact(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dictionary.json");

        let dictionary = dictionary();
        dictionary.save(&path).unwrap();
        let loaded = Dictionary::load(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.to_json().unwrap(), dictionary.to_json().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dictionary::load("/nonexistent/dictionary.json");
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
