//! Serialized dictionary artifact
//!
//! Handles conversion between the domain types and the JSON shape the
//! display layer loads at startup.

use std::collections::BTreeMap;

use ludus_domain::{DictionaryEntry, EntryId, Gender, LexicalRecord, PartOfSpeech};
use serde::{Deserialize, Serialize};

use crate::{BuildConfig, BuildMetrics, MorphIndex, StoreError};

/// Counts describing one build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMetadata {
    /// Lexicon the artifact was built from
    pub source: String,

    /// Artifact version
    pub version: String,

    /// Number of entries
    pub total_entries: usize,

    /// Number of distinct indexed forms
    pub total_forms: usize,

    /// Records offered to the build
    pub records_processed: usize,

    /// Records dropped by the filter
    pub records_rejected: usize,

    /// Duplicates that replaced a stored entry
    pub duplicates_replaced: usize,

    /// Duplicates that were dropped
    pub duplicates_discarded: usize,
}

impl ArtifactMetadata {
    /// Metadata for a finished build
    pub fn from_build(
        config: &BuildConfig,
        metrics: &BuildMetrics,
        total_entries: usize,
        total_forms: usize,
    ) -> Self {
        Self {
            source: config.source_label.clone(),
            version: config.version.clone(),
            total_entries,
            total_forms,
            records_processed: metrics.processed,
            records_rejected: metrics.rejected,
            duplicates_replaced: metrics.replaced,
            duplicates_discarded: metrics.discarded,
        }
    }
}

/// One serialized entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDto {
    /// Entry id
    pub id: u32,

    /// Every stem, placeholders included
    pub stems: Vec<String>,

    /// First real stem
    pub main_stem: String,

    /// Lexicon part-of-speech tag
    pub part_of_speech: String,

    /// Human-readable part of speech
    pub part_of_speech_display: String,

    /// Paradigm-class code
    pub code: String,

    /// Lexicon gender tag
    pub gender: Option<String>,

    /// English gloss
    pub meaning: String,

    /// Citation form
    pub citation_form: String,
}

/// The whole artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Build counts
    pub metadata: ArtifactMetadata,

    /// Entries in id order
    pub entries: Vec<EntryDto>,

    /// Surface form to entry ids
    pub morph_index: BTreeMap<String, Vec<u32>>,
}

/// Convert a domain entry to its serialized form
pub fn entry_to_dto(entry: &DictionaryEntry) -> EntryDto {
    let record = &entry.record;
    EntryDto {
        id: entry.id.value(),
        stems: record.stems.clone(),
        main_stem: record.main_stem().to_string(),
        part_of_speech: record.part_of_speech.tag().to_string(),
        part_of_speech_display: record.part_of_speech.display_name().to_string(),
        code: record.code.clone(),
        gender: record.gender.map(|gender| gender.tag().to_string()),
        meaning: record.gloss.clone(),
        citation_form: entry.citation_form.clone(),
    }
}

/// Convert a serialized entry back to the domain
pub fn entry_from_dto(dto: EntryDto) -> Result<DictionaryEntry, StoreError> {
    let part_of_speech = PartOfSpeech::parse(&dto.part_of_speech).ok_or_else(|| {
        StoreError::InvalidArtifact(format!(
            "entry {} has unknown part of speech '{}'",
            dto.id, dto.part_of_speech
        ))
    })?;

    let gender = match dto.gender.as_deref() {
        None => None,
        Some(tag) => Some(Gender::parse(tag).ok_or_else(|| {
            StoreError::InvalidArtifact(format!("entry {} has unknown gender '{}'", dto.id, tag))
        })?),
    };

    if dto.stems.is_empty() {
        return Err(StoreError::InvalidArtifact(format!(
            "entry {} has no stems",
            dto.id
        )));
    }

    let record = LexicalRecord::new(dto.stems, part_of_speech, dto.code, gender, dto.meaning);
    Ok(DictionaryEntry::new(
        EntryId::new(dto.id),
        record,
        dto.citation_form,
    ))
}

/// Convert the index to its serialized form
pub fn index_to_dto(index: &MorphIndex) -> BTreeMap<String, Vec<u32>> {
    index
        .iter()
        .map(|(form, ids)| (form.to_string(), ids.iter().map(EntryId::value).collect()))
        .collect()
}

/// Convert a serialized index back to the domain
pub fn index_from_dto(index: BTreeMap<String, Vec<u32>>) -> MorphIndex {
    index
        .into_iter()
        .map(|(form, ids)| (form, ids.into_iter().map(EntryId::new).collect()))
        .collect()
}
