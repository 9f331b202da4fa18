//! Build pass: deduplication, merging and indexing
//!
//! The whole pass is one sequential fold over the record stream. All
//! mutable state lives in a [`BuildContext`] owned by the caller.

use std::collections::{HashMap, HashSet};
use std::fmt;

use ludus_domain::traits::RecordSource;
use ludus_domain::{DictionaryEntry, EntryId, LexicalRecord};
use ludus_gatekeeper::{Gatekeeper, RejectionReason};
use ludus_morph::{citation_form, search_forms};
use tracing::{debug, info};

use crate::index::normalize_form;
use crate::{ArtifactMetadata, BuildConfig, BuildMetrics, Dictionary, MorphIndex, StoreError};

/// What happened to one record
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// A new entry was created
    Added(EntryId),

    /// The record replaced a duplicate with more placeholders
    Replaced(EntryId),

    /// The record duplicated an entry at least as complete and was dropped
    Discarded(EntryId),

    /// The record failed the filter
    Rejected(Vec<RejectionReason>),
}

/// Entry table, index and duplicate map of a build in progress
pub struct BuildContext {
    config: BuildConfig,
    gatekeeper: Gatekeeper,
    entries: Vec<DictionaryEntry>,
    index: MorphIndex,
    keys: HashMap<String, EntryId>,
    metrics: BuildMetrics,
}

impl fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("entries", &self.entries.len())
            .field("forms", &self.index.len())
            .field("processed", &self.metrics.processed)
            .finish()
    }
}

impl BuildContext {
    /// Create an empty build
    pub fn new(config: BuildConfig, gatekeeper: Gatekeeper) -> Self {
        Self {
            config,
            gatekeeper,
            entries: Vec::new(),
            index: MorphIndex::new(),
            keys: HashMap::new(),
            metrics: BuildMetrics::new(),
        }
    }

    /// Create an empty build with default configuration and filter
    pub fn with_defaults() -> Self {
        Self::new(BuildConfig::default(), Gatekeeper::default_config())
    }

    /// Filter, deduplicate and index one record
    pub fn ingest(&mut self, record: LexicalRecord) -> IngestOutcome {
        self.metrics.record_processed();

        let validation = self.gatekeeper.validate(&record);
        if !validation.is_accepted() {
            self.metrics.record_rejection(&validation.reasons);
            return IngestOutcome::Rejected(validation.reasons);
        }
        self.metrics.record_accepted();

        let key = record.dedup_key();
        match self.keys.get(&key).copied() {
            None => {
                let id = self.add(record);
                self.keys.insert(key, id);
                self.metrics.record_added();
                IngestOutcome::Added(id)
            }
            Some(id) => {
                let stored = self.entries[id.index()].record.placeholder_count();
                if record.placeholder_count() < stored {
                    self.replace(id, record);
                    self.metrics.record_replaced();
                    IngestOutcome::Replaced(id)
                } else {
                    self.metrics.record_discarded();
                    IngestOutcome::Discarded(id)
                }
            }
        }
    }

    /// Drain a record source through [`ingest`](Self::ingest)
    ///
    /// Only a failure of the source itself aborts the build.
    pub fn ingest_source<S>(&mut self, source: &mut S) -> Result<(), StoreError>
    where
        S: RecordSource,
        S::Error: fmt::Display,
    {
        info!(source = %self.config.source_label, "Build started");

        while let Some(record) = source
            .next_record()
            .map_err(|e| StoreError::Source(e.to_string()))?
        {
            self.ingest(record);

            let interval = self.config.progress_interval;
            if interval > 0 && self.metrics.processed % interval == 0 {
                info!(
                    processed = self.metrics.processed,
                    entries = self.entries.len(),
                    forms = self.index.len(),
                    "Build progress"
                );
            }
        }

        self.metrics.set_malformed(source.malformed_count());
        Ok(())
    }

    fn add(&mut self, record: LexicalRecord) -> EntryId {
        let id = EntryId::new(self.entries.len() as u32);
        let forms = search_forms(&record);
        self.index.insert_forms(id, forms.iter().map(String::as_str));

        let citation = citation_form(&record);
        self.entries.push(DictionaryEntry::new(id, record, citation));
        id
    }

    /// Swap in a better record under the same id and repair the index
    fn replace(&mut self, id: EntryId, record: LexicalRecord) {
        let old_forms = search_forms(&self.entries[id.index()].record);
        let new_forms = search_forms(&record);

        let produced: HashSet<String> = new_forms.iter().map(|form| normalize_form(form)).collect();
        let stale = old_forms
            .iter()
            .map(String::as_str)
            .filter(|form| !produced.contains(&normalize_form(form)));
        let removed = self.index.remove_forms(id, stale);
        let added = self.index.insert_forms(id, new_forms.iter().map(String::as_str));

        let citation = citation_form(&record);
        debug!(
            id = id.value(),
            old = %self.entries[id.index()].citation_form,
            new = %citation,
            removed,
            added,
            "Replaced duplicate entry"
        );
        self.entries[id.index()] = DictionaryEntry::new(id, record, citation);
    }

    /// Entries so far, in id order
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Index so far
    pub fn index(&self) -> &MorphIndex {
        &self.index
    }

    /// Counts so far
    pub fn metrics(&self) -> &BuildMetrics {
        &self.metrics
    }

    /// Close the build and assemble the read-only dictionary
    pub fn finish(self) -> Dictionary {
        let metadata = ArtifactMetadata::from_build(
            &self.config,
            &self.metrics,
            self.entries.len(),
            self.index.len(),
        );

        info!(
            entries = metadata.total_entries,
            forms = metadata.total_forms,
            processed = metadata.records_processed,
            rejected = metadata.records_rejected,
            replaced = metadata.duplicates_replaced,
            discarded = metadata.duplicates_discarded,
            "Build finished"
        );

        Dictionary::new(metadata, self.entries, self.index)
    }

    /// Close the build, returning the metrics alongside the dictionary
    pub fn finish_with_metrics(self) -> (Dictionary, BuildMetrics) {
        let metrics = self.metrics.clone();
        (self.finish(), metrics)
    }
}

/// Run a whole build over a record source
pub fn build_dictionary<S>(
    source: &mut S,
    config: BuildConfig,
    gatekeeper: Gatekeeper,
) -> Result<Dictionary, StoreError>
where
    S: RecordSource,
    S::Error: fmt::Display,
{
    let mut context = BuildContext::new(config, gatekeeper);
    context.ingest_source(source)?;
    Ok(context.finish())
}
