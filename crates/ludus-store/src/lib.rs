//! Ludus Store
//!
//! Builds, persists and serves the dictionary artifact.
//!
//! # Architecture
//!
//! ```text
//! RecordSource → BuildContext ─┬─ Gatekeeper (filter)
//!                              ├─ dedup map (merge/replace)
//!                              └─ MorphIndex (form → ids)
//!                     ↓ finish
//!                 Dictionary ── save/load ── JSON artifact
//! ```
//!
//! The build is a single sequential fold: each accepted record either
//! creates an entry, replaces a duplicate that has more placeholder stems
//! (repairing the index for that id), or is discarded. The finished
//! [`Dictionary`] is read-only.
//!
//! # Examples
//!
//! ```no_run
//! use ludus_extractor::{ExtractorConfig, RecordReader};
//! use ludus_gatekeeper::Gatekeeper;
//! use ludus_store::{build_dictionary, BuildConfig};
//!
//! let mut reader = RecordReader::open("DICTLINE.GEN", ExtractorConfig::default()).unwrap();
//! let dictionary =
//!     build_dictionary(&mut reader, BuildConfig::default(), Gatekeeper::default_config()).unwrap();
//! dictionary.save("dictionary.json").unwrap();
//! ```

#![warn(missing_docs)]

mod artifact;
mod builder;
mod config;
mod dictionary;
mod error;
mod gloss_index;
mod index;
mod metrics;

pub use artifact::{
    entry_from_dto, entry_to_dto, index_from_dto, index_to_dto, Artifact, ArtifactMetadata,
    EntryDto,
};
pub use builder::{build_dictionary, BuildContext, IngestOutcome};
pub use config::BuildConfig;
pub use dictionary::Dictionary;
pub use error::StoreError;
pub use gloss_index::{gloss_keywords, GlossIndex};
pub use index::{normalize_form, MorphIndex};
pub use metrics::BuildMetrics;
