//! Ludus Extractor
//!
//! Loads lexical records from a fixed-width lexicon file.
//!
//! # Overview
//!
//! Each lexicon line carries a stem field, a part-of-speech and paradigm-code
//! field, and an English gloss at fixed column offsets. The extractor slices
//! those columns into [`LexicalRecord`](ludus_domain::LexicalRecord) values
//! and serves them through the domain [`RecordSource`](ludus_domain::traits::RecordSource)
//! trait, ahead of which it can place a hand-curated list of priority records.
//!
//! # Architecture
//!
//! ```text
//! lexicon file → RecordReader → LexicalRecord → Gatekeeper → build
//!                     ↑
//!              priority records
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use ludus_domain::traits::RecordSource;
//! use ludus_extractor::{priority_records, ExtractorConfig, RecordReader};
//!
//! # fn example() -> Result<(), ludus_extractor::ExtractorError> {
//! let mut reader = RecordReader::open("DICTLINE.GEN", ExtractorConfig::default())?
//!     .with_priority(priority_records());
//!
//! while let Some(record) = reader.next_record()? {
//!     println!("{} ({})", record.main_stem(), record.part_of_speech);
//! }
//! println!("Skipped {} malformed lines", reader.malformed_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod priority;
mod reader;
mod types;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use parser::{clean_gloss, parse_line};
pub use priority::priority_records;
pub use reader::RecordReader;
pub use types::MalformedLine;
