//! Ludus Gatekeeper
//!
//! Filters lexical records before they reach the build.
//!
//! The Gatekeeper rejects:
//! - Records whose gloss carries a test or error marker
//! - Records whose stems are all placeholders
//! - Records with stems outside the basic Latin alphabet or over-long stems
//! - Records headed by a placeholder (except perfect-only verbs, if allowed)
//!
//! # Examples
//!
//! ```
//! use ludus_domain::{LexicalRecord, PartOfSpeech};
//! use ludus_gatekeeper::{FilterConfig, Gatekeeper};
//!
//! let gatekeeper = Gatekeeper::new(FilterConfig::default());
//! let record = LexicalRecord::new(vec!["aqu".into()], PartOfSpeech::Noun, "1 1", None, "water");
//! assert!(gatekeeper.validate(&record).is_accepted());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::FilterConfig;
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, RejectionReason, ValidationResult, ValidationStatus};
