//! Ludus Morphology
//!
//! Turns lexical records into strings: the citation form shown in the
//! dictionary, the set of surface forms a reader might type, and the full
//! paradigm table shown on demand.
//!
//! All three are pure, total functions. Unrecognized paradigm codes fall
//! back to a minimal default instead of failing, and irregular headwords
//! are served from a static table keyed by [`Lexeme`](ludus_domain::Lexeme).
//!
//! # Examples
//!
//! ```
//! use ludus_domain::{LexicalRecord, PartOfSpeech};
//! use ludus_morph::{citation_form, search_forms};
//!
//! let record = LexicalRecord::new(vec!["aqu".into()], PartOfSpeech::Noun, "1", None, "water");
//! assert_eq!(citation_form(&record), "aqua, aquae");
//! assert!(search_forms(&record).contains("aquarum"));
//! ```

#![warn(missing_docs)]

mod citation;
mod endings;
mod forms;
mod irregular;
mod paradigm;
mod stems;

pub use citation::{citation_form, strip_placeholders};
pub use forms::{search_forms, SearchForms};
pub use paradigm::{full_paradigm, paradigm_for};
pub use stems::{third_conjugation_stems, ThirdConjugationStems};
