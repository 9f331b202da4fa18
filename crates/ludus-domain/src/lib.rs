//! Ludus Domain Layer
//!
//! This crate contains the core domain model for the Ludus lexicon engine.
//! It has ZERO external dependencies and defines the fundamental concepts,
//! value objects, and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Lexical record**: one stem set plus a grammatical code per headword
//! - **Word class**: the closed tagged union every rule table matches on
//! - **Lexeme**: interned identity of an irregular headword with hand-written forms
//! - **Dictionary entry**: an accepted record with a stable id and citation form
//! - **Paradigm**: the complete table of inflected forms for one entry
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure domain logic only
//! - Loading, synthesis, and persistence live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod code;
pub mod entry;
pub mod lexeme;
pub mod paradigm;
pub mod part_of_speech;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use class::{
    AdjectiveClass, Conjugation, Declension, NounClass, Valency, VerbClass, VerbKind, WordClass,
};
pub use code::{CodeFlags, ParadigmCode, RECOGNIZED_FLAGS};
pub use entry::{DictionaryEntry, EntryId};
pub use lexeme::Lexeme;
pub use paradigm::{
    Case, CaseForms, DeclensionColumn, Gap, GapScope, GenderGroup, Mood, NonFinite,
    NonFiniteForm, Number, Paradigm, ParadigmTable, Person, PersonForms, Tense, TenseRow,
    VerbTable, Voice,
};
pub use part_of_speech::{Gender, PartOfSpeech};
pub use record::{is_placeholder, LexicalRecord, PLACEHOLDER_STEMS};
