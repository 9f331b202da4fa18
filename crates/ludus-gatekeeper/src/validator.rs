//! Record validation logic

use std::fmt;

use ludus_domain::{is_placeholder, LexicalRecord, PartOfSpeech};

use crate::FilterConfig;

/// Result of record validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the record passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    /// Whether the record was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Record accepted
    Accepted,

    /// Record rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// The gloss contains a test or error marker
    GlossMarker(String),

    /// The gloss is empty
    EmptyGloss,

    /// No stem is a real stem
    AllPlaceholders,

    /// The first stem is a placeholder on a record that may not have one
    PlaceholderHead,

    /// A stem contains characters outside the basic Latin alphabet
    InvalidStem {
        /// The offending stem
        stem: String,
        /// Description of the issue
        issue: String,
    },

    /// A stem exceeds the configured length bound
    StemTooLong {
        /// The offending stem
        stem: String,
        /// Its length
        length: usize,
        /// Configured maximum
        max: usize,
    },
}

impl RejectionReason {
    /// Short stable name, used as a metrics key
    pub fn kind(&self) -> &'static str {
        match self {
            RejectionReason::GlossMarker(_) => "gloss_marker",
            RejectionReason::EmptyGloss => "empty_gloss",
            RejectionReason::AllPlaceholders => "all_placeholders",
            RejectionReason::PlaceholderHead => "placeholder_head",
            RejectionReason::InvalidStem { .. } => "invalid_stem",
            RejectionReason::StemTooLong { .. } => "stem_too_long",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::GlossMarker(marker) => {
                write!(f, "gloss contains marker '{}'", marker)
            }
            RejectionReason::EmptyGloss => write!(f, "gloss is empty"),
            RejectionReason::AllPlaceholders => write!(f, "every stem is a placeholder"),
            RejectionReason::PlaceholderHead => write!(f, "first stem is a placeholder"),
            RejectionReason::InvalidStem { stem, issue } => {
                write!(f, "stem '{}' {}", stem, issue)
            }
            RejectionReason::StemTooLong { stem, length, max } => {
                write!(f, "stem '{}' has {} characters (max {})", stem, length, max)
            }
        }
    }
}

/// The Gatekeeper filters records before the build
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: FilterConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(FilterConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Validate a record against the configured rules
    ///
    /// Pure predicate: the record is never modified and nothing is recorded.
    pub fn validate(&self, record: &LexicalRecord) -> ValidationResult {
        let mut reasons = Vec::new();

        // 1. Gloss markers
        if let Some(reason) = self.validate_gloss(record) {
            reasons.push(reason);
        }

        // 2. Placeholder structure
        if let Some(reason) = self.validate_placeholders(record) {
            reasons.push(reason);
        }

        // 3. Stem alphabet and length
        reasons.extend(self.validate_stems(record));

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        ValidationResult { status, reasons }
    }

    /// Check the gloss for test or error markers
    fn validate_gloss(&self, record: &LexicalRecord) -> Option<RejectionReason> {
        let gloss = record.gloss.to_lowercase();

        if self.config.require_gloss && gloss.trim().is_empty() {
            return Some(RejectionReason::EmptyGloss);
        }

        self.config
            .gloss_markers
            .iter()
            .find(|marker| gloss.contains(&marker.to_lowercase()))
            .map(|marker| RejectionReason::GlossMarker(marker.clone()))
    }

    /// Check that at least one stem is real and the head is allowed
    fn validate_placeholders(&self, record: &LexicalRecord) -> Option<RejectionReason> {
        if record.real_stems().next().is_none() {
            return Some(RejectionReason::AllPlaceholders);
        }

        let head_is_placeholder = record.stems.first().is_some_and(|stem| is_placeholder(stem));
        if !head_is_placeholder {
            return None;
        }

        let perfect_only = record.part_of_speech == PartOfSpeech::Verb
            && record.paradigm_code().flags.perfect_only;
        if perfect_only && self.config.allow_perfect_only_placeholder_head {
            return None;
        }

        Some(RejectionReason::PlaceholderHead)
    }

    /// Check every real stem for alphabet and length
    fn validate_stems(&self, record: &LexicalRecord) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();

        for stem in record.real_stems() {
            if !stem.chars().all(|c| c.is_ascii_alphabetic()) {
                reasons.push(RejectionReason::InvalidStem {
                    stem: stem.to_string(),
                    issue: "contains characters outside a-z".to_string(),
                });
                continue;
            }

            let length = stem.chars().count();
            if length > self.config.max_stem_length {
                reasons.push(RejectionReason::StemTooLong {
                    stem: stem.to_string(),
                    length,
                    max: self.config.max_stem_length,
                });
            }
        }

        reasons
    }
}
