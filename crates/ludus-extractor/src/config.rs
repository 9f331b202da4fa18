//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Column layout of the fixed-width lexicon and loading options
///
/// Offsets are character columns, zero-based, end-exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// End of the stem field
    pub stems_end: usize,

    /// Start of the part-of-speech and paradigm-code field
    pub code_start: usize,

    /// End of the part-of-speech and paradigm-code field
    pub code_end: usize,

    /// Start of the gloss field (runs to end of line)
    pub gloss_start: usize,

    /// Lines shorter than this are malformed
    pub min_line_length: usize,

    /// Serve the hand-curated priority records ahead of the file
    pub include_priority_records: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            stems_end: 75,
            code_start: 76,
            code_end: 100,
            gloss_start: 110,
            min_line_length: 110,
            include_priority_records: true,
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.stems_end == 0 {
            return Err("stems_end must be greater than 0".to_string());
        }
        if self.code_start < self.stems_end {
            return Err("code_start cannot overlap the stem field".to_string());
        }
        if self.code_end <= self.code_start {
            return Err("code_end must be greater than code_start".to_string());
        }
        if self.gloss_start < self.code_end {
            return Err("gloss_start cannot overlap the code field".to_string());
        }
        if self.min_line_length < self.gloss_start {
            return Err("min_line_length cannot be shorter than gloss_start".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
