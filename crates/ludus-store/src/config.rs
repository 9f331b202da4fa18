//! Configuration for a build

use serde::{Deserialize, Serialize};

/// Options for one build pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Log progress every this many records (0 disables progress logging)
    pub progress_interval: usize,

    /// Label recorded as the artifact source, usually the lexicon file name
    pub source_label: String,

    /// Artifact version string
    pub version: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            progress_interval: 5000,
            source_label: "DICTLINE.GEN".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl BuildConfig {
    /// Set the source label
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = label.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.source_label.trim().is_empty() {
            return Err("source_label cannot be empty".to_string());
        }
        if self.version.trim().is_empty() {
            return Err("version cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BuildConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.progress_interval, 5000);
    }

    #[test]
    fn test_empty_label_invalid() {
        let config = BuildConfig::default().with_source_label("  ");
        assert!(config.validate().is_err());
    }
}
