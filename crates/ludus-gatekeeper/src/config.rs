//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

use crate::GatekeeperError;

/// Configuration for record filtering rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Gloss substrings that mark test or error rows (matched case-insensitively)
    pub gloss_markers: Vec<String>,

    /// Maximum length of a non-placeholder stem
    pub max_stem_length: usize,

    /// Accept perfect-only verbs whose present stems are placeholders
    pub allow_perfect_only_placeholder_head: bool,

    /// Reject records with an empty gloss
    pub require_gloss: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            gloss_markers: default_markers(),
            max_stem_length: 20,
            allow_perfect_only_placeholder_head: true,
            require_gloss: true,
        }
    }
}

impl FilterConfig {
    /// Create a permissive configuration (marker and alphabet checks only)
    pub fn permissive() -> Self {
        Self {
            gloss_markers: vec!["zzz".to_string(), "xxx".to_string()],
            max_stem_length: 40,
            allow_perfect_only_placeholder_head: true,
            require_gloss: false,
        }
    }

    /// Create a strict configuration (every record must be headed by a real stem)
    pub fn strict() -> Self {
        Self {
            gloss_markers: default_markers(),
            max_stem_length: 16,
            allow_perfect_only_placeholder_head: false,
            require_gloss: true,
        }
    }

    /// Select a preset by name (`default`, `strict`, `permissive`)
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "strict" => Some(Self::strict()),
            "permissive" => Some(Self::permissive()),
            _ => None,
        }
    }

    /// Load configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, GatekeeperError> {
        let config: Self = toml::from_str(text)?;
        config.validate().map_err(GatekeeperError::Config)?;
        Ok(config)
    }

    /// Save configuration to TOML text
    pub fn to_toml(&self) -> Result<String, GatekeeperError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_stem_length == 0 {
            return Err("max_stem_length must be greater than 0".to_string());
        }

        if self.gloss_markers.iter().any(|marker| marker.trim().is_empty()) {
            return Err("gloss_markers must not contain empty markers".to_string());
        }

        Ok(())
    }
}

fn default_markers() -> Vec<String> {
    ["zzz", "xxx", "(error for", "unknown meaning", "misspelling of", "test entry"]
        .iter()
        .map(|marker| marker.to_string())
        .collect()
}
