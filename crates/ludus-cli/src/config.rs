//! Configuration management for the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use ludus_gatekeeper::FilterConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed-width lexicon to build from
    #[serde(default = "default_lexicon_path")]
    pub lexicon_path: PathBuf,

    /// Dictionary artifact to write and read
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Record filter preset (`default`, `strict`, `permissive`)
    #[serde(default = "default_filter")]
    pub filter: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Directory holding the config file, history and default artifact.
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".ludus"))
        .unwrap_or_else(|| PathBuf::from(".ludus"))
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".ludus").join("config.toml"))
    }

    /// Load configuration from the default file or create default.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check settings that serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.filter_config().map(|_| ())
    }

    /// Resolve the configured filter preset.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        FilterConfig::preset(&self.settings.filter).ok_or_else(|| {
            CliError::Config(format!("Unknown filter preset '{}'", self.settings.filter))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_path: default_lexicon_path(),
            artifact_path: default_artifact_path(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
            filter: default_filter(),
        }
    }
}

fn default_lexicon_path() -> PathBuf {
    PathBuf::from("DICTLINE.GEN")
}

fn default_artifact_path() -> PathBuf {
    data_dir().join("dictionary.json")
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

fn default_filter() -> String {
    "default".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.lexicon_path, PathBuf::from("DICTLINE.GEN"));
        assert!(config.artifact_path.ends_with("dictionary.json"));
        assert!(config.settings.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.settings.filter = "strict".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!loaded.filter_config().unwrap().allow_perfect_only_placeholder_head);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "lexicon_path = \"lexicon.txt\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.lexicon_path, PathBuf::from("lexicon.txt"));
        assert_eq!(loaded.settings.history_size, 1000);
    }

    #[test]
    fn test_unknown_filter_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nfilter = \"lenient\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
    }
}
