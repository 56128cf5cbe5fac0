//! Configuration module
//!
//! CLI flags always win; the config file only supplies defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ProcessingConfig {
    /// Default language for segmentation and tokenization
    pub default_language: String,

    /// Drop punctuation tokens before counting
    pub ignore_punctuation: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_language: "chinese".to_string(),
            ignore_punctuation: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Root directory for grouped results
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("counting_result"),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_tool_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.default_language, "chinese");
        assert!(!config.processing.ignore_punctuation);
        assert_eq!(config.output.directory, PathBuf::from("counting_result"));
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("juzi.toml");
        fs::write(
            &path,
            "[processing]\ndefault_language = \"english\"\nignore_punctuation = true\n",
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.processing.default_language, "english");
        assert!(config.processing.ignore_punctuation);
        assert_eq!(config.output.directory, PathBuf::from("counting_result"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "not toml [").unwrap();

        assert!(CliConfig::load(&path).is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = CliConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(
            parsed.processing.default_language,
            config.processing.default_language
        );
    }
}
