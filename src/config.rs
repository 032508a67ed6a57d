//! Configuration management for resume-ready

use crate::error::{Result, ResumeReadyError};
use crate::processing::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Tier used when `--location` is not given.
    pub default_location_tier: String,
    /// Merged into the built-in vocabulary at startup.
    #[serde(default)]
    pub extra_technical_terms: Vec<String>,
    #[serde(default)]
    pub extra_soft_skill_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Text,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                default_location_tier: "standard".to_string(),
                extra_technical_terms: Vec::new(),
                extra_soft_skill_terms: Vec::new(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Self::reset(&config_path)
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeReadyError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ResumeReadyError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeReadyError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Overwrite `path` with defaults without reading it, so a corrupt file
    /// can always be recovered.
    pub fn reset(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ready")
            .join("config.toml")
    }

    /// The vocabulary for this run: built-in terms plus configured extras.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::with_extra_terms(
            &self.analysis.extra_technical_terms,
            &self.analysis.extra_soft_skill_terms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.analysis.default_location_tier = "remote".to_string();
        config.analysis.extra_technical_terms = vec!["elixir".to_string()];
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.vocabulary().is_technical("elixir"));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ResumeReadyError::Configuration(_))));
    }

    #[test]
    fn test_extra_terms_default_to_empty() {
        let toml = r#"
            [analysis]
            default_location_tier = "high-cost"

            [output]
            format = "Json"
            detailed = true
            color_output = false
            pretty_json = false
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.analysis.extra_technical_terms.is_empty());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.vocabulary(), Vocabulary::default());
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeReadyError::Configuration(_))
        ));
    }

    #[test]
    fn test_reset_recovers_a_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis\nbroken").unwrap();
        assert!(Config::load_from(&path).is_err());

        let config = Config::reset(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
