//! Configuration management for the ATS analyzer

use crate::error::{AtsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

/// Relative weight of each category in the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub formatting_weight: f32,
    pub sections_weight: f32,
    pub keywords_weight: f32,
    pub contact_weight: f32,
    pub bullets_weight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Upper bound on keywords pulled from a job posting
    pub max_keywords: usize,
    /// A term must occur at least this often to count as a keyword
    pub min_keyword_frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            formatting_weight: 0.20,
            sections_weight: 0.20,
            keywords_weight: 0.30,
            contact_weight: 0.15,
            bullets_weight: 0.15,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_keywords: 20,
            min_keyword_frequency: 2,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            matching: MatchingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load the user config, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AtsError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-analyzer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("formatting_weight", self.scoring.formatting_weight),
            ("sections_weight", self.scoring.sections_weight),
            ("keywords_weight", self.scoring.keywords_weight),
            ("contact_weight", self.scoring.contact_weight),
            ("bullets_weight", self.scoring.bullets_weight),
        ];

        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AtsError::Configuration(format!(
                    "scoring.{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        let total: f32 = weights.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(AtsError::Configuration(
                "At least one scoring weight must be positive".to_string(),
            ));
        }

        if self.matching.max_keywords == 0 {
            return Err(AtsError::Configuration(
                "matching.max_keywords must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_weights_sum_to_one() {
        let scoring = ScoringConfig::default();
        let total = scoring.formatting_weight
            + scoring.sections_weight
            + scoring.keywords_weight
            + scoring.contact_weight
            + scoring.bullets_weight;
        assert!((total - 1.0).abs() < 1e-6);
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.matching.max_keywords = 10;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut config = Config::default();
        config.scoring.bullets_weight = -0.1;
        assert!(matches!(config.validate(), Err(AtsError::Configuration(_))));
    }

    #[test]
    fn test_rejects_all_zero_weights() {
        let mut config = Config::default();
        config.scoring = ScoringConfig {
            formatting_weight: 0.0,
            sections_weight: 0.0,
            keywords_weight: 0.0,
            contact_weight: 0.0,
            bullets_weight: 0.0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scoring = 12").unwrap();

        assert!(matches!(Config::load_from(&path), Err(AtsError::Configuration(_))));
    }
}
