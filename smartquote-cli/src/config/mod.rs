//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use smartquote_core::Language;
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;

        if config.conversion.max_restore_passes == 0 {
            return Err(CliError::ConfigError(
                "max_restore_passes must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(config)
    }
}

/// Language selection for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LanguageChoice {
    /// Detect per file (frontmatter, then marker words)
    #[default]
    Auto,
    /// German quotes for every file
    #[serde(alias = "de")]
    #[value(alias = "de")]
    German,
    /// English quotes for every file
    #[serde(alias = "en")]
    #[value(alias = "en")]
    English,
}

impl LanguageChoice {
    /// Forced language, `None` for auto detection
    pub fn forced(&self) -> Option<Language> {
        match self {
            LanguageChoice::Auto => None,
            LanguageChoice::German => Some(Language::German),
            LanguageChoice::English => Some(Language::English),
        }
    }
}

/// Status report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One status line per file
    #[default]
    Text,
    /// JSON array of file reports
    Json,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConversionConfig {
    /// Language selection
    pub language: LanguageChoice,

    /// Bound on placeholder restoration passes per line
    pub max_restore_passes: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            language: LanguageChoice::Auto,
            max_restore_passes: 32,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format
    pub format: OutputFormat,
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Process files concurrently
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}
