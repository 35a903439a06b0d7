//! Configuration module

use anyhow::{Context, Result};
use relkomma_core::{Config, RuleSection};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Rule configuration, shared with the library
    #[serde(default)]
    pub rule: RuleSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Library configuration for the `[rule]` table
    pub fn rule_config(&self) -> Result<Config> {
        Ok(Config::from_section(&self.rule)?)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}
