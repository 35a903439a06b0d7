//! Rule configuration

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the relative clause the rule checks
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Missing comma before the relative pronoun
    #[default]
    Before,
    /// Missing comma after the relative clause (reports nothing yet)
    After,
}

impl FromStr for Variant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "before" => Ok(Variant::Before),
            "after" => Ok(Variant::After),
            other => Err(CoreError::Config(format!(
                "unknown variant '{other}', expected 'before' or 'after'"
            ))),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Before => "before",
            Variant::After => "after",
        })
    }
}

/// Rule configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) variant: Variant,
    pub(crate) message: Option<String>,
}

/// `[rule]` table of a configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    rule: RuleSection,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load a configuration from a TOML document with a `[rule]` table
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(toml_str)?;
        Self::from_section(&file.rule)
    }

    /// Build a configuration from an already parsed `[rule]` table
    pub fn from_section(section: &RuleSection) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(variant) = section.variant {
            builder = builder.variant(variant);
        }
        if let Some(message) = &section.message {
            builder = builder.message(message.clone());
        }
        builder.build()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Message override; `None` uses the language default
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn validate(&self) -> Result<()> {
        if self.message.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err(CoreError::Config("message must not be empty".into()));
        }
        Ok(())
    }
}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    variant: Option<Variant>,
    message: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the after-clause variant when `after` is true
    pub fn after(self, after: bool) -> Self {
        self.variant(if after { Variant::After } else { Variant::Before })
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Override the advisory message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let config = Config {
            variant: self.variant.unwrap_or_default(),
            message: self.message,
        };
        config.validate()?;
        Ok(config)
    }
}
