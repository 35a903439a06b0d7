//! Core error types
//!
//! Detection itself never fails; errors only arise while parsing tags,
//! loading language tables or building a configuration.

use thiserror::Error;

/// Errors raised while constructing detector inputs or configuration
#[derive(Error, Debug)]
pub enum CoreError {
    /// A part-of-speech tag could not be parsed
    #[error("invalid tag '{tag}': {reason}")]
    InvalidTag {
        /// The offending tag string
        tag: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration or language table is inconsistent
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML document could not be deserialized
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A pattern in the language tables failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tag_display() {
        let error = CoreError::InvalidTag {
            tag: "".to_string(),
            reason: "empty tag".to_string(),
        };
        assert_eq!(error.to_string(), "invalid tag '': empty tag");
    }

    #[test]
    fn test_config_error_display() {
        let error = CoreError::Config("message must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "configuration error: message must not be empty"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("[rule");
        let error: CoreError = parsed.unwrap_err().into();
        assert!(error.to_string().starts_with("TOML error:"));
    }
}
