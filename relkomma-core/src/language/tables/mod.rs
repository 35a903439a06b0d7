//! Runtime tables for the German lexicon
//!
//! All tables are read-only after construction and allocation-free
//! during lookup.

pub mod separator;
pub mod words;

pub use separator::SeparatorTable;
pub use words::{SurfacePattern, WordTable};

use crate::error::{CoreError, Result};
use crate::language::config::{LanguageConfig, Messages};
use crate::language::interface::Lexicon;

/// Compiled lexical tables of one language
#[derive(Debug, Clone)]
pub struct LanguageTables {
    code: String,
    separators: SeparatorTable,
    relative_pronouns: SurfacePattern,
    interrogative_pronouns: SurfacePattern,
    relative_adverbs: WordTable,
    infinitive_marker: String,
    neither: String,
    nor: String,
    comma: String,
    messages: Messages,
}

impl LanguageTables {
    /// Parse and compile a TOML language document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_str)?;
        Self::from_config(config)
    }

    /// Compile tables from an already parsed configuration
    pub fn from_config(config: LanguageConfig) -> Result<Self> {
        if config.separators.marks.is_empty() {
            return Err(CoreError::Config(format!(
                "language '{}' defines no separator marks",
                config.metadata.code
            )));
        }

        let marks = config
            .separators
            .marks
            .iter()
            .map(|mark| {
                let mut chars = mark.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(ch),
                    _ => Err(CoreError::Config(format!(
                        "separator mark '{mark}' must be a single character"
                    ))),
                }
            })
            .collect::<Result<Vec<char>>>()?;

        if config.clauses.infinitive_marker.is_empty() {
            return Err(CoreError::Config(
                "infinitive marker must not be empty".to_string(),
            ));
        }

        Ok(Self {
            code: config.metadata.code,
            separators: SeparatorTable::new(marks, config.separators.words),
            relative_pronouns: SurfacePattern::new(&config.pronouns.relative)?,
            interrogative_pronouns: SurfacePattern::new(&config.pronouns.interrogative)?,
            relative_adverbs: WordTable::new(config.clauses.relative_adverbs, false),
            infinitive_marker: config.clauses.infinitive_marker,
            neither: config.clauses.neither,
            nor: config.clauses.nor,
            comma: config.clauses.comma,
            messages: config.messages,
        })
    }

    /// Language code of these tables
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Rule texts of this language
    pub fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl Lexicon for LanguageTables {
    #[inline]
    fn is_separator(&self, text: &str) -> bool {
        self.separators.is_separator(text)
    }

    #[inline]
    fn is_relative_pronoun(&self, text: &str) -> bool {
        self.relative_pronouns.matches(text)
    }

    #[inline]
    fn is_interrogative_pronoun(&self, text: &str) -> bool {
        self.interrogative_pronouns.matches(text)
    }

    #[inline]
    fn is_relative_adverb(&self, text: &str) -> bool {
        self.relative_adverbs.contains(text)
    }

    fn infinitive_marker(&self) -> &str {
        &self.infinitive_marker
    }

    fn neither(&self) -> &str {
        &self.neither
    }

    fn nor(&self) -> &str {
        &self.nor
    }

    fn comma(&self) -> &str {
        &self.comma
    }
}
