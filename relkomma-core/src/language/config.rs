//! Configuration structures for language tables
//!
//! This module defines the TOML schema of `configs/*.toml`.

use serde::{Deserialize, Serialize};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub separators: Separators,
    pub pronouns: Pronouns,
    pub clauses: Clauses,
    pub messages: Messages,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Separator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Separators {
    pub marks: Vec<String>,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Surface patterns of pronoun candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pronouns {
    pub relative: String,
    pub interrogative: String,
}

/// Function words the clause heuristics look for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clauses {
    #[serde(default)]
    pub relative_adverbs: Vec<String>,
    pub infinitive_marker: String,
    pub neither: String,
    pub nor: String,
    #[serde(default = "default_comma")]
    pub comma: String,
}

fn default_comma() -> String {
    ",".to_string()
}

/// Rule texts shown to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    pub category_id: String,
    pub category_name: String,
    pub message: String,
    pub before_description: String,
    pub after_description: String,
}
