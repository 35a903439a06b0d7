//! Output formatting module

use anyhow::Result;
use relkomma_core::RuleMatch;
use serde::Serialize;

/// Check result for one sentence
#[derive(Debug, Clone, Serialize)]
pub struct SentenceReport {
    /// Input file the sentence came from
    pub file: String,
    /// 1-based position of the sentence in its file
    pub sentence: usize,
    /// Sentence text the offsets refer to
    #[serde(skip)]
    pub text: String,
    pub matches: Vec<RuleMatch>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result of a single sentence
    fn format_sentence(&mut self, report: &SentenceReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
