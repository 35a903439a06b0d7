//! JSON input documents
//!
//! A document is an array of sentences as produced by an upstream tagger:
//!
//! ```json
//! [{"text": "Das Auto das ...", "tokens": [{"text": "Das", "start": 0, "end": 3, "tags": ["ART:DEF:NOM:SIN:NEU"]}]}]
//! ```
//!
//! `text` and the token offsets are optional. Missing offsets are computed
//! as if the tokens were joined by single spaces.

use crate::error::CliError;
use anyhow::{Context, Result};
use relkomma_core::{AnalyzedSentence, PosTag, Token};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenInput {
    pub text: String,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SentenceInput {
    #[serde(default)]
    pub text: Option<String>,
    pub tokens: Vec<TokenInput>,
}

impl SentenceInput {
    /// Convert into an analyzed sentence and its text
    pub fn into_sentence(self) -> Result<(String, AnalyzedSentence)> {
        let mut tokens = Vec::with_capacity(self.tokens.len());
        let mut next_offset = 0;

        for (index, token) in self.tokens.into_iter().enumerate() {
            let readings = token
                .tags
                .iter()
                .map(|tag| tag.parse::<PosTag>())
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("token {} ('{}')", index + 1, token.text))?;

            let start = token.start.unwrap_or(next_offset);
            let end = token
                .end
                .unwrap_or_else(|| start + token.text.chars().count());
            if end < start {
                return Err(CliError::InvalidInput(format!(
                    "token {} ('{}') ends at {end} before it starts at {start}",
                    index + 1,
                    token.text
                ))
                .into());
            }
            next_offset = end + 1;
            tokens.push(Token::new(token.text, start, end, readings));
        }

        let sentence = AnalyzedSentence::new(tokens);
        let text = self.text.unwrap_or_else(|| sentence.text());
        Ok((text, sentence))
    }
}
