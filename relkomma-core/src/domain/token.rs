//! Tagged tokens and sentences

use super::tag::PosTag;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Most tokens carry only a handful of readings
pub type Readings = SmallVec<[PosTag; 4]>;

/// A token produced by the upstream tokenizer and tagger
///
/// Offsets are character offsets into the sentence text; `end` is
/// exclusive. A token without readings is "tag unknown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
    #[serde(default, rename = "tags")]
    readings: Readings,
}

impl Token {
    /// Create a new token
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        readings: impl IntoIterator<Item = PosTag>,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            readings: readings.into_iter().collect(),
        }
    }

    /// The synthetic token placed at index 0 of every sentence
    pub fn sentence_start() -> Self {
        Self::new("", 0, 0, [PosTag::sentence_start()])
    }

    pub fn readings(&self) -> &[PosTag] {
        &self.readings
    }

    /// Does any reading satisfy the predicate?
    #[inline]
    pub fn has(&self, predicate: impl Fn(&PosTag) -> bool) -> bool {
        self.readings.iter().any(predicate)
    }

    /// True when the tagger produced no reading at all
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.readings.is_empty()
    }

    #[inline]
    pub fn is_sentence_start(&self) -> bool {
        self.has(|t| t.pos == super::tag::PartOfSpeech::SentenceStart)
    }

    fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }
}

/// One tagged sentence
///
/// Index 0 always holds the synthetic sentence-start token, so the first
/// real token sits at index 1. Whitespace-only tokens are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedSentence {
    tokens: Vec<Token>,
}

impl AnalyzedSentence {
    /// Build a sentence from tagger output
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut all = vec![Token::sentence_start()];
        all.extend(
            tokens
                .into_iter()
                .filter(|t| !t.is_whitespace() && !t.is_sentence_start()),
        );
        Self { tokens: all }
    }

    /// Build a sentence from `(word, tags)` pairs joined by single spaces
    ///
    /// ```
    /// use relkomma_core::AnalyzedSentence;
    ///
    /// let sentence = AnalyzedSentence::from_tagged_words(&[
    ///     ("Das", &["ART:DEF:NOM:SIN:NEU"][..]),
    ///     ("Auto", &["SUB:NOM:SIN:NEU"][..]),
    /// ])
    /// .unwrap();
    /// assert_eq!(sentence.len(), 3);
    /// assert_eq!(sentence.text(), "Das Auto");
    /// ```
    pub fn from_tagged_words(words: &[(&str, &[&str])]) -> Result<Self> {
        let mut tokens = Vec::with_capacity(words.len());
        let mut offset = 0;
        for (word, tags) in words {
            let readings = tags
                .iter()
                .map(|t| t.parse::<PosTag>())
                .collect::<Result<Readings>>()?;
            let len = word.chars().count();
            tokens.push(Token::new(*word, offset, offset + len, readings));
            offset += len + 1;
        }
        Ok(Self::new(tokens))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Bounds-checked token access
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens including the sentence-start token
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the sentence holds nothing but the sentence-start token
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    /// Sentence text rebuilt from token offsets, gaps filled with spaces
    pub fn text(&self) -> String {
        let mut text = String::new();
        let mut written = 0;
        for token in self.tokens.iter().skip(1) {
            if token.start > written {
                text.extend(std::iter::repeat(' ').take(token.start - written));
                written = token.start;
            }
            if token.start >= written {
                text.push_str(&token.text);
                written += token.text.chars().count();
            }
        }
        text
    }
}
