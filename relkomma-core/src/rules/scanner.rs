//! Separator scanning and shared token access for the clause heuristics

use crate::domain::{AnalyzedSentence, PosTag, Span, Token};
use crate::language::Lexicon;

/// Read-only view of one sentence used by every detection stage
///
/// All index accessors are bounds-checked: asking about a position outside
/// the sentence answers `false`/`None` instead of panicking.
#[derive(Clone, Copy)]
pub struct ClauseScanner<'a> {
    pub(crate) lexicon: &'a dyn Lexicon,
    pub(crate) tokens: &'a [Token],
}

impl<'a> ClauseScanner<'a> {
    pub fn new(lexicon: &'a dyn Lexicon, sentence: &'a AnalyzedSentence) -> Self {
        Self {
            lexicon,
            tokens: sentence.tokens(),
        }
    }

    /// Number of tokens including the sentence-start token
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn token(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(n)
    }

    /// Does token `n` carry a reading satisfying `predicate`?
    #[inline]
    pub fn has(&self, n: usize, predicate: impl Fn(&PosTag) -> bool) -> bool {
        self.token(n).is_some_and(|t| t.has(predicate))
    }

    #[inline]
    pub(crate) fn text_is(&self, n: usize, word: &str) -> bool {
        self.token(n).is_some_and(|t| t.text == word)
    }

    #[inline]
    pub fn is_separator(&self, n: usize) -> bool {
        self.token(n)
            .is_some_and(|t| self.lexicon.is_separator(&t.text))
    }

    /// Index of the first separator at or after `start`
    ///
    /// Without a separator the final token acts as terminator, so the result
    /// lies in `[start, len - 1]` whenever `start < len`.
    pub fn next_separator(&self, start: usize) -> usize {
        (start..self.len())
            .find(|&i| self.is_separator(i))
            .unwrap_or_else(|| self.len().saturating_sub(1))
    }

    /// Where the first span begins: after the sentence start, skipping a
    /// leading separator
    pub fn first_span_start(&self) -> usize {
        if self.is_separator(1) {
            2
        } else {
            1
        }
    }

    /// Clause-like spans from left to right
    pub fn spans(&self) -> Spans<'a> {
        Spans {
            scanner: *self,
            cursor: self.first_span_start(),
        }
    }
}

/// Iterator over the spans between separators
pub struct Spans<'a> {
    scanner: ClauseScanner<'a>,
    cursor: usize,
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if self.cursor >= self.scanner.len() {
            return None;
        }
        let end = self.scanner.next_separator(self.cursor);
        let span = Span::new(self.cursor, end);
        self.cursor = end + 1;
        Some(span)
    }
}
