//! Half-open token index ranges

use std::ops::Range;

/// Tokens between two separators, `[start, end)`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the final token inside the span (`end - 1`)
    #[inline]
    pub fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end - 1)
    }

    /// Iterate over the indices of the span; empty when `end <= start`
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end.max(self.start)
    }
}
