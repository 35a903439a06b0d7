//! Separator lookup with O(1) mark classification
//!
//! Marks are single characters; ASCII marks hit a direct array lookup,
//! typographic quotes and dashes fall back to a hash set.

use std::collections::HashSet;

/// Fast separator lookup table
#[derive(Debug, Clone)]
pub struct SeparatorTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII marks
    non_ascii: HashSet<char>,
    /// Whole-word separators such as coordinating conjunctions
    words: HashSet<String>,
}

impl SeparatorTable {
    /// Create from mark characters and separator words
    pub fn new(marks: impl IntoIterator<Item = char>, words: impl IntoIterator<Item = String>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in marks {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
            words: words.into_iter().collect(),
        }
    }

    /// Check if character is a separator mark
    #[inline]
    pub fn is_mark(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// A token separates iff it is exactly one mark or a separator word
    #[inline]
    pub fn is_separator(&self, text: &str) -> bool {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.is_mark(ch) || self.words.contains(text),
            _ => self.words.contains(text),
        }
    }
}
