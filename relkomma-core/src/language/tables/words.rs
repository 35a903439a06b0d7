//! Word membership tables

use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;

/// Set of function words, optionally compared case-insensitively
#[derive(Debug, Clone)]
pub struct WordTable {
    words: HashSet<String>,
    case_sensitive: bool,
}

impl WordTable {
    pub fn new(words: impl IntoIterator<Item = String>, case_sensitive: bool) -> Self {
        let words = words
            .into_iter()
            .map(|w| if case_sensitive { w } else { w.to_lowercase() })
            .collect();
        Self {
            words,
            case_sensitive,
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_lowercase())
        }
    }
}

/// Whole-token surface pattern
#[derive(Debug, Clone)]
pub struct SurfacePattern {
    regex: Regex,
}

impl SurfacePattern {
    /// Compile a pattern that must match the entire token text
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self { regex })
    }

    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_words() {
        let table = WordTable::new(["wer".to_string(), "Wohin".to_string()], false);
        assert!(table.contains("Wer"));
        assert!(table.contains("wohin"));
        assert!(!table.contains("wann"));
    }

    #[test]
    fn test_case_sensitive_words() {
        let table = WordTable::new(["und".to_string()], true);
        assert!(table.contains("und"));
        assert!(!table.contains("Und"));
    }

    #[test]
    fn test_surface_pattern_is_anchored() {
        let pattern = SurfacePattern::new("welche[mrs]?|wessen").unwrap();
        assert!(pattern.matches("welche"));
        assert!(pattern.matches("welches"));
        assert!(pattern.matches("wessen"));
        assert!(!pattern.matches("welcherlei"));
        assert!(!pattern.matches("Welche"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(SurfacePattern::new("(unclosed").is_err());
    }
}
