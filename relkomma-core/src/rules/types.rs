//! Rule identities and match records

use crate::language::config::Messages;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two rule identities exposed by the detector
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleId {
    CommaBeforeRelativeClause,
    CommaAfterRelativeClause,
}

impl RuleId {
    pub const ALL: [RuleId; 2] = [
        RuleId::CommaBeforeRelativeClause,
        RuleId::CommaAfterRelativeClause,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::CommaBeforeRelativeClause => "COMMA_BEFORE_RELATIVE_CLAUSE",
            RuleId::CommaAfterRelativeClause => "COMMA_AFTER_RELATIVE_CLAUSE",
        }
    }

    /// Human-readable description taken from the language messages
    pub fn description<'m>(&self, messages: &'m Messages) -> &'m str {
        match self {
            RuleId::CommaBeforeRelativeClause => &messages.before_description,
            RuleId::CommaAfterRelativeClause => &messages.after_description,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flagged position in one sentence
///
/// `start` and `end` are character offsets into the sentence text; `end`
/// is exclusive and lies at the end of the relative pronoun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    pub rule_id: RuleId,
    pub start: usize,
    pub end: usize,
    pub message: String,
    pub suggestion: String,
}

impl RuleMatch {
    /// Length of the flagged region in characters
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Replace the flagged region of `text` with the match's suggestion
///
/// Offsets outside the text are clamped to its end.
pub fn apply_suggestion(text: &str, rule_match: &RuleMatch) -> String {
    let chars: Vec<char> = text.chars().collect();
    let end = rule_match.end.min(chars.len());
    let start = rule_match.start.min(end);

    let mut corrected: String = chars[..start].iter().collect();
    corrected.push_str(&rule_match.suggestion);
    corrected.extend(&chars[end..]);
    corrected
}
