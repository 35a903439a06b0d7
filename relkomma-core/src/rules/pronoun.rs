//! Relative pronoun candidates and antecedent agreement

use super::scanner::ClauseScanner;
use crate::domain::{GenderSet, PosTag, Span};

impl ClauseScanner<'_> {
    /// Surface form of a possible relative pronoun at `n`
    pub fn is_pronoun(&self, n: usize) -> bool {
        self.token(n)
            .is_some_and(|t| self.lexicon.is_relative_pronoun(&t.text))
    }

    /// Gender/number features of token `n`; empty when out of range
    pub fn gender_of(&self, n: usize) -> GenderSet {
        self.token(n).map(GenderSet::of_token).unwrap_or_default()
    }

    /// Is there an agreeing noun or proper noun in `[from, to)`?
    ///
    /// Scans backwards. Index 1 is skipped when it also reads as a verb,
    /// since a fronted finite verb is often mistagged as a noun.
    pub fn matches_gender(&self, gender: GenderSet, from: usize, to: usize) -> bool {
        (from..to).rev().any(|i| {
            self.has(i, |t| t.is_nominal() && gender.admits(t))
                && (i != 1 || !self.has(i, PosTag::is_verb))
        })
    }

    /// First pronoun in `span` before `last_verb` that should have a comma
    /// in front of it
    ///
    /// The candidate must not be followed by a verb, must agree with an
    /// earlier noun in the span and must not be an article.
    pub fn missed_comma_before(&self, span: Span, last_verb: usize) -> Option<usize> {
        (span.start..last_verb.saturating_sub(1)).find(|&i| {
            if !self.is_pronoun(i) {
                return false;
            }
            let gender = self.gender_of(i);
            !self.is_any_verb(i + 1)
                && self.matches_gender(gender, span.start, i)
                && !self.is_article(gender, i, last_verb)
        })
    }
}
