//! Verb location
//!
//! Three token-level predicates plus the per-span verb scan that feeds
//! subclause detection.

use super::scanner::ClauseScanner;
use crate::domain::{GenderSet, PosTag, Span};
use smallvec::SmallVec;

/// Verb indices of a span in left-to-right order
pub type VerbPositions = SmallVec<[usize; 4]>;

impl ClauseScanner<'_> {
    /// Countable finite verb at `n`
    ///
    /// The token needs a person-marked verb reading and no numeral, adverb,
    /// article or noun reading. A token that can also be a bare infinitive
    /// does not count right after the infinitive marker.
    pub fn is_verb(&self, n: usize) -> bool {
        let Some(token) = self.token(n) else {
            return false;
        };
        if !token.has(PosTag::is_finite_verb) || token.has(PosTag::excludes_finite_verb) {
            return false;
        }
        !token.has(PosTag::is_main_infinitive)
            || !n
                .checked_sub(1)
                .is_some_and(|prev| self.text_is(prev, self.lexicon.infinitive_marker()))
    }

    /// Any verb presence at `n`
    ///
    /// Besides verb readings this accepts "zu" + infinitive and a negation
    /// particle followed by a verb.
    pub fn is_any_verb(&self, n: usize) -> bool {
        if self.has(n, PosTag::is_verb) {
            return true;
        }
        if n + 1 >= self.len() {
            return false;
        }
        (self.text_is(n, self.lexicon.infinitive_marker())
            && self.has(n + 1, PosTag::is_main_infinitive))
            || (self.has(n, PosTag::is_negation) && self.has(n + 1, PosTag::is_verb))
    }

    /// A comma at `end` directly followed by a verb
    pub fn is_verb_after(&self, end: usize) -> bool {
        end + 1 < self.len()
            && self.text_is(end, self.lexicon.comma())
            && self.has(end + 1, PosTag::is_verb)
    }

    /// Positions of countable verbs inside `span`
    ///
    /// A finite reading that is also an adjectival participle only counts
    /// when the chain of agreeing adjectives/participles after it does not
    /// end in an agreeing noun or an untagged token; otherwise it is an
    /// attributive participle ("die gestern gekaufte Milch").
    pub fn verb_positions(&self, span: Span) -> VerbPositions {
        span.indices()
            .filter(|&i| self.is_verb(i))
            .filter(|&i| !self.has(i, PosTag::is_participle) || self.participle_acts_as_verb(i, span))
            .collect()
    }

    fn participle_acts_as_verb(&self, i: usize, span: Span) -> bool {
        let Some(token) = self.token(i) else {
            return false;
        };
        let gender = GenderSet::of_token(token);
        let mut j = i + 1;
        while j < span.end && self.has(j, |t| t.is_attributive() && gender.admits(t)) {
            j += 1;
        }
        match self.token(j) {
            Some(next) => {
                !next.has(|t| t.is_nominal() && gender.admits(t)) && !next.is_unknown()
            }
            None => true,
        }
    }
}
