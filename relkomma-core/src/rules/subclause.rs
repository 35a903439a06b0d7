//! Subclause detection from verb counts
//!
//! The verb-count branches below are empirically tuned and kept as literal
//! rules. The first matching branch decides.

use super::scanner::ClauseScanner;
use crate::domain::{PosTag, Span};

impl ClauseScanner<'_> {
    /// Subordinating conjunction or relative adverb at `n`
    pub fn opens_subclause(&self, n: usize) -> bool {
        self.token(n).is_some_and(|t| {
            t.has(PosTag::is_subordinating_conjunction) || self.lexicon.is_relative_adverb(&t.text)
        })
    }

    /// Governing verb of `span` if it looks like a subordinate clause
    pub fn subclause_verb(&self, span: Span) -> Option<usize> {
        let verbs = self.verb_positions(span);

        // one clause-final verb, not at the very end of the sentence:
        // decided by the verbs of the following span
        if verbs.len() == 1 && span.end + 2 < self.len() && span.last() == Some(verbs[0]) {
            let next = Span::new(span.end + 1, self.next_separator(span.end + 1));
            let next_verbs = self.verb_positions(next);
            let accepted = if self.opens_subclause(span.start) {
                next_verbs.len() > 1
            } else {
                !next_verbs.is_empty()
            };
            return accepted.then_some(verbs[0]);
        }

        if verbs.len() == 2 {
            let (first, second) = (verbs[0], verbs[1]);
            // modal/auxiliary + infinitive: the finite verb governs
            if self.has(first, PosTag::is_modal_or_auxiliary)
                && self.has(second, PosTag::is_main_infinitive)
            {
                return Some(first);
            }
            // auxiliary + participle: perfect tense of a main clause
            if self.has(first, PosTag::is_auxiliary)
                && self.has(second, PosTag::is_main_past_participle)
            {
                return None;
            }
        }

        if verbs.len() == 3 && self.has(verbs[0], PosTag::is_modal) {
            let (second, third) = (verbs[1], verbs[2]);
            let separated_infinitive = self.has(third - 1, PosTag::is_main_infinitive_or_participle)
                && self.has(third, PosTag::is_main_infinitive);
            let neither_nor = self.text_is(second - 1, self.lexicon.neither())
                && self.has(second, PosTag::is_main_infinitive)
                && self.text_is(third - 1, self.lexicon.nor());
            if separated_infinitive || neither_nor {
                return None;
            }
        }

        if verbs.len() > 1 {
            return verbs.last().copied();
        }
        None
    }
}
