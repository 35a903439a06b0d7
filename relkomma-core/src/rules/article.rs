//! Article disambiguation
//!
//! Tells "das Auto, das fährt" (relative pronoun) apart from
//! "das schnell fahrende Auto" (article) by walking forward from the
//! candidate over adjectives, participles and prepositional material.

use super::scanner::ClauseScanner;
use crate::domain::{GenderSet, PosTag};

/// Outcome of inspecting one token after the candidate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ArticleStep {
    /// The candidate introduces a noun phrase
    Determiner,
    /// The candidate stands alone
    Pronoun,
    /// Keep scanning from this index
    Resume(usize),
}

/// Tokens that may continue a noun phrase opened by the candidate
fn continues_phrase(gender: GenderSet, tag: &PosTag) -> bool {
    tag.is_phrase_filler()
        || ((tag.is_attributive() || tag.is_determiner_pronoun()) && gender.admits(tag))
}

impl ClauseScanner<'_> {
    /// A verb right after an agreeing adjective or possessive: the phrase
    /// ended without a noun, so the candidate was an article
    pub fn is_article_without_noun(&self, gender: GenderSet, n: usize) -> bool {
        self.has(n, PosTag::is_verb)
            && n.checked_sub(1).is_some_and(|prev| {
                self.has(prev, |t| t.is_adjective_or_possessive() && gender.admits(t))
            })
    }

    /// Next agreeing modifier after `n`
    ///
    /// Handles "das in die dunkle Garage fahrende Auto": a participle right
    /// after `n` wins, otherwise the first agreeing adjective or participle
    /// in `(n, to)`.
    pub fn skip_to_modifier(&self, gender: GenderSet, n: usize, to: usize) -> Option<usize> {
        if self.has(n + 1, |t| t.is_participle() && gender.admits(t)) {
            return Some(n + 1);
        }
        (n + 1..to).find(|&i| self.has(i, |t| t.is_attributive() && gender.admits(t)))
    }

    fn article_step(&self, gender: GenderSet, i: usize, to: usize) -> ArticleStep {
        let Some(token) = self.token(i) else {
            return ArticleStep::Pronoun;
        };
        if token.is_unknown() || token.has(|t| t.is_nominal() && gender.admits(t)) {
            return ArticleStep::Determiner;
        }
        if token.has(PosTag::is_article) || !token.has(|t| continues_phrase(gender, t)) {
            if self.is_article_without_noun(gender, i) {
                return ArticleStep::Determiner;
            }
            return match self.skip_to_modifier(gender, i, to) {
                Some(next) => ArticleStep::Resume(next + 1),
                None => ArticleStep::Pronoun,
            };
        }
        ArticleStep::Resume(i + 1)
    }

    /// Is the candidate at `from` an article of a noun phrase ending
    /// before `to`?
    pub fn is_article(&self, gender: GenderSet, from: usize, to: usize) -> bool {
        if self
            .token(from)
            .is_some_and(|t| self.lexicon.is_interrogative_pronoun(&t.text))
        {
            return false;
        }

        let mut i = from + 1;
        while i < to {
            match self.article_step(gender, i, to) {
                ArticleStep::Determiner => return true,
                ArticleStep::Pronoun => return false,
                ArticleStep::Resume(next) => i = next,
            }
        }
        to < self.len() && self.is_article_without_noun(gender, to)
    }
}
