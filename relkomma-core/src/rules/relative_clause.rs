//! The relative clause comma rule

use std::sync::Arc;

use super::scanner::ClauseScanner;
use super::types::{RuleId, RuleMatch};
use crate::api::{Config, Variant};
use crate::domain::{AnalyzedSentence, PosTag};
use crate::error::Result;
use crate::language::{get_tables, LanguageTables};

/// Detects a missing comma in front of a German relative clause
///
/// The rule is stateless: one instance can check any number of sentences,
/// also from several threads at once.
#[derive(Debug, Clone)]
pub struct RelativeClauseCommaRule {
    config: Config,
    tables: Arc<LanguageTables>,
}

impl RelativeClauseCommaRule {
    /// Create a rule backed by the embedded German tables
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_tables(config, get_tables("de")?))
    }

    /// Create a rule with explicit language tables
    pub fn with_tables(config: Config, tables: Arc<LanguageTables>) -> Self {
        Self { config, tables }
    }

    pub fn id(&self) -> RuleId {
        match self.config.variant() {
            Variant::Before => RuleId::CommaBeforeRelativeClause,
            Variant::After => RuleId::CommaAfterRelativeClause,
        }
    }

    pub fn description(&self) -> &str {
        self.id().description(self.tables.messages())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn message(&self) -> &str {
        self.config
            .message()
            .unwrap_or(&self.tables.messages().message)
    }

    /// Check one sentence
    ///
    /// Matches are returned left to right, at most one per span.
    pub fn check(&self, sentence: &AnalyzedSentence) -> Vec<RuleMatch> {
        if self.config.variant() == Variant::After || sentence.len() <= 1 {
            return Vec::new();
        }

        let scanner = ClauseScanner::new(self.tables.as_ref(), sentence);
        scanner
            .spans()
            .filter_map(|span| {
                let verb = scanner.subclause_verb(span).filter(|&v| v > 0);
                log::trace!("span {}..{}: governing verb {:?}", span.start, span.end, verb);
                let verb = verb?;
                log::debug!("subclause candidate {}..{} governed by {verb}", span.start, span.end);

                let pronoun = scanner
                    .missed_comma_before(span, verb)
                    .filter(|&n| n > 0)?;
                self.emit(&scanner, pronoun)
            })
            .collect()
    }

    /// Build the match for the pronoun at `n`
    ///
    /// The flagged region starts at the preceding token, or one further
    /// left when that token is a preposition.
    fn emit(&self, scanner: &ClauseScanner<'_>, n: usize) -> Option<RuleMatch> {
        let pronoun = scanner.token(n)?;
        let before = n.checked_sub(1).and_then(|i| scanner.token(i))?;
        let after_preposition = scanner.has(n - 1, PosTag::is_preposition);

        let (first, suggestion) = if after_preposition {
            let first = scanner.token(n.saturating_sub(2))?;
            let suggestion = format!("{}, {} {}", first.text, before.text, pronoun.text);
            (first, suggestion)
        } else {
            (before, format!("{}, {}", before.text, pronoun.text))
        };

        log::debug!(
            "missing comma before '{}' at {}..{}",
            pronoun.text,
            first.start,
            pronoun.end
        );

        Some(RuleMatch {
            rule_id: self.id(),
            start: first.start,
            end: pronoun.end,
            message: self.message().to_string(),
            suggestion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::scanner::tests::sentence;
    use super::*;

    fn rule() -> RelativeClauseCommaRule {
        RelativeClauseCommaRule::new(Config::default()).unwrap()
    }

    fn auto_sentence() -> AnalyzedSentence {
        sentence(&[
            ("Das", "ART:DEF:NOM:SIN:NEU PRO:DEM:NOM:SIN:NEU"),
            ("Auto", "SUB:NOM:SIN:NEU SUB:AKK:SIN:NEU"),
            ("das", "ART:DEF:AKK:SIN:NEU PRO:DEM:AKK:SIN:NEU PRO:REL:AKK:SIN:NEU"),
            ("ich", "PRO:PER:NOM:SIN:ALG"),
            ("kaufte", "VER:1:SIN:PRT:SFT"),
            ("ist", "VER:AUX:3:SIN:PRÄ"),
            ("rot", "ADJ:PRD:GRU"),
        ])
    }

    #[test]
    fn test_missing_comma_is_reported() {
        let matches = rule().check(&auto_sentence());
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.rule_id, RuleId::CommaBeforeRelativeClause);
        assert_eq!((m.start, m.end), (4, 12));
        assert_eq!(m.suggestion, "Auto, das");
        assert_eq!(m.message, "Sollten Sie hier ein Komma einfügen (Relativsatz)?");
    }

    #[test]
    fn test_preposition_extends_the_match() {
        let s = sentence(&[
            ("Das", "ART:DEF:NOM:SIN:NEU"),
            ("Haus", "SUB:NOM:SIN:NEU SUB:DAT:SIN:NEU"),
            ("in", "PRP:LOK+TMP:DAT"),
            ("dem", "ART:DEF:DAT:SIN:NEU PRO:REL:DAT:SIN:NEU"),
            ("ich", "PRO:PER:NOM:SIN:ALG"),
            ("wohne", "VER:1:SIN:PRÄ:SFT"),
            ("ist", "VER:AUX:3:SIN:PRÄ"),
            ("alt", "ADJ:PRD:GRU"),
        ]);
        let matches = rule().check(&s);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].suggestion, "Haus, in dem");
        assert_eq!((matches[0].start, matches[0].end), (4, 15));
    }

    #[test]
    fn test_after_variant_reports_nothing() {
        let rule = RelativeClauseCommaRule::new(Config::builder().after(true).build().unwrap())
            .unwrap();
        assert_eq!(rule.id(), RuleId::CommaAfterRelativeClause);
        assert_eq!(rule.description(), "Fehlendes Komma nach Relativsatz");
        assert!(rule.check(&auto_sentence()).is_empty());
    }

    #[test]
    fn test_custom_message() {
        let config = Config::builder().message("Komma?").build().unwrap();
        let rule = RelativeClauseCommaRule::new(config).unwrap();
        assert_eq!(rule.check(&auto_sentence())[0].message, "Komma?");
    }

    #[test]
    fn test_conjunction_clause_with_single_verb_after_it_is_not_flagged() {
        // "Weil die Frau die ich gern sah , sie lacht ."
        let s = sentence(&[
            ("Weil", "KON:UNT"),
            ("die", "ART:DEF:NOM:SIN:FEM PRO:DEM:NOM:SIN:FEM"),
            ("Frau", "SUB:NOM:SIN:FEM"),
            ("die", "ART:DEF:AKK:SIN:FEM PRO:REL:AKK:SIN:FEM"),
            ("ich", "PRO:PER:NOM:SIN:ALG"),
            ("gern", "ADV:MOD"),
            ("sah", "VER:1:SIN:PRT:NON"),
            (",", "PKT"),
            ("sie", "PRO:PER:NOM:SIN:FEM"),
            ("lacht", "VER:3:SIN:PRÄ:SFT"),
            (".", "PKT"),
        ]);
        assert!(rule().check(&s).is_empty());
    }

    #[test]
    fn test_short_sentences_are_skipped() {
        assert!(rule().check(&AnalyzedSentence::new(Vec::new())).is_empty());
        assert!(rule().check(&sentence(&[("Ja", "ADV:ASS")])).is_empty());
    }
}
