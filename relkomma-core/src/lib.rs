//! Heuristic detection of missing commas before German relative clauses
//!
//! The detector works on one tagged sentence at a time. It splits the
//! sentence into spans at punctuation and coordinating conjunctions, decides
//! from the verbs of a span whether it looks like a subordinate clause, and
//! then searches the span for a relative pronoun that agrees with an earlier
//! noun and is not merely the article of a following noun phrase.
//!
//! # Architecture
//!
//! - **domain**: tokens, structured tag readings, gender sets and spans
//! - **language**: embedded lexical tables behind the [`Lexicon`] trait
//! - **rules**: the detection stages and [`RelativeClauseCommaRule`]
//! - **api**: rule configuration
//!
//! # Example
//!
//! ```rust
//! use relkomma_core::{AnalyzedSentence, Config, RelativeClauseCommaRule};
//!
//! let sentence = AnalyzedSentence::from_tagged_words(&[
//!     ("Das", &["ART:DEF:NOM:SIN:NEU"][..]),
//!     ("Auto", &["SUB:NOM:SIN:NEU"][..]),
//!     ("das", &["PRO:REL:AKK:SIN:NEU"][..]),
//!     ("ich", &["PRO:PER:NOM:SIN:ALG"][..]),
//!     ("kaufte", &["VER:1:SIN:PRT:SFT"][..]),
//!     ("ist", &["VER:AUX:3:SIN:PRÄ"][..]),
//!     ("rot", &["ADJ:PRD:GRU"][..]),
//! ])
//! .unwrap();
//!
//! let rule = RelativeClauseCommaRule::new(Config::default()).unwrap();
//! let matches = rule.check(&sentence);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].suggestion, "Auto, das");
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod language;
pub mod rules;

pub use api::{Config, ConfigBuilder, RuleSection, Variant};
pub use domain::{AnalyzedSentence, GenderSet, PosTag, Span, Token};
pub use error::{CoreError, Result};
pub use language::{get_tables, LanguageTables, Lexicon};
pub use rules::{apply_suggestion, RelativeClauseCommaRule, RuleId, RuleMatch};
