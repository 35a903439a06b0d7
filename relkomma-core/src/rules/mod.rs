//! Detection stages and the rule built on top of them
//!
//! Every stage is a method group on [`ClauseScanner`], a borrowed view of
//! one sentence plus the language lexicon:
//!
//! 1. `scanner`: separator scanning and span decomposition
//! 2. `verbs`: verb positions inside a span
//! 3. `subclause`: verb-count heuristics deciding on a subordinate clause
//! 4. `pronoun`: relative pronoun candidates and antecedent agreement
//! 5. `article`: article versus pronoun disambiguation
//! 6. `relative_clause`: the main loop and match construction

mod article;
mod pronoun;
mod relative_clause;
mod scanner;
mod subclause;
mod types;
mod verbs;

pub use relative_clause::RelativeClauseCommaRule;
pub use scanner::{ClauseScanner, Spans};
pub use types::{apply_suggestion, RuleId, RuleMatch};
pub use verbs::VerbPositions;
