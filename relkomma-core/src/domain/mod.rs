//! Domain types: tagged tokens, structured readings, feature sets and spans

pub mod gender;
pub mod span;
pub mod tag;
pub mod token;

pub use gender::GenderSet;
pub use span::Span;
pub use tag::{Case, Gender, Number, PartOfSpeech, Person, PosTag, SubCategory, VerbForm};
pub use token::{AnalyzedSentence, Readings, Token};
