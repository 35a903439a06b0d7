//! Public contract for language-specific lexical knowledge
//!
//! The clause heuristics only need a few word-level decisions; everything
//! grammatical comes from the token readings.

/// Word-level lookups used by the detector
///
/// Implementations must be cheap and allocation-free on the hot path and
/// safe to share between threads checking different sentences.
pub trait Lexicon: Send + Sync + 'static {
    /// Punctuation mark or coordinating conjunction closing a span
    fn is_separator(&self, text: &str) -> bool;

    /// Surface form that may introduce a relative clause
    fn is_relative_pronoun(&self, text: &str) -> bool;

    /// Interrogative forms that never act as an article
    fn is_interrogative_pronoun(&self, text: &str) -> bool;

    /// Fixed relative adverbs that open a subclause ("wer", "wo", "wohin")
    fn is_relative_adverb(&self, text: &str) -> bool;

    /// Marker of an infinitive construction ("zu")
    fn infinitive_marker(&self) -> &str;

    /// First half of a correlative disjunction ("weder")
    fn neither(&self) -> &str;

    /// Second half of a correlative disjunction ("noch")
    fn nor(&self) -> &str;

    /// The comma token
    fn comma(&self) -> &str;
}
