//! Property tests over randomly assembled tagged sentences

use proptest::prelude::*;
use relkomma_core::rules::ClauseScanner;
use relkomma_core::{get_tables, AnalyzedSentence, Config, PosTag, RelativeClauseCommaRule, Token};

/// Small tagged vocabulary mixing nouns, pronoun-shaped forms, verbs,
/// modifiers and separators
const VOCABULARY: &[(&str, &str)] = &[
    ("Das", "ART:DEF:NOM:SIN:NEU"),
    ("Auto", "SUB:NOM:SIN:NEU"),
    ("Frau", "SUB:NOM:SIN:FEM"),
    ("Mann", "SUB:DAT:SIN:MAS"),
    ("das", "ART:DEF:AKK:SIN:NEU PRO:REL:AKK:SIN:NEU"),
    ("die", "ART:DEF:NOM:SIN:FEM PRO:REL:NOM:PLU:FEM"),
    ("dem", "ART:DEF:DAT:SIN:MAS PRO:REL:DAT:SIN:MAS"),
    ("welche", "PRO:INR:NOM:SIN:FEM"),
    ("ich", "PRO:PER:NOM:SIN:ALG"),
    ("kaufte", "VER:1:SIN:PRT:SFT"),
    ("ist", "VER:AUX:3:SIN:PRÄ"),
    ("kann", "VER:MOD:3:SIN:PRÄ"),
    ("fahren", "VER:INF:NON"),
    ("gegessen", "VER:PA2:SFT"),
    ("schnelle", "ADJ:NOM:SIN:FEM:GRU:DEF"),
    ("fahrende", "PA1:AKK:SIN:NEU:GRU:DEF:VER"),
    ("gern", "ADV:MOD"),
    ("in", "PRP:LOK+TMP:DAT"),
    ("dass", "KON:UNT"),
    ("zu", "PRP:RIC:DAT"),
    ("nicht", "NEG"),
    ("und", "KON:NEB"),
    (",", "PKT"),
    (".", "PKT"),
    ("Flurbo", ""),
];

fn build(indices: &[usize]) -> AnalyzedSentence {
    let mut offset = 0;
    let tokens: Vec<Token> = indices
        .iter()
        .map(|&i| {
            let (word, tags) = VOCABULARY[i];
            let len = word.chars().count();
            let readings = tags.split_whitespace().map(|t| t.parse::<PosTag>().unwrap());
            let token = Token::new(word, offset, offset + len, readings);
            offset += len + 1;
            token
        })
        .collect();
    AnalyzedSentence::new(tokens)
}

fn sentence_strategy() -> impl Strategy<Value = AnalyzedSentence> {
    prop::collection::vec(0..VOCABULARY.len(), 0..24).prop_map(|indices| build(&indices))
}

fn rule() -> RelativeClauseCommaRule {
    RelativeClauseCommaRule::new(Config::default()).unwrap()
}

proptest! {
    /// Whitespace-only input never produces matches
    #[test]
    fn whitespace_only_sentences_are_empty(count in 0usize..5) {
        let tokens = (0..count).map(|i| Token::new(" ", i, i + 1, []));
        let sentence = AnalyzedSentence::new(tokens);
        prop_assert!(sentence.len() <= 1);
        prop_assert!(rule().check(&sentence).is_empty());
    }

    /// Checking twice yields the same matches
    #[test]
    fn detection_is_deterministic(sentence in sentence_strategy()) {
        let rule = rule();
        prop_assert_eq!(rule.check(&sentence), rule.check(&sentence));
    }

    /// Spans plus their terminating separators cover every token once
    #[test]
    fn spans_partition_the_sentence(sentence in sentence_strategy()) {
        let tables = get_tables("de").unwrap();
        let scanner = ClauseScanner::new(tables.as_ref(), &sentence);
        let covered: Vec<usize> = scanner
            .spans()
            .flat_map(|span| span.start..=span.end)
            .collect();
        let expected: Vec<usize> = (scanner.first_span_start()..sentence.len()).collect();
        prop_assert_eq!(covered, expected);
    }

    /// Matches stay inside the text and add exactly one comma
    #[test]
    fn matches_add_one_comma(sentence in sentence_strategy()) {
        let text: Vec<char> = sentence.text().chars().collect();
        for m in rule().check(&sentence) {
            prop_assert!(m.start <= m.end);
            prop_assert!(m.end <= text.len());
            let original: String = text[m.start..m.end].iter().collect();
            let commas = |s: &str| s.matches(',').count();
            prop_assert_eq!(commas(&m.suggestion), commas(&original) + 1);
        }
    }

    /// At most one match per span, reported left to right
    #[test]
    fn matches_are_ordered(sentence in sentence_strategy()) {
        let matches = rule().check(&sentence);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }
}
