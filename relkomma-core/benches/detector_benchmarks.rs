//! Benchmarks for the relative clause comma rule

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use relkomma_core::{AnalyzedSentence, Config, PosTag, RelativeClauseCommaRule, Token};
use std::hint::black_box;

/// One clause-sized building block: "das Auto das ich kaufte ist rot ,"
const CLAUSE: &[(&str, &str)] = &[
    ("das", "ART:DEF:NOM:SIN:NEU PRO:DEM:NOM:SIN:NEU"),
    ("Auto", "SUB:NOM:SIN:NEU SUB:AKK:SIN:NEU"),
    ("das", "ART:DEF:AKK:SIN:NEU PRO:REL:AKK:SIN:NEU"),
    ("ich", "PRO:PER:NOM:SIN:ALG"),
    ("kaufte", "VER:1:SIN:PRT:SFT"),
    ("ist", "VER:AUX:3:SIN:PRÄ"),
    ("rot", "ADJ:PRD:GRU"),
    (",", "PKT"),
];

/// Generate a sentence made of `clauses` repeated building blocks
fn generate_sentence(clauses: usize) -> AnalyzedSentence {
    let mut offset = 0;
    let mut tokens = Vec::with_capacity(clauses * CLAUSE.len());
    for (word, tags) in CLAUSE.iter().cycle().take(clauses * CLAUSE.len()) {
        let len = word.chars().count();
        let readings = tags
            .split_whitespace()
            .map(|t| t.parse::<PosTag>().expect("valid tag"));
        tokens.push(Token::new(*word, offset, offset + len, readings));
        offset += len + 1;
    }
    AnalyzedSentence::new(tokens)
}

fn bench_check_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_by_length");
    let rule = RelativeClauseCommaRule::new(Config::default()).expect("embedded tables");

    for clauses in [1, 4, 16, 64] {
        let sentence = generate_sentence(clauses);
        group.throughput(Throughput::Elements(sentence.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{clauses}_clauses")),
            &sentence,
            |b, sentence| b.iter(|| rule.check(black_box(sentence))),
        );
    }

    group.finish();
}

fn bench_tag_parsing(c: &mut Criterion) {
    c.bench_function("parse_tag", |b| {
        b.iter(|| black_box("PA1:AKK:SIN:NEU:GRU:DEF:VER").parse::<PosTag>())
    });
}

criterion_group!(benches, bench_check_by_length, bench_tag_parsing);
criterion_main!(benches);
