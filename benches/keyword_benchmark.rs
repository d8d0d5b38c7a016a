use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keyword_census::{analyse_tokens, CategoryBoundary, KeywordTaxonomy};

const TAXONOMY: &str = "\
AI,Cloud,Internet
KI,Cloud,Internet
Künstliche Intelligenz,Cloud-Lösung,Internet-Technologie
Machine Learning,Rechenzentrum,Internet der Dinge
";

fn benchmark_analyse_tokens(c: &mut Criterion) {
    let taxonomy = KeywordTaxonomy::from_csv_str(TAXONOMY, &CategoryBoundary::All)
        .expect("Failed to parse taxonomy");

    let sentence = ["wir", "nutzen", "ki", "und", "die", "cloud", "im", "internet", "der", "dinge"];
    let tokens: Vec<String> = sentence
        .iter()
        .cycle()
        .take(sentence.len() * 1_000)
        .map(|token| token.to_string())
        .collect();

    c.bench_function("analyse_tokens", |b| {
        b.iter(|| analyse_tokens(black_box(&tokens), black_box(&taxonomy)))
    });
}

criterion_group!(benches, benchmark_analyse_tokens);
criterion_main!(benches);
