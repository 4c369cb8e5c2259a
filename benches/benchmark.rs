// Vectorization and scoring benchmarks
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use titlex_similarity::{cosine_similarity, score_against, CountVector, CountVectorizer};

const GENRES: [&str; 12] = [
    "action", "adventure", "animation", "comedy", "crime", "documentary",
    "drama", "family", "fantasy", "horror", "romance", "thriller",
];

fn generate_document(rng: &mut impl Rng, people: usize) -> Vec<String> {
    let mut doc: Vec<String> = GENRES
        .choose_multiple(rng, 3)
        .map(|g| g.to_string())
        .collect();
    for _ in 0..8 {
        doc.push(format!("nm{:07}", rng.random_range(0..people)));
    }
    doc
}

fn generate_corpus(size: usize) -> Vec<Vec<String>> {
    let mut rng = rand::rng();
    (0..size).map(|_| generate_document(&mut rng, size)).collect()
}

fn benchmark_build_vocabulary(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_vocabulary");

    for size in [1_000, 10_000].iter() {
        let corpus = generate_corpus(*size);
        group.bench_with_input(BenchmarkId::new("titlex", size), &corpus, |b, corpus| {
            b.iter(|| {
                let mut vectorizer = CountVectorizer::new();
                vectorizer.build_vocabulary(black_box(corpus));
                black_box(vectorizer);
            });
        });
    }

    group.finish();
}

fn benchmark_vectorize(c: &mut Criterion) {
    let corpus = generate_corpus(10_000);
    let mut vectorizer = CountVectorizer::new();
    vectorizer.build_vocabulary(&corpus);

    c.bench_function("vectorize_10k_vocab", |b| {
        let doc = &corpus[0];
        b.iter(|| black_box(vectorizer.vectorize(black_box(doc))));
    });
}

fn benchmark_cosine(c: &mut Criterion) {
    let corpus = generate_corpus(10_000);
    let mut vectorizer = CountVectorizer::new();
    vectorizer.build_vocabulary(&corpus);
    let vectors: Vec<CountVector> = corpus.iter().map(|d| vectorizer.vectorize(d)).collect();

    c.bench_function("cosine_pair", |b| {
        b.iter(|| {
            black_box(cosine_similarity(
                black_box(vectors[0].as_slice()),
                black_box(vectors[1].as_slice()),
            ))
        });
    });

    let candidates = &vectors[..1_000];
    c.bench_function("score_against_1k", |b| {
        b.iter(|| black_box(score_against(black_box(&vectors[0]), candidates)));
    });
}

criterion_group!(benches, benchmark_build_vocabulary, benchmark_vectorize, benchmark_cosine);
criterion_main!(benches);
