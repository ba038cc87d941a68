use std::hint::black_box;

use column_classify::classify;
use criterion::{Criterion, criterion_group, criterion_main};
use uuid::Uuid;

fn integer_column(rows: usize) -> Vec<String> {
    (0..rows).map(|i| i.to_string()).collect()
}

fn guid_column(rows: usize) -> Vec<String> {
    (0..rows)
        .map(|i| Uuid::from_u128(i as u128).hyphenated().to_string())
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let integers = integer_column(10_000);
    c.bench_function("classify_uniform_integers_10k", |b| {
        b.iter(|| classify(black_box(&integers)).unwrap())
    });

    let mut with_header = integer_column(10_000);
    with_header.insert(0, "order_id".to_string());
    c.bench_function("classify_integers_with_header_10k", |b| {
        b.iter(|| classify(black_box(&with_header)).unwrap())
    });

    let guids = guid_column(10_000);
    c.bench_function("classify_uniform_guids_10k", |b| {
        b.iter(|| classify(black_box(&guids)).unwrap())
    });

    // The back-to-front scan hits this mismatch on its first step.
    let mut early_mismatch = integer_column(10_000);
    let len = early_mismatch.len();
    early_mismatch[len - 2] = "pending".to_string();
    c.bench_function("classify_early_mismatch_10k", |b| {
        b.iter(|| classify(black_box(&early_mismatch)).unwrap())
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
