//! Benchmark for the full prediction pipeline.

use digitcast::utils::sample::random_digits;
use digitcast::{predict, Context, Predictor};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn predict_sample() {
    let input = random_digits(500, 3);
    let result = predict(&input, Context::default());
    black_box(result.is_some());
}

fn predict_long_sequence() {
    let input = random_digits(50_000, 3);
    let result = predict(&input, Context::default());
    black_box(result.is_some());
}

fn predict_cached() {
    let input = random_digits(5_000, 3);
    let mut predictor = Predictor::default();
    for _ in 0..100 {
        black_box(predictor.predict(&input).is_some());
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("predict_sample", |b| b.iter(predict_sample));
    c.bench_function("predict_long_sequence", |b| b.iter(predict_long_sequence));
    c.bench_function("predict_cached", |b| b.iter(predict_cached));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
