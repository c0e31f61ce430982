//! Benchmarks for indicator implementations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use feature_core::traits::{RangeIndicator, SeriesIndicator};
use feature_indicators::{Ema, Macd, Rsi, Sma, Stochastic};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn benchmark_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("SMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("window_10", size), &data, |b, data| {
            let sma = Sma::new(10);
            b.iter(|| sma.compute(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_ema(c: &mut Criterion) {
    let mut group = c.benchmark_group("EMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("span_10", size), &data, |b, data| {
            let ema = Ema::new(10);
            b.iter(|| ema.compute(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("period_14", size), &data, |b, data| {
            let rsi = Rsi::new(14);
            b.iter(|| rsi.compute(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_macd(c: &mut Criterion) {
    let mut group = c.benchmark_group("MACD");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("12_26_9", size), &data, |b, data| {
            let macd = Macd::new();
            b.iter(|| macd.compute(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_stochastic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stochastic");

    for size in [1000, 10000, 100000].iter() {
        let close = generate_test_data(*size);
        let high: Vec<f64> = close.iter().map(|c| c + 2.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 2.0).collect();

        group.bench_with_input(
            BenchmarkId::new("14_3", size),
            &(high, low, close),
            |b, (high, low, close)| {
                let stoch = Stochastic::new();
                b.iter(|| stoch.compute(black_box(high), black_box(low), black_box(close)))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sma,
    benchmark_ema,
    benchmark_rsi,
    benchmark_macd,
    benchmark_stochastic
);
criterion_main!(benches);
