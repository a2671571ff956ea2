//! Annealing benchmarks: single-order latency and batch throughput.

#![allow(clippy::unwrap_used, missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use risk_gate::config::BatchConfig;
use risk_gate::{
    AnnealingEngine, AnnealingParams, BatchValidateUseCase, MarketSnapshot, Order,
    QuboModelBuilder, RiskMetrics, RiskValidator,
};

fn metrics() -> RiskMetrics {
    RiskMetrics::new(0.1, 0.2, 0.3, 0.5)
}

fn bench_search(c: &mut Criterion) {
    let qubo = QuboModelBuilder::new().build(&Order::new(10.0, 2.0), &metrics());
    let mut group = c.benchmark_group("annealing_search");

    for runs in [1usize, 4, 8] {
        let engine =
            AnnealingEngine::new(AnnealingParams::default().with_parallel_runs(runs).with_seed(1))
                .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(runs), &runs, |b, _| {
            b.iter(|| black_box(engine.search(black_box(&qubo))));
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let validator = RiskValidator::with_defaults().unwrap();
    let order = Order::new(10.0, 2.0);
    let market = MarketSnapshot::empty();
    let metrics = metrics();

    c.bench_function("validate_single_order", |b| {
        b.iter(|| black_box(validator.validate(&order, &market, &metrics).unwrap()));
    });
}

fn bench_batch(c: &mut Criterion) {
    let use_case = BatchValidateUseCase::new(
        RiskValidator::with_defaults().unwrap(),
        BatchConfig::default(),
    );
    let orders: Vec<Order> = (0..64)
        .map(|i| Order::new(1.0 + f64::from(i), 2.0))
        .collect();
    let market = MarketSnapshot::empty();
    let metrics = metrics();

    c.bench_function("validate_batch_64", |b| {
        b.iter(|| black_box(use_case.execute(&orders, &market, &metrics).unwrap()));
    });
}

criterion_group!(benches, bench_search, bench_validate, bench_batch);
criterion_main!(benches);
