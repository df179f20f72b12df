use criterion::{Criterion, criterion_group, criterion_main};
use option_pricer_rs::prelude::*;
use option_pricer_rs::pricing::{SensitivityMeasure, sensitivity_sweep};
use std::hint::black_box;

fn pricing_benchmarks(c: &mut Criterion) {
    let call = OptionContract::new(0.05, 100.0, 100.0, 1.0, 0.2, OptionType::Call)
        .expect("valid contract");

    let mut group = c.benchmark_group("pricing");
    group.bench_function("price", |b| b.iter(|| black_box(&call).price()));
    group.bench_function("greeks", |b| b.iter(|| black_box(&call).greeks()));
    group.bench_function("sensitivity_sweep_100", |b| {
        b.iter(|| sensitivity_sweep(black_box(&call), SensitivityMeasure::Gamma, 100))
    });
    group.finish();
}

fn solver_benchmarks(c: &mut Criterion) {
    let params = MarketParams::call(100.0, 110.0, 0.5, 0.03);
    let market_price = BlackScholes::price(&params, 0.35);
    let config = SolverConfig::default();

    let mut group = c.benchmark_group("implied_volatility");
    group.bench_function("newton", |b| {
        b.iter(|| solve_iv(&params, black_box(market_price), 0.5, &config))
    });
    group.bench_function("bisection", |b| {
        b.iter(|| solve_iv_bisection(&params, black_box(market_price), &config, 0.01, 3.0))
    });
    group.finish();
}

criterion_group!(benches, pricing_benchmarks, solver_benchmarks);
criterion_main!(benches);
