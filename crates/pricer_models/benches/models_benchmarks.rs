//! Criterion benchmarks for pricer_models.
//!
//! Measures the Black-Scholes pricer and the implied volatility solve across
//! moneyness and both discount conventions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{
    call_price, implied_volatility, BlackScholes, DiscountConvention, ImpliedVolSolver,
};

/// Benchmark the free call formula and the model struct.
fn bench_black_scholes(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes");

    group.bench_function("call_price", |b| {
        b.iter(|| {
            call_price(
                black_box(100.0),
                black_box(100.0),
                black_box(0.05),
                black_box(1.0),
                black_box(0.2),
            )
        });
    });

    let model = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    group.bench_function("price_and_vega", |b| {
        b.iter(|| {
            let price = model.price_call(black_box(110.0), black_box(0.5));
            let vega = model.vega(black_box(110.0), black_box(0.5));
            (price, vega)
        });
    });

    group.finish();
}

/// Benchmark implied volatility recovery at several strikes.
fn bench_implied_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");

    for strike in [80.0, 100.0, 120.0] {
        let market_price = call_price(100.0, strike, 0.05, 1.0, 0.3);
        group.bench_with_input(
            BenchmarkId::new("standard", strike as u32),
            &market_price,
            |b, &price| {
                b.iter(|| {
                    implied_volatility(100.0, strike, 0.05, 1.0, black_box(price), 0.2)
                });
            },
        );
    }

    // Documented example under the discounted-spot convention
    let solver = ImpliedVolSolver::new().convention(DiscountConvention::DiscountedSpot);
    group.bench_function("discounted_spot_example", |b| {
        b.iter(|| solver.solve(100.0, 100.0, 0.05, 1.0, black_box(5.0), black_box(0.2)));
    });

    group.finish();
}

criterion_group!(benches, bench_black_scholes, bench_implied_volatility);
criterion_main!(benches);
