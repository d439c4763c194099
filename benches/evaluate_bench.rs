//! Benchmarks for basis-expansion evaluation.
//!
//! Run with: `cargo bench --bench evaluate_bench`
//!
//! Compares the summed evaluation across bases and degrees on a fixed point set.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ndarray::{Array1, ArrayD};
use polybasis::{ChebyshevBasis, LagrangeBasis, LegendreBasis, MonomialBasis, PolynomialBasis};

const N_POINTS: usize = 1024;

fn points() -> ArrayD<f64> {
    Array1::linspace(-1.0, 1.0, N_POINTS).into_dyn()
}

fn coefficients(n: usize) -> Vec<f64> {
    (0..n).map(|i| 1.0 / (i + 1) as f64).collect()
}

/// Benchmark `evaluate` for each basis at increasing degree.
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let x = points();

    for degree in [2, 4, 8, 16] {
        let coeffs = coefficients(degree + 1);

        let monomial = MonomialBasis::new(degree);
        group.bench_with_input(BenchmarkId::new("monomial", degree), &degree, |b, _| {
            b.iter(|| monomial.evaluate(black_box(&coeffs), black_box(x.view())));
        });

        let legendre = LegendreBasis::new(degree);
        group.bench_with_input(BenchmarkId::new("legendre", degree), &degree, |b, _| {
            b.iter(|| legendre.evaluate(black_box(&coeffs), black_box(x.view())));
        });

        let chebyshev = ChebyshevBasis::new(degree);
        group.bench_with_input(BenchmarkId::new("chebyshev", degree), &degree, |b, _| {
            b.iter(|| chebyshev.evaluate(black_box(&coeffs), black_box(x.view())));
        });

        if let Ok(lagrange) = LagrangeBasis::gauss_lobatto(degree) {
            group.bench_with_input(BenchmarkId::new("lagrange", degree), &degree, |b, _| {
                b.iter(|| lagrange.evaluate(black_box(&coeffs), black_box(x.view())));
            });
        }
    }

    group.finish();
}

/// Benchmark the boundary conversion of integer inputs.
fn bench_evaluate_points(c: &mut Criterion) {
    let basis = ChebyshevBasis::new(8);
    let coeffs = coefficients(9);
    let x: Vec<i32> = (0..N_POINTS as i32).map(|i| i % 3 - 1).collect();

    c.bench_function("evaluate_points_i32", |b| {
        b.iter(|| basis.evaluate_points(black_box(&coeffs), black_box(&x)));
    });
}

criterion_group!(benches, bench_evaluate, bench_evaluate_points);
criterion_main!(benches);
