use criterion::{black_box, criterion_group, criterion_main, Criterion};
use laplace_coeffs::{coefficient, derivative, LaplaceTable, Method};

const ALPHA: f64 = 0.480597;

// ---------------------------------------------------------------------------
// Base coefficient: closed form vs. quadrature
// ---------------------------------------------------------------------------

fn coefficient_methods(c: &mut Criterion) {
    let mut g = c.benchmark_group("coefficient");
    for (name, method) in [("hypergeometric", Method::Hypergeometric), ("quadrature", Method::Quadrature)] {
        g.bench_function(name, |bench| {
            bench.iter(|| coefficient(black_box(ALPHA), black_box(0.5), black_box(3), method).unwrap())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Derivative recursion: plain vs. memoized
// ---------------------------------------------------------------------------

fn derivative_orders(c: &mut Criterion) {
    let mut g = c.benchmark_group("derivative");
    for n in [1, 3, 6] {
        g.bench_function(format!("recursive_n{n}"), |bench| {
            bench.iter(|| derivative(black_box(ALPHA), 0.5, 2, n, Method::Hypergeometric).unwrap())
        });
        g.bench_function(format!("table_n{n}"), |bench| {
            bench.iter(|| {
                let mut table = LaplaceTable::new(black_box(ALPHA), 0.5, Method::Hypergeometric).unwrap();
                table.derivative(2, n).unwrap()
            })
        });
    }
    g.finish();
}

criterion_group!(benches, coefficient_methods, derivative_orders);
criterion_main!(benches);
