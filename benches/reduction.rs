use criterion::{criterion_group, criterion_main, Criterion};
use echelon::elimination::{reduce, EliminationSettings, History};
use echelon::solve::solve_single;
use echelon::Matrix;
use num_rational::Rational64;

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant augmented systems
// ---------------------------------------------------------------------------

fn augmented_f64(n: usize) -> Matrix<f64> {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..=n)
                .map(|j| ((i + 1) * (j + 2) % 7) as f64 + if i == j { 10.0 } else { 0.0 })
                .collect()
        })
        .collect();
    Matrix::from_rows(&rows).unwrap()
}

fn augmented_rational(n: usize) -> Matrix<Rational64> {
    augmented_f64(n).map(|x| Rational64::from_integer(x as i64))
}

// ---------------------------------------------------------------------------
// Traced vs untraced reduction
// ---------------------------------------------------------------------------

fn reduce_f64(c: &mut Criterion) {
    for n in [4, 8, 16] {
        let mut g = c.benchmark_group(format!("reduce_f64_{}", n));
        let aug = augmented_f64(n);
        let s = EliminationSettings::default();
        g.bench_function("untraced", |b| {
            b.iter(|| reduce(std::hint::black_box(&aug), n, &s, None).unwrap())
        });
        g.bench_function("traced", |b| {
            b.iter(|| {
                let mut h = History::new();
                let red = reduce(std::hint::black_box(&aug), n, &s, Some(&mut h)).unwrap();
                (red, h)
            })
        });
        g.finish();
    }
}

fn reduce_rational(c: &mut Criterion) {
    let n = 6;
    let mut g = c.benchmark_group("reduce_rational_6");
    let aug = augmented_rational(n);
    let s = EliminationSettings::default();
    g.bench_function("untraced", |b| {
        b.iter(|| reduce(std::hint::black_box(&aug), n, &s, None).unwrap())
    });
    g.bench_function("traced", |b| {
        b.iter(|| {
            let mut h = History::new();
            let red = reduce(std::hint::black_box(&aug), n, &s, Some(&mut h)).unwrap();
            (red, h)
        })
    });
    g.finish();
}

// ---------------------------------------------------------------------------
// Full solve
// ---------------------------------------------------------------------------

fn solve_f64(c: &mut Criterion) {
    let n = 8;
    let aug = augmented_f64(n);
    let a = aug.leading_columns(n).unwrap();
    let rhs = aug.column(n).unwrap();
    let s = EliminationSettings::default();
    c.bench_function("solve_f64_8", |b| {
        b.iter(|| solve_single(std::hint::black_box(&a), std::hint::black_box(&rhs), &s).unwrap())
    });
}

criterion_group!(benches, reduce_f64, reduce_rational, solve_f64);
criterion_main!(benches);
