use criterion::{black_box, criterion_group, criterion_main, Criterion};

use statrs::distribution::{Beta, ContinuousCDF};

// ---------------------------------------------------------------------------
// Parameter sets covering the kernel's main regimes: closed form, both
// shapes below one, Student's-t, and the asymptotic expansions.
// ---------------------------------------------------------------------------

const CASES: [(f64, f64); 5] = [
    (1.0, 6.0),   // closed form
    (0.3, 0.7),   // inflection-point seed
    (3.0, 0.5),   // Student's-t seed
    (20.0, 30.0), // trigonometric expansion
    (100.0, 0.7), // incomplete-gamma expansion
];

const PROBS: [f64; 3] = [0.01, 0.5, 0.99];

fn invert_beta(c: &mut Criterion) {
    let mut g = c.benchmark_group("betaincinv");

    g.bench_function("betainv", |bench| {
        bench.iter(|| {
            let mut acc = 0.0;
            for &(a, b) in &CASES {
                for &p in &PROBS {
                    let (x, _) = betainv::kernel_betaincinv(
                        black_box(a),
                        black_box(b),
                        black_box(p),
                        black_box(1.0 - p),
                    );
                    acc += x;
                }
            }
            acc
        })
    });

    g.bench_function("statrs", |bench| {
        bench.iter(|| {
            let mut acc = 0.0;
            for &(a, b) in &CASES {
                let dist = Beta::new(a, b).unwrap();
                for &p in &PROBS {
                    acc += dist.inverse_cdf(black_box(p));
                }
            }
            acc
        })
    });

    g.finish();
}

fn invert_students_t(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse_students_t");

    g.bench_function("betainv", |bench| {
        bench.iter(|| {
            let mut acc = 0.0;
            for &df in &[1.0, 2.0, 6.0, 2.5, 10.0] {
                for &u in &PROBS {
                    acc += betainv::inverse_students_t(black_box(df), black_box(u), black_box(1.0 - u));
                }
            }
            acc
        })
    });

    g.finish();
}

criterion_group!(benches, invert_beta, invert_students_t);
criterion_main!(benches);
