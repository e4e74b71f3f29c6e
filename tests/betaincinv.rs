//! Cross-module properties of the inverse incomplete beta kernel.

use betainv::special::betainc;
use betainv::{betaincinv, kernel_betaincinv};

const SHAPES: [f64; 8] = [0.1, 0.5, 1.0, 2.0, 3.0, 7.5, 20.0, 100.0];

/// Probability pairs (p, q) with q formed independently so extreme tails
/// keep full precision.
const PROBS: [(f64, f64); 7] = [
    (1e-6, 1.0 - 1e-6),
    (0.01, 0.99),
    (0.3, 0.7),
    (0.5, 0.5),
    (0.7, 0.3),
    (0.99, 0.01),
    (1.0 - 1e-6, 1e-6),
];

// ── Round trip ───────────────────────────────────────────────────────

#[test]
fn round_trip_over_parameter_grid() {
    for &a in &SHAPES {
        for &b in &SHAPES {
            for &(p, q) in &PROBS {
                let (x, y) = kernel_betaincinv(a, b, p, q);
                assert!(
                    (0.0..=1.0).contains(&x),
                    "x out of range: a={a}, b={b}, p={p} -> {x}"
                );
                // Whichever tail is smaller is the better-conditioned
                // check; the kernel iterates on it too.
                let (err, scale) = if p <= q {
                    ((betainc(a, b, x).unwrap() - p).abs(), p)
                } else {
                    ((betainc(b, a, y).unwrap() - q).abs(), q)
                };
                assert!(
                    err <= 1e-7 * scale.max(1e-10),
                    "round trip: a={a}, b={b}, p={p}: x={x}, err={err}"
                );
            }
        }
    }
}

// ── Complementarity ──────────────────────────────────────────────────

#[test]
fn returned_pair_sums_to_one() {
    for &a in &SHAPES {
        for &b in &SHAPES {
            for &(p, q) in &PROBS {
                let (x, y) = kernel_betaincinv(a, b, p, q);
                assert!(
                    (x + y - 1.0).abs() <= f64::EPSILON,
                    "complementarity: a={a}, b={b}, p={p}: x={x}, y={y}"
                );
            }
        }
    }
}

// ── Symmetry ─────────────────────────────────────────────────────────

#[test]
fn swapping_parameters_complements_the_result() {
    for &a in &SHAPES {
        for &b in &SHAPES {
            for &(p, q) in &PROBS {
                let (x, _) = kernel_betaincinv(a, b, p, q);
                let (_, y_swapped) = kernel_betaincinv(b, a, q, p);
                assert!(
                    (x - y_swapped).abs() <= 1e-9 * x.max(1e-12),
                    "symmetry: a={a}, b={b}, p={p}: {x} vs {y_swapped}"
                );
            }
        }
    }
}

// ── Monotonicity ─────────────────────────────────────────────────────

#[test]
fn quantiles_increase_with_probability() {
    for &a in &[0.3, 1.0, 4.0, 40.0] {
        for &b in &[0.6, 2.0, 15.0] {
            let mut last = 0.0;
            for &(p, q) in &PROBS {
                let (x, _) = kernel_betaincinv(a, b, p, q);
                assert!(
                    x >= last,
                    "monotonicity: a={a}, b={b}, p={p}: {x} < {last}"
                );
                last = x;
            }
        }
    }
}

// ── Wrapper ──────────────────────────────────────────────────────────

#[test]
fn wrapper_agrees_with_kernel() {
    for &p in &[1e-6f64, 0.01, 0.3, 0.5, 0.7, 0.99] {
        let q = 1.0 - p;
        let (x, _) = kernel_betaincinv(4.5, 1.5, p, q);
        assert_eq!(betaincinv(4.5, 1.5, p, false).unwrap(), x);
        // The upper-tail query inverts the complement; 1 − q need not be
        // bitwise p, so allow the last few ulps to move.
        let xu = betaincinv(4.5, 1.5, q, true).unwrap();
        assert!((xu - x).abs() <= 1e-10 * x.max(1e-12));
    }
}

#[test]
fn wrapper_rejects_bad_input() {
    assert!(betaincinv(0.0, 1.0, 0.5, false).is_err());
    assert!(betaincinv(1.0, 1.0, -0.1, false).is_err());
    assert!(betaincinv(1.0, 1.0, 1.1, false).is_err());
    assert!(betaincinv(f64::NAN, 1.0, 0.5, false).is_err());
}
