//! Student's-t quantile approximation.
//!
//! Dispatches over degrees of freedom and probability regime: exact
//! closed forms for df ∈ {1, 2, 4}, a damped Newton solve of the df = 6
//! resolvent quintic, Shaw's body and tail series for small df, Hill's
//! approximation for moderate df, and the normal limit for astronomically
//! large df. The series coefficient tables are the published constants
//! (Shaw 2006; Hill 1970).

use crate::special::{erfc_inv, gamma_delta_ratio};
use crate::tools::{evalpoly, evalpoly_vals};
use crate::traits::FloatScalar;

/// The u-quantile of the Student's-t distribution with `df` degrees of
/// freedom, given the complementary pair `u + v = 1`.
///
/// Passing both tails keeps extreme quantiles exact: the function works
/// on whichever of `u`, `v` is smaller and restores the sign at the end.
///
/// # Example
///
/// ```
/// use betainv::inverse_students_t;
///
/// // Median of any t distribution is 0.
/// assert_eq!(inverse_students_t(1.0_f64, 0.5, 0.5), 0.0);
///
/// // df = 2 has the closed form (2u−1)/√(2uv).
/// let t = inverse_students_t(2.0_f64, 0.9, 0.1);
/// assert!((t - 0.8 / (2.0_f64 * 0.9 * 0.1).sqrt()).abs() < 1e-14);
/// ```
pub fn inverse_students_t<T: FloatScalar>(df: T, u: T, v: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();
    let pi = T::from(core::f64::consts::PI).unwrap();

    // The distribution is symmetric: work on the lower tail and negate
    // at the end if the tails were swapped.
    let mut u = u;
    let mut v = v;
    let mut invert = false;
    if u > v {
        core::mem::swap(&mut u, &mut v);
        invert = true;
    }

    let int_df = if df == df.floor() && df < T::from(20.0).unwrap() {
        df.to_i64().unwrap_or(0)
    } else {
        0
    };

    let result = match int_df {
        1 => {
            // Cauchy: inverse CDF is tan((u − 1/2)π), evaluated as
            // −cos(πu)/sin(πu) which stays exact near u = 1/2.
            if u == half {
                zero
            } else {
                -(pi * u).cos() / (pi * u).sin()
            }
        }
        2 => {
            // Exact result, see Walter Bailey (1991):
            (two * u - one) / (two * u * v).sqrt()
        }
        4 => {
            // Exact result, see Walter Bailey (1991):
            let alpha = T::from(4.0).unwrap() * u * v;
            let root_alpha = alpha.sqrt();
            let r = T::from(4.0).unwrap() * (root_alpha.acos() / T::from(3.0).unwrap()).cos()
                / root_alpha;
            let x = (r - T::from(4.0).unwrap()).sqrt();
            if u - half < zero {
                -x
            } else {
                x
            }
        }
        6 => inverse_students_t_df6(u),
        _ => inverse_students_t_general(df, u),
    };

    if invert {
        -result
    } else {
        result
    }
}

/// Map a Student's-t quantile back to incomplete-beta space for the
/// kernel's b = 1/2 special case: returns `(x, y)` with
/// `x = df/(df + t²)` and `y = t²/(df + t²)` computed independently.
pub(crate) fn find_ibeta_inv_from_t_dist<T: FloatScalar>(a: T, p: T) -> (T, T) {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let u = p / two;
    let v = one - u;
    let df = a * two;
    let t = inverse_students_t(df, u, v);
    let t2 = t * t;
    (df / (df + t2), t2 / (df + t2))
}

/// General (non-closed-form) regime selection.
fn inverse_students_t_general<T: FloatScalar>(df: T, u: T) -> T {
    let two = T::from(2.0).unwrap();

    if df > T::from(268435456.0).unwrap() {
        // df > 2^28: normal limit.
        -erfc_inv(two * u) * two.sqrt()
    } else if df < T::from(3.0).unwrap() {
        // Roughly linear crossover between Shaw's body and tail series:
        let crossover = T::from(0.2742).unwrap() - df * T::from(0.0242143).unwrap();
        if u > crossover {
            inverse_students_t_body_series(df, u)
        } else {
            inverse_students_t_tail_series(df, u)
        }
    } else {
        // Hill's method, switching to the tail series in the extreme
        // tail; the crossover is roughly exponential in −df:
        let n = (df / T::from(-0.654).unwrap())
            .round()
            .to_i32()
            .unwrap_or(i32::MIN / 2);
        let crossover = two.powi(n);
        if u > crossover {
            inverse_students_t_hill(df, u)
        } else {
            inverse_students_t_tail_series(df, u)
        }
    }
}

/// df = 6: globally convergent damped Newton iteration on the resolvent
/// quintic 4·a·p⁵ − 540·p² − 1215·p − 4374 = 0 with a = 4u(1−u), seeded
/// per Shaw's online supplement; the quantile is ±√(p − 6).
fn inverse_students_t_df6<T: FloatScalar>(u: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();
    let df = T::from(6.0).unwrap();

    // The seed underflows here; Hill's method keeps working.
    if u < T::from(1e-150).unwrap() {
        return inverse_students_t_hill(df, u);
    }

    // About two thirds of a double's bits; the update is quadratically
    // convergent so the cap is a formality.
    let tolerance = T::from(2.0_f64.powi(-35)).unwrap();

    let a = T::from(4.0).unwrap() * (u - u * u); // 1 − 4(u − 1/2)²
    let b = a.cbrt();
    let c = T::from(0.85498797333834849467655443627193).unwrap();
    let mut p = df * (one + c * (one / b - one));
    for _ in 0..32 {
        let p2 = p * p;
        let p4 = p2 * p2;
        let p5 = p * p4;
        let p0 = p;
        // Newton update, eq. 41 of the supplement:
        p = two
            * (T::from(8.0).unwrap() * a * p5 - T::from(270.0).unwrap() * p2
                + T::from(2187.0).unwrap())
            / (T::from(5.0).unwrap()
                * (T::from(4.0).unwrap() * a * p4 - T::from(216.0).unwrap() * p
                    - T::from(243.0).unwrap()));
        if ((p - p0) / p).abs() <= tolerance {
            break;
        }
    }
    // Extract the quantile (eq. 45):
    let x = (p - df).sqrt();
    if u - half < zero {
        -x
    } else {
        x
    }
}

/// Hill's asymptotic approximation (Hill 1970, algorithm 396).
fn inverse_students_t_hill<T: FloatScalar>(ndf: T, u: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let half_pi = T::from(core::f64::consts::FRAC_PI_2).unwrap();

    let a = one / (ndf - T::from(0.5).unwrap());
    let b = T::from(48.0).unwrap() / (a * a);
    let mut c = ((T::from(20700.0).unwrap() * a / b - T::from(98.0).unwrap()) * a
        - T::from(16.0).unwrap())
        * a
        + T::from(96.36).unwrap();
    let d = ((T::from(94.5).unwrap() / (b + c) - three) / b + one) * (a * half_pi).sqrt() * ndf;
    let mut y = (d * two * u).powf(two / ndf);

    if y > T::from(0.05).unwrap() + a {
        // Asymptotic inverse expansion about the normal:
        let x = -erfc_inv(two * u) * two.sqrt();
        y = x * x;

        if ndf < T::from(5.0).unwrap() {
            c = c + T::from(0.3).unwrap() * (ndf - T::from(4.5).unwrap())
                * (x + T::from(0.6).unwrap());
        }
        c = (((T::from(0.05).unwrap() * d * x - T::from(5.0).unwrap()) * x
            - T::from(7.0).unwrap())
            * x
            - two)
            * x
            + b
            + c;
        y = (((((T::from(0.4).unwrap() * y + T::from(6.3).unwrap()) * y
            + T::from(36.0).unwrap())
            * y
            + T::from(94.5).unwrap())
            / c
            - y
            - three)
            / b
            + one)
            * x;
        y = (a * y * y).exp_m1();
    } else {
        y = ((one
            / (((ndf + T::from(6.0).unwrap()) / (ndf * y) - T::from(0.089).unwrap() * d
                - T::from(0.822).unwrap())
                * (ndf + two)
                * three)
            + T::from(0.5).unwrap() / (ndf + T::from(4.0).unwrap()))
            * y
            - one)
            * (ndf + one)
            / (ndf + two)
            + one / y;
    }
    let q = (ndf * y).sqrt();
    -q
}

// Shaw's body-series coefficients: each entry of the odd series in v is a
// polynomial in 1/df, ascending in 1/df (Shaw 2006, eq. 57).
const BODY_C2: [f64; 2] = [0.16666666666666666667, 0.16666666666666666667];
const BODY_C3: [f64; 3] = [
    0.058333333333333333333,
    0.066666666666666666667,
    0.0083333333333333333333,
];
const BODY_C4: [f64; 4] = [
    0.025198412698412698413,
    0.026785714285714285714,
    0.0017857142857142857143,
    0.00019841269841269841270,
];
const BODY_C5: [f64; 5] = [
    0.012039792768959435626,
    0.010559964726631393298,
    -0.0011078042328042328042,
    0.00037477954144620811287,
    2.7557319223985890653e-6,
];
const BODY_C6: [f64; 6] = [
    0.0061039211560044893378,
    0.0038370059724226390893,
    -0.0016095979637646304313,
    0.00059458674042007375341,
    -0.000062705427288760622094,
    2.5052108385441718775e-8,
];
const BODY_C7: [f64; 7] = [
    0.0032177478835464946576,
    0.0010898206731540064873,
    -0.0012579159844784844785,
    0.00069084207973096861986,
    -0.00016376804137220803887,
    0.000015401265401265401265,
    1.6059043836821614599e-10,
];
const BODY_C8: [f64; 8] = [
    0.0017438262298340009980,
    0.000033530976880017885309,
    -0.00076245135440323932387,
    0.00064513046951456342991,
    -0.00024947258047043099953,
    0.000049255746366361445727,
    -3.9851014346715404916e-6,
    7.6471637318198164759e-13,
];
const BODY_C9: [f64; 9] = [
    0.00096472747321388644237,
    -0.00031101086326318780412,
    -0.00036307660358786885787,
    0.00051406605788341121363,
    -0.00029133414466938067350,
    0.000090867107935219902229,
    -0.000015303004486655377567,
    1.0914179173496789432e-6,
    2.8114572543455207632e-15,
];
const BODY_C10: [f64; 10] = [
    0.00054229262813129686486,
    -0.00036942667800009661203,
    -0.00010230378073700412687,
    0.00035764655430568632777,
    -0.00028690924218514613987,
    0.00012645437628698076975,
    -0.000033202652391372058698,
    4.8903045291975346210e-6,
    -3.1239569599829868045e-7,
    8.2206352466243297170e-18,
];

/// Shaw's body series (Shaw 2006, section 5): an odd polynomial in the
/// normalized variable v of eq. 56, with coefficients depending only on
/// 1/df.
fn inverse_students_t_body_series<T: FloatScalar>(df: T, u: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let pi = T::from(core::f64::consts::PI).unwrap();

    // Normalized variable, eq. 56:
    let v = gamma_delta_ratio(df / (one + one), half) * (df * pi).sqrt() * (u - half);

    let inv = one / df;
    let mut c = [T::zero(); 11];
    c[1] = one;
    c[2] = evalpoly(&BODY_C2, inv);
    c[3] = evalpoly(&BODY_C3, inv);
    c[4] = evalpoly(&BODY_C4, inv);
    c[5] = evalpoly(&BODY_C5, inv);
    c[6] = evalpoly(&BODY_C6, inv);
    c[7] = evalpoly(&BODY_C7, inv);
    c[8] = evalpoly(&BODY_C8, inv);
    c[9] = evalpoly(&BODY_C9, inv);
    c[10] = evalpoly(&BODY_C10, inv);

    // Odd series: v·(c1 + c2·v² + c3·v⁴ + …)
    v * evalpoly_vals(&c[1..], v * v)
}

/// Shaw's tail series (Shaw 2006, section 6), used for the extreme tail
/// where the body series loses its footing. Carries the correction terms
/// through fifth order.
fn inverse_students_t_tail_series<T: FloatScalar>(df: T, v: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();
    let pi = T::from(core::f64::consts::PI).unwrap();

    // Branch-point error term, eq. 60:
    let w = gamma_delta_ratio(df / two, half) * (df * pi).sqrt() * v;

    let mut np2 = df + two;
    let mut np4 = df + T::from(4.0).unwrap();
    let np6 = df + T::from(6.0).unwrap();

    // The d(k) depend only on df (p. 15 of Shaw):
    let mut d = [T::zero(); 6];
    d[0] = one;
    d[1] = -(df + one) / (two * np2);
    np2 = np2 * (df + two);
    d[2] = -df * (df + one) * (df + T::from(3.0).unwrap())
        / (T::from(8.0).unwrap() * np2 * np4);
    np2 = np2 * (df + two);
    d[3] = -df
        * (df + one)
        * (df + T::from(5.0).unwrap())
        * evalpoly(&[-2.0, 7.0, 3.0], df)
        / (T::from(48.0).unwrap() * np2 * np4 * np6);
    np2 = np2 * (df + two);
    np4 = np4 * (df + T::from(4.0).unwrap());
    d[4] = -df
        * (df + one)
        * (df + T::from(7.0).unwrap())
        * evalpoly(&[64.0, -336.0, 286.0, 465.0, 154.0, 15.0], df)
        / (T::from(384.0).unwrap() * np2 * np4 * np6 * (df + T::from(8.0).unwrap()));
    np2 = np2 * (df + two);
    d[5] = -df
        * (df + one)
        * (df + T::from(3.0).unwrap())
        * (df + T::from(9.0).unwrap())
        * evalpoly(&[-128.0, 928.0, -2020.0, 600.0, 1573.0, 452.0, 35.0], df)
        / (T::from(1280.0).unwrap()
            * np2
            * np4
            * np6
            * (df + T::from(8.0).unwrap())
            * (df + T::from(10.0).unwrap()));

    // Bring everything together (eq. 62 of Shaw):
    let rn = df.sqrt();
    let div = (rn * w).powf(one / df);
    let power = div * div;
    let result = rn * evalpoly_vals(&d, power) / div;
    -result
}
