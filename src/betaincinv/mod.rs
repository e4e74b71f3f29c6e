//! Inverse of the regularized incomplete beta function.
//!
//! [`kernel_betaincinv`] inverts I_x(a, b) for pre-validated scalar
//! inputs: it selects an initial-estimate strategy from the shape
//! parameters and probability pair (closed forms, a Student's-t mapping,
//! Temme's asymptotic expansions, or inflection-point seeds), polishes
//! with bracketed Halley iteration, and returns `(x, 1−x)` as an
//! independent pair so neither tail loses precision. [`betaincinv`] is
//! the validating front door.
//!
//! The kernel never fails: every numerical edge case (zero derivatives,
//! boundary probabilities, underflow) is absorbed by internal guards, and
//! hitting the iteration cap silently returns the best estimate.
//!
//! # Example
//!
//! ```
//! use betainv::betaincinv;
//!
//! // Median of Beta(2, 2) is 1/2.
//! let x = betaincinv(2.0_f64, 2.0, 0.5, false).unwrap();
//! assert!((x - 0.5).abs() < 1e-14);
//! ```

use core::mem::swap;

use crate::roots::halley_iterate;
use crate::special::{beta, betainc, SpecialError};
use crate::traits::FloatScalar;

mod ibeta_roots;
mod students_t;
mod temme;


pub use students_t::inverse_students_t;

use ibeta_roots::ibeta_roots;
use students_t::find_ibeta_inv_from_t_dist;
use temme::{temme1, temme2, temme3};

/// Target binary digits for the final Halley polish.
const DIGITS: i32 = 32;

/// Iteration cap for the final Halley polish.
const MAX_ITER: usize = 1000;

/// Inverse regularized incomplete beta function, validated front end.
///
/// With `upper == false`, returns x such that I_x(a, b) = p; with
/// `upper == true`, returns x such that 1 − I_x(a, b) = p.
///
/// # Errors
///
/// [`SpecialError::DomainError`] if a ≤ 0, b ≤ 0, p is outside [0, 1],
/// or any input is NaN.
///
/// # Example
///
/// ```
/// use betainv::{betaincinv, special::betainc};
///
/// let x = betaincinv(3.0_f64, 5.0, 0.25, false).unwrap();
/// assert!((betainc(3.0, 5.0, x).unwrap() - 0.25).abs() < 1e-12);
///
/// // The two tails are complementary:
/// let xu = betaincinv(3.0_f64, 5.0, 0.75, true).unwrap();
/// assert!((x - xu).abs() < 1e-12);
/// ```
pub fn betaincinv<T: FloatScalar>(a: T, b: T, p: T, upper: bool) -> Result<T, SpecialError> {
    let zero = T::zero();
    let one = T::one();

    if a.is_nan() || b.is_nan() || p.is_nan() {
        return Err(SpecialError::DomainError);
    }
    if a <= zero || b <= zero {
        return Err(SpecialError::DomainError);
    }
    if p < zero || p > one {
        return Err(SpecialError::DomainError);
    }

    if upper {
        Ok(kernel_betaincinv(a, b, one - p, p).0)
    } else {
        Ok(kernel_betaincinv(a, b, p, one - p).0)
    }
}

/// Inverse incomplete beta kernel.
///
/// Computes `(x, y)` with I_x(a, b) = p and `y = 1 − x` returned
/// independently. The probability complement `q = 1 − p` is supplied by
/// the caller rather than recomputed so that extreme tails keep full
/// precision.
///
/// Assumes pre-validated input: `a > 0`, `b > 0`, `p, q ∈ [0, 1]`,
/// `p + q = 1`. Garbage in, garbage out — no validation is performed
/// here; use [`betaincinv`] for checked access.
///
/// # Example
///
/// ```
/// use betainv::kernel_betaincinv;
///
/// // Uniform distribution: x = p.
/// let (x, y) = kernel_betaincinv(1.0_f64, 1.0, 0.3, 0.7);
/// assert_eq!(x, 0.3);
/// assert_eq!(y, 0.7);
/// ```
pub fn kernel_betaincinv<T: FloatScalar>(a: T, b: T, p: T, q: T) -> (T, T) {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let half = T::from(0.5).unwrap();
    let five = T::from(5.0).unwrap();
    let half_pi = T::from(core::f64::consts::FRAC_PI_2).unwrap();
    let eps = T::epsilon();
    let min_norm = T::min_positive_value();

    let mut a = a;
    let mut b = b;
    let mut p = p;
    let mut q = q;

    // Trivial boundaries first.
    if q == zero {
        return (one, zero);
    }
    if p == zero {
        return (zero, one);
    }

    // When a and p are swapped with b and q the result must be
    // complemented at the very end; `invert` accumulates that parity.
    let mut invert = false;

    if a == one {
        if b == one {
            // Uniform distribution.
            return (p, one - p);
        }
        // Swap things around so this lands in the b == 1 special case.
        swap(&mut a, &mut b);
        swap(&mut p, &mut q);
        invert = true;
    }

    // Depending on the method we may compute x or its complement first.
    let mut x = zero;
    let mut y;

    // Some methods put tighter bounds on the result than [0, 1]:
    let mut lower = zero;
    let mut upper = one;

    if a == half {
        if b == half {
            // Arcsine distribution: closed form via sin².
            x = (p * half_pi).sin();
            x = x * x;
            y = (q * half_pi).sin();
            y = y * y;
            return (x, y);
        }
        if b > half {
            // Put the half-parameter second so the Student's-t case
            // below sees the arguments in the right order.
            swap(&mut a, &mut b);
            swap(&mut p, &mut q);
            invert = !invert;
        }
    }

    // Select the initial-estimate method.
    if b == half && a >= half && p != one {
        // Student's-t distribution in disguise.
        let (xt, yt) = find_ibeta_inv_from_t_dist(a, p);
        x = xt;
        y = yt;
    } else if b == one {
        // Power-function distribution: fully closed form.
        if p < q {
            if a > one {
                x = p.powf(one / a);
                y = -((p.ln() / a).exp_m1());
            } else {
                x = p.powf(one / a);
                y = one - x;
            }
        } else {
            x = ((-q).ln_1p() / a).exp();
            y = -(((-q).ln_1p() / a).exp_m1());
        }
        if invert {
            swap(&mut x, &mut y);
        }
        return (x, y);
    } else if a + b > five {
        // Large parameters: Temme's asymptotic expansions. Begin by
        // making p ≤ 0.5 to dodge cancellation for large p.
        if p > half {
            swap(&mut a, &mut b);
            swap(&mut p, &mut q);
            invert = !invert;
        }
        let minv = a.min(b);
        let maxv = a.max(b);
        if minv.sqrt() > maxv - minv && minv > five {
            // Nearly equal parameters: the curve is almost symmetric and
            // the error-function expansion is the cheapest of the three.
            x = temme1(a, b, p);
            y = one - x;
        } else {
            let r = a + b;
            let theta = (a / r).sqrt().asin();
            let lambda = minv / r;
            if lambda >= T::from(0.2).unwrap() && lambda <= T::from(0.8).unwrap()
                && r >= T::from(10.0).unwrap()
            {
                // Comparable parameters: second expansion, except where
                // the result is so small that a plain power term is both
                // cheaper and safer.
                let ppa = p.powf(one / a);
                if ppa < T::from(0.0025).unwrap() && a + b < T::from(200.0).unwrap() {
                    x = ppa * (a * beta(a, b)).powf(one / a);
                } else {
                    x = temme2(p, r, theta);
                }
                y = one - x;
            } else {
                // Very different magnitudes: the third expansion inverts
                // the incomplete gamma, which needs a ≥ b; swapping may
                // be required. Try the cheap power estimate first and
                // keep it when the complement is tiny.
                if a < b {
                    swap(&mut a, &mut b);
                    swap(&mut p, &mut q);
                    invert = !invert;
                }
                let mut bet = zero;
                if b < two {
                    bet = beta(a, b);
                }
                if bet == zero {
                    y = one;
                } else {
                    y = (b * q * bet).powf(one / b);
                    x = one - y;
                }
                if y > T::from(1.0e-5).unwrap() {
                    x = temme3(a, b, p, q);
                    y = one - x;
                }
            }
        }
    } else if a < one && b < one {
        // Both shapes below one: single inflection point at xs, and the
        // iteration must start on its correct side.
        let mut xs = (one - a) / (two - a - b);
        let fs = betainc(a, b, xs).unwrap_or_else(|_| T::nan()) - p;
        if (fs.abs() / p) < eps * three {
            // The result is at the point of inflection; just return it.
            return if invert {
                (one - xs, xs)
            } else {
                (xs, one - xs)
            };
        }
        if fs < zero {
            swap(&mut a, &mut b);
            swap(&mut p, &mut q);
            invert = !invert;
            xs = one - xs;
        }
        let xg = (a * p * beta(a, b)).powf(one / a);
        x = xg / (one + xg);
        y = one / (one + xg);

        // The result lies below the inflection point, so cap the search:
        if x > xs {
            x = xs;
        }
        upper = xs;
    } else if a > one && b > one {
        // Both shapes above one: inflection points at xs and its
        // complement xs2; start on the correct side of xs.
        let mut xs = (a - one) / (a + b - two);
        let mut xs2 = (b - one) / (a + b - two);
        let ps = betainc(a, b, xs).unwrap_or_else(|_| T::nan()) - p;
        if ps < zero {
            swap(&mut a, &mut b);
            swap(&mut p, &mut q);
            swap(&mut xs, &mut xs2);
            invert = !invert;
        }
        // Estimate x and y, using expm1 for a good y when it is tiny:
        let lx = (p * a * beta(a, b)).ln() / a;
        x = lx.exp();
        y = if x < T::from(0.9).unwrap() {
            one - x
        } else {
            -(lx.exp_m1())
        };

        if b < a && x < T::from(0.2).unwrap() {
            // In this limited range a short series sharpens the estimate.
            let mut ap1 = a - one;
            let bm1 = b - one;
            let a2 = a * a;
            let a3 = a * a2;
            let b2 = b * b;
            let mut terms = [zero; 5];
            terms[1] = one;
            terms[2] = bm1 / ap1;
            ap1 = ap1 * ap1;
            terms[3] = bm1
                * (three * a * b + five * b + a2 - a - T::from(4.0).unwrap())
                / (two * (a + two) * ap1);
            ap1 = ap1 * (a + one);
            terms[4] = bm1
                * (T::from(33.0).unwrap() * a * b2
                    + T::from(31.0).unwrap() * b2
                    + T::from(8.0).unwrap() * a2 * b2
                    - T::from(30.0).unwrap() * a * b
                    - T::from(47.0).unwrap() * b
                    + T::from(11.0).unwrap() * a2 * b
                    + T::from(6.0).unwrap() * a3 * b
                    + T::from(18.0).unwrap()
                    + T::from(4.0).unwrap() * a
                    - a3
                    + a2 * a2
                    - T::from(10.0).unwrap() * a2)
                / (three * (a + three) * (a + two) * ap1);
            x = crate::tools::evalpoly_vals(&terms, x);
        }
        // The result lies below the inflection point, so cap the search:
        if x > xs {
            x = xs;
        }
        upper = xs;
    } else {
        // Exactly one shape above one and a + b small. Make the curve
        // concave with b > a and no inflection points in [0, 1]. A small
        // expected x gets the plain power term; a large one would make
        // the power term iterate "round the corner" nearly forever, so
        // model the curve as a distorted quarter circle instead.
        if b < a {
            swap(&mut a, &mut b);
            swap(&mut p, &mut q);
            invert = !invert;
        }
        if p.powf(one / a) < half {
            x = (p * a * beta(a, b)).powf(one / a);
            if x == zero {
                x = min_norm;
            }
            y = one - x;
        } else {
            // Case: pow(q, 1/b) < 0.1
            y = (one - p.powf(b * beta(a, b))).powf(one / b);
            if y == zero {
                y = min_norm;
            }
            x = one - y;
        }
    }

    // With a seed in hand, iterate on the smaller root for stability:
    if x > half {
        swap(&mut a, &mut b);
        swap(&mut p, &mut q);
        swap(&mut x, &mut y);
        invert = !invert;
        let l = one - upper;
        let u = one - lower;
        lower = l;
        upper = u;
    }

    // Keep the search away from denormals: derivatives blow up there and
    // the iterations would only thrash.
    if lower == zero {
        lower = if invert { eps } else { min_norm };
        if x < lower {
            x = lower;
        }
    }

    // Precision target; in the steep-derivative region the root-finder
    // would otherwise terminate prematurely, so ask for 3/4 of a double:
    let mut digits = DIGITS;
    if x < T::from(1.0e-50).unwrap() && (a < one || b < one) {
        digits = digits * 3 / 2;
    }

    // Iterate towards whichever of p and q is smaller:
    let roots = ibeta_roots(a, b, if p < q { p } else { q }, p >= q);
    x = halley_iterate(roots, x, lower, upper, digits, MAX_ITER).x;

    // If the lower cutoff was too high then zero is the best answer:
    if x == lower {
        x = zero;
    }
    if invert {
        (one - x, x)
    } else {
        (x, one - x)
    }
}
