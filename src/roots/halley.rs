use crate::traits::FloatScalar;

use super::{handle_zero_derivative, precision_factor, RootResult};

/// Halley iteration with bracket management.
///
/// `f` returns the triple `(f(x), f'(x), f''(x))`. Third-order steps
/// `2·f·f' / (2·f'² − f·f'')` are used where well-conditioned; the
/// iteration degrades to a Newton step when the second derivative is
/// zero, when the Halley denominator risks overflow, and to bisection
/// when the derivative vanishes or consecutive step magnitudes stay in
/// the (0.8, 2.0) ratio band (oscillation).
///
/// Out-of-bounds steps are handled in two stages: the first small
/// violation assumes the root lies just inside the bound and moves 99% of
/// the way there (taken at most once per run); any other violation
/// bisects back into the bracket.
///
/// Never fails; see [`RootResult`] for the silent non-convergence
/// contract.
pub fn halley_iterate<T, F>(
    mut f: F,
    guess: T,
    min: T,
    max: T,
    digits: i32,
    max_iter: usize,
) -> RootResult<T>
where
    T: FloatScalar,
    F: FnMut(T) -> (T, T, T),
{
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();

    let mut min = min;
    let mut max = max;
    let mut guess = guess;
    let mut result = guess;

    let factor = precision_factor::<T>(digits);
    let big = T::from(1.0e7).unwrap();
    // Arbitrarily large first "previous step" so the oscillation test
    // stays quiet on the first iteration.
    let mut delta = (big * guess.abs()).max(big);
    let mut delta1 = delta;
    let mut delta2 = delta;
    let mut out_of_bounds_sentry = false;

    let mut f0 = zero;
    let mut last_f0;

    let mut count = max_iter;
    loop {
        last_f0 = f0;
        delta2 = delta1;
        delta1 = delta;
        let (v0, v1, v2) = f(result);
        f0 = v0;
        count = count.saturating_sub(1);

        if f0 == zero {
            // Landed on the exact root.
            break;
        }
        if v1 == zero {
            handle_zero_derivative(
                &mut |x| f(x).0,
                &mut last_f0,
                f0,
                &mut delta,
                result,
                &mut guess,
                min,
                max,
            );
        } else if v2 != zero {
            let num = two * f0;
            let denom = two * v1 - f0 * (v2 / v1);
            if num.abs() < one && denom.abs() >= num.abs() * T::max_value() {
                // Possible overflow in the Halley step: take a Newton step.
                delta = f0 / v1;
            } else {
                delta = num / denom;
            }
        } else {
            delta = f0 / v1;
        }

        let convergence = (delta / delta2).abs();
        if convergence > T::from(0.8).unwrap() && convergence < two {
            // Last two steps haven't converged: bisect instead.
            delta = if delta > zero {
                (result - min) / two
            } else {
                (result - max) / two
            };
            if delta.abs() > result.abs() {
                // Protect against huge jumps through zero.
                delta = delta.signum() * result.abs();
            }
            // Shift the step history so this branch is not retaken on the
            // next iteration.
            delta2 = delta * three;
        }
        guess = result;
        result = result - delta;

        if result < min {
            let diff = if min.abs() < one && result.abs() > min.abs() * T::max_value() {
                T::from(1000.0).unwrap()
            } else {
                result / min
            };
            let diff = if diff.abs() < one { one / diff } else { diff };
            if !out_of_bounds_sentry && diff > zero && diff < three {
                // Only just out of bounds: the root is probably very close
                // to the bound, so step most of the way there.
                delta = T::from(0.99).unwrap() * (guess - min);
                result = guess - delta;
                out_of_bounds_sentry = true;
            } else {
                delta = (guess - min) / two;
                result = guess - delta;
                if result == min || result == max {
                    break;
                }
            }
        } else if result > max {
            let diff = if max.abs() < one && result.abs() > max.abs() * T::max_value() {
                T::from(1000.0).unwrap()
            } else {
                result / max
            };
            let diff = if diff.abs() < one { one / diff } else { diff };
            if !out_of_bounds_sentry && diff > zero && diff < three {
                delta = T::from(0.99).unwrap() * (guess - max);
                result = guess - delta;
                out_of_bounds_sentry = true;
            } else {
                delta = (guess - max) / two;
                result = guess - delta;
                if result == min || result == max {
                    break;
                }
            }
        }
        // Tighten the bracket on the side the step came from.
        if delta > zero {
            max = guess;
        } else {
            min = guess;
        }

        if !(count != 0 && (result * factor).abs() < delta.abs()) {
            break;
        }
    }

    RootResult {
        x: result,
        iterations: max_iter - count,
    }
}
