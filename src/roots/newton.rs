use crate::traits::FloatScalar;

use super::{handle_zero_derivative, precision_factor, RootResult};

/// Newton-Raphson iteration with bracket management.
///
/// `f` returns the pair `(f(x), f'(x))`. The estimate is refined from
/// `guess` inside `[min, max]` until the step shrinks below the relative
/// precision `2^(1−digits)` or `max_iter` evaluations are spent.
///
/// Oscillation guard: when a step is more than half the second-to-last
/// step, the iteration substitutes a bisection step towards the bound in
/// the step's direction. Steps leaving the bracket are halved back
/// inside, and the bracket is tightened after every accepted step.
///
/// Never fails; see [`RootResult`] for the silent non-convergence
/// contract.
pub fn newton_raphson_iterate<T, F>(
    mut f: F,
    guess: T,
    min: T,
    max: T,
    digits: i32,
    max_iter: usize,
) -> RootResult<T>
where
    T: FloatScalar,
    F: FnMut(T) -> (T, T),
{
    let zero = T::zero();
    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();

    let mut min = min;
    let mut max = max;
    let mut guess = guess;
    let mut result = guess;

    let factor = precision_factor::<T>(digits);
    let mut delta = T::max_value();
    let mut delta1 = T::max_value();
    let mut delta2;

    let mut f0 = zero;
    let mut last_f0;

    let mut count = max_iter;
    loop {
        last_f0 = f0;
        delta2 = delta1;
        delta1 = delta;
        let (v0, v1) = f(result);
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
        } else {
            delta = f0 / v1;
        }
        if (delta * two).abs() > delta2.abs() {
            // Last two steps haven't converged: bisect instead.
            delta = if delta > zero {
                (result - min) / two
            } else {
                (result - max) / two
            };
        }
        guess = result;
        result = result - delta;
        if result <= min {
            delta = half * (guess - min);
            result = guess - delta;
            if result == min || result == max {
                break;
            }
        } else if result >= max {
            delta = half * (guess - max);
            result = guess - delta;
            if result == min || result == max {
                break;
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
