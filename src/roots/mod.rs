//! Bracketed root polishing: Newton-Raphson and Halley iteration.
//!
//! Both polishers refine an initial guess inside a `[min, max]` bracket,
//! tightening the bracket after every accepted step and falling back to
//! bisection when the derivative vanishes or the steps oscillate. They
//! never fail: if the iteration cap is exhausted the best current
//! estimate is returned, and the caller can inspect
//! [`RootResult::iterations`] to detect that the full budget was spent.
//!
//! Termination: iteration stops once `|result·2^(1−digits)| ≥ |step|`,
//! i.e. when the last step is below the requested relative precision.
//!
//! # Example
//!
//! ```
//! use betainv::roots::{halley_iterate, newton_raphson_iterate};
//!
//! // √2 as root of x² − 2
//! let n = newton_raphson_iterate(|x| (x * x - 2.0, 2.0 * x), 1.0_f64, 0.0, 2.0, 52, 100);
//! assert!((n.x - core::f64::consts::SQRT_2).abs() < 1e-14);
//!
//! let h = halley_iterate(|x| (x * x - 2.0, 2.0 * x, 2.0), 1.0_f64, 0.0, 2.0, 52, 100);
//! assert!((h.x - core::f64::consts::SQRT_2).abs() < 1e-14);
//! ```

mod newton;
mod halley;


pub use newton::newton_raphson_iterate;
pub use halley::halley_iterate;

use crate::FloatScalar;

/// Outcome of a root-polishing run.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Best estimate of the root.
    pub x: T,
    /// Iterations consumed. Equal to the cap when the precision target
    /// was not reached within budget.
    pub iterations: usize,
}

/// Relative-precision factor 2^(1−digits) for the termination test.
#[inline]
pub(crate) fn precision_factor<T: FloatScalar>(digits: i32) -> T {
    T::from(2.0_f64.powi(1 - digits)).unwrap()
}

/// Recovery step for a vanishing derivative: bisect towards whichever
/// bound the sign pattern of the last two function values points at.
///
/// On the first iteration (no previous value yet) a synthetic previous
/// evaluation at the far bound seeds the sign comparison.
pub(crate) fn handle_zero_derivative<T, F>(
    f0_of: &mut F,
    last_f0: &mut T,
    f0: T,
    delta: &mut T,
    result: T,
    guess: &mut T,
    min: T,
    max: T,
) where
    T: FloatScalar,
    F: FnMut(T) -> T,
{
    let zero = T::zero();
    let two = T::from(2.0).unwrap();

    if *last_f0 == zero {
        // First iteration: pretend there was a previous step ending at
        // one of the bounds.
        *guess = if result == min { max } else { min };
        *last_f0 = f0_of(*guess);
        *delta = *guess - result;
    }
    if last_f0.signum() * f0.signum() < zero {
        // Crossed the root: move opposite to the last step.
        *delta = if *delta < zero {
            (result - min) / two
        } else {
            (result - max) / two
        };
    } else {
        // Same side as before: keep moving in the last step's direction.
        *delta = if *delta < zero {
            (result - max) / two
        } else {
            (result - min) / two
        };
    }
}
