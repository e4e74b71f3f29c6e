use crate::special::betainc_derivative;
use crate::traits::FloatScalar;

/// Root function for the incomplete beta inverse.
///
/// Returns a callable producing `(f, f', f'')` at a trial point for the
/// Halley polisher, where `f = I_x(a,b) − target` (or the complement
/// `1 − I_x(a,b) − target` when `invert` is set, computed through the
/// symmetry I_{1−x}(b,a) to avoid cancellation).
///
/// The second derivative comes from the hypergeometric relation on the
/// first, `f'' = f'·(−y·a + (b−2)·x + 1)/(y·x)`, with guards: a zero `x`
/// or `y` is replaced by 64× the smallest normal before the division, an
/// unsafe division leaves `f''` at its numerator, and a zero derivative
/// is replaced by a signed tiny value so the polisher never divides by
/// zero.
pub(crate) fn ibeta_roots<T: FloatScalar>(
    a: T,
    b: T,
    target: T,
    invert: bool,
) -> impl FnMut(T) -> (T, T, T) {
    move |x| {
        let zero = T::zero();
        let one = T::one();
        let two = T::from(2.0).unwrap();
        let tiny = T::min_positive_value() * T::from(64.0).unwrap();

        let y = one - x;
        let (f, mut f1) = if invert {
            // 1 − I_x(a,b) = I_{1−x}(b,a), evaluated directly on the
            // complementary tail.
            match betainc_derivative(b, a, y) {
                Ok((v, d)) => (v - target, -d),
                Err(_) => (T::nan(), T::nan()),
            }
        } else {
            match betainc_derivative(a, b, x) {
                Ok((v, d)) => (v - target, d),
                Err(_) => (T::nan(), T::nan()),
            }
        };

        let yy = if y == zero { tiny } else { y };
        let xx = if x == zero { tiny } else { x };

        let mut f2 = f1 * (-yy * a + (b - two) * xx + one);
        if f2.abs() < yy * xx * T::max_value() {
            f2 = f2 / (yy * xx);
        }
        if invert {
            f2 = -f2;
        }

        // Make sure we don't hand the polisher a zero derivative:
        if f1 == zero {
            f1 = if invert { -tiny } else { tiny };
        }

        (f, f1, f2)
    }
}
