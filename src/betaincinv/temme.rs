//! Temme's uniform asymptotic expansions for the incomplete beta inverse.
//!
//! Three regimes for large shape parameters (Temme 1992), each producing
//! an initial estimate from a normalized variable eta: an error-function
//! expansion for nearly equal parameters, a trigonometric expansion for
//! comparable parameters, and an incomplete-gamma-based expansion for
//! very different parameters. The polynomial coefficient tables are the
//! published constants of the expansions.

use crate::roots::newton_raphson_iterate;
use crate::special::{erfc_inv, gamma_inc_inv};
use crate::tools::{evalpoly, evalpoly_vals};
use crate::traits::FloatScalar;

/// Target binary digits for the eta-to-x Newton polishes (half the
/// kernel's final precision; the Halley pass finishes the job).
const DIGITS: i32 = 16;

/// Iteration cap for the eta-to-x Newton polishes.
const MAX_ITER: usize = 100;

// Even-polynomial tables in sin²(theta) for the second expansion.
const CO1: [f64; 3] = [-1.0, -5.0, 5.0];
const CO2: [f64; 4] = [1.0, 21.0, -69.0, 46.0];
const CO3: [f64; 5] = [7.0, -2.0, 33.0, -62.0, 31.0];
const CO4: [f64; 6] = [25.0, -52.0, -17.0, 88.0, -115.0, 46.0];
const CO5: [f64; 4] = [7.0, 12.0, -78.0, 52.0];
const CO6: [f64; 5] = [-7.0, 2.0, 183.0, -370.0, 185.0];
const CO7: [f64; 6] = [-533.0, 776.0, -1835.0, 10240.0, -13525.0, 5410.0];
const CO8: [f64; 7] = [-1579.0, 3747.0, -3372.0, -15821.0, 45588.0, -45213.0, 15071.0];
const CO9: [f64; 6] = [449.0, -1259.0, -769.0, 6686.0, -9260.0, 3704.0];
const CO10: [f64; 7] = [
    63149.0,
    -151557.0,
    140052.0,
    -727469.0,
    2239932.0,
    -2251437.0,
    750479.0,
];
const CO11: [f64; 8] = [
    29233.0,
    -78755.0,
    105222.0,
    146879.0,
    -1602610.0,
    3195183.0,
    -2554139.0,
    729754.0,
];
const CO12: [f64; 3] = [1.0, -13.0, 13.0];
const CO13: [f64; 4] = [1.0, 21.0, -69.0, 46.0];

/// Root function for the eta-to-x transforms of the second and third
/// expansions: `f = ln(x) + a·ln(1−x) + t`, `f' = 1/x − a/(1−x)`.
///
/// At either support edge a large negative sentinel pair keeps the
/// logarithm out of trouble while pointing the polisher back inside.
pub(crate) fn temme_root_finder<T: FloatScalar>(t: T, a: T) -> impl FnMut(T) -> (T, T) {
    move |x| {
        let big = T::max_value() / T::from(4.0).unwrap();
        let y = T::one() - x;
        if y == T::zero() {
            return (-big, -big);
        }
        if x == T::zero() {
            return (-big, big);
        }
        let f = x.ln() + a * y.ln() + t;
        let f1 = T::one() / x - a / y;
        (f, f1)
    }
}

/// First expansion: a and b nearly equal (Temme section 2).
///
/// eta is seeded from the inverse complementary error function and
/// corrected by three polynomial terms in 1/a, then mapped back to x by
/// solving the defining quadratic.
pub(crate) fn temme1<T: FloatScalar>(a: T, b: T, z: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();
    let r2 = two.sqrt();

    // First approximation for eta (eq. 2.9 and 2.10):
    let mut eta0 = erfc_inv(two * z);
    eta0 = eta0 / -((a / two).sqrt());

    let mut terms = [zero; 4];
    let mut workspace = [zero; 7];
    terms[0] = eta0;

    // Powers of b − a:
    let bma = b - a;
    let bma2 = bma * bma;
    let bma3 = bma2 * bma;

    // Correction terms. First the series following eq. 2.15:
    workspace[0] = -bma * r2 / two;
    workspace[1] = (one - two * bma) / T::from(8.0).unwrap();
    workspace[2] = -(bma * r2 / T::from(48.0).unwrap());
    workspace[3] = T::from(-1.0 / 192.0).unwrap();
    workspace[4] = -bma * r2 / T::from(3840.0).unwrap();
    terms[1] = evalpoly_vals(&workspace[..5], eta0);

    // Second series following eq. 2.17:
    workspace[0] = bma * r2 * (T::from(3.0).unwrap() * bma - two) / T::from(12.0).unwrap();
    workspace[1] = (T::from(20.0).unwrap() * bma2 - T::from(12.0).unwrap() * bma + one)
        / T::from(128.0).unwrap();
    workspace[2] =
        bma * r2 * (T::from(20.0).unwrap() * bma - one) / T::from(960.0).unwrap();
    workspace[3] = (T::from(16.0).unwrap() * bma2 + T::from(30.0).unwrap() * bma
        - T::from(15.0).unwrap())
        / T::from(4608.0).unwrap();
    workspace[4] = bma * r2 * (T::from(21.0).unwrap() * bma + T::from(32.0).unwrap())
        / T::from(53760.0).unwrap();
    workspace[5] = (T::from(-32.0).unwrap() * bma2 + T::from(63.0).unwrap())
        / T::from(368640.0).unwrap();
    workspace[6] = -bma * r2 * (T::from(120.0).unwrap() * bma + T::from(17.0).unwrap())
        / T::from(25804800.0).unwrap();
    terms[2] = evalpoly_vals(&workspace[..7], eta0);

    // Third series, also following eq. 2.17:
    workspace[0] = bma
        * r2
        * (T::from(-75.0).unwrap() * bma2 + T::from(80.0).unwrap() * bma
            - T::from(16.0).unwrap())
        / T::from(480.0).unwrap();
    workspace[1] = (T::from(-1080.0).unwrap() * bma3 + T::from(868.0).unwrap() * bma2
        - T::from(90.0).unwrap() * bma
        - T::from(45.0).unwrap())
        / T::from(9216.0).unwrap();
    workspace[2] = bma
        * r2
        * (T::from(-1190.0).unwrap() * bma2 + T::from(84.0).unwrap() * bma
            + T::from(373.0).unwrap())
        / T::from(53760.0).unwrap();
    workspace[3] = (T::from(-2240.0).unwrap() * bma3 - T::from(2508.0).unwrap() * bma2
        + T::from(2100.0).unwrap() * bma
        - T::from(165.0).unwrap())
        / T::from(368640.0).unwrap();
    terms[3] = evalpoly_vals(&workspace[..4], eta0);

    // Bring the correction terms together (polynomial in 1/a):
    let eta = evalpoly_vals(&terms, one / a);

    // Convert eta back to x by solving the defining quadratic:
    let eta2 = eta * eta;
    let c = -(-eta2 / two).exp();
    if eta2 == zero {
        half
    } else {
        (one + eta * ((one + c) / eta2).sqrt()) / two
    }
}

/// Second expansion: comparable a and b (Temme section 3).
///
/// eta is seeded as in the first expansion, corrected by three error
/// terms in 1/r with trigonometric coefficients, then mapped back to x
/// either by a closed polynomial in eta (small eta) or by Newton
/// iteration on the log root function (large eta).
pub(crate) fn temme2<T: FloatScalar>(z: T, r: T, theta: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();

    // First estimate for eta (eq. 3.9 and 3.10):
    let eta0 = erfc_inv(two * z) / -((r / two).sqrt());

    let s = theta.sin();
    let c = theta.cos();
    let s2 = s * s;
    let c2 = c * c;

    // Powers of sin(theta)·cos(theta):
    let sc = s * c;
    let sc2 = sc * sc;
    let sc3 = sc2 * sc;
    let sc4 = sc2 * sc2;
    let sc5 = sc2 * sc3;
    let sc6 = sc3 * sc3;
    let sc7 = sc3 * sc4;

    let mut terms = [zero; 4];
    let mut workspace = [zero; 6];
    terms[0] = eta0;

    // First error term e1 (middle of Temme p. 151):
    workspace[0] = (two * s2 - one) / (three * s * c);
    workspace[1] = -evalpoly(&CO1, s2) / (T::from(36.0).unwrap() * sc2);
    workspace[2] = evalpoly(&CO2, s2) / (T::from(1620.0).unwrap() * sc3);
    workspace[3] = -evalpoly(&CO3, s2) / (T::from(6480.0).unwrap() * sc4);
    workspace[4] = evalpoly(&CO4, s2) / (T::from(90720.0).unwrap() * sc5);
    terms[1] = evalpoly_vals(&workspace[..5], eta0);

    // Second error term e2:
    workspace[0] = -evalpoly(&CO5, s2) / (T::from(405.0).unwrap() * sc3);
    workspace[1] = evalpoly(&CO6, s2) / (T::from(2592.0).unwrap() * sc4);
    workspace[2] = -evalpoly(&CO7, s2) / (T::from(204120.0).unwrap() * sc5);
    workspace[3] = -evalpoly(&CO8, s2) / (T::from(2099520.0).unwrap() * sc6);
    terms[2] = evalpoly_vals(&workspace[..4], eta0);

    // Third error term e3:
    workspace[0] = evalpoly(&CO9, s2) / (T::from(102060.0).unwrap() * sc5);
    workspace[1] = -evalpoly(&CO10, s2) / (T::from(20995200.0).unwrap() * sc6);
    workspace[2] = evalpoly(&CO11, s2) / (T::from(36741600.0).unwrap() * sc7);
    terms[3] = evalpoly_vals(&workspace[..3], eta0);

    // Combine (last equation on p. 151, polynomial in 1/r):
    let eta = evalpoly_vals(&terms, one / r);

    // Back-solve eq. 3.2 for x; the two methods are described in
    // Temme section 5.
    let alpha = (c / s) * (c / s);
    let lu = -(eta * eta) / (two * s2) + s2.ln() + c2 * c2.ln() / s2;

    let mut x;
    if eta.abs() < T::from(0.7).unwrap() {
        // Small eta: polynomial in eta (second equation of section 5).
        workspace[0] = s2;
        workspace[1] = s * c;
        workspace[2] = (one - two * s2) / three;
        workspace[3] = evalpoly(&CO12, s2) / (T::from(36.0).unwrap() * s * c);
        workspace[4] = evalpoly(&CO13, s2) / (T::from(270.0).unwrap() * s2 * c2);
        x = evalpoly_vals(&workspace[..5], eta);
    } else {
        // Large eta: seed from the polynomial in u (last equation on
        // p. 155) and pick the correct branch of eq. 3.2 — the signs of
        // eta and x − sin²(theta) must agree.
        let u = lu.exp();
        let four = T::from(4.0).unwrap();
        let five = T::from(5.0).unwrap();
        workspace[0] = u;
        workspace[1] = alpha;
        workspace[2] = zero;
        workspace[3] = three * alpha * (three * alpha + one) / T::from(6.0).unwrap();
        workspace[4] = four * alpha * (four * alpha + one) * (four * alpha + two)
            / T::from(24.0).unwrap();
        workspace[5] = five
            * alpha
            * (five * alpha + one)
            * (five * alpha + two)
            * (five * alpha + three)
            / T::from(120.0).unwrap();
        x = evalpoly_vals(&workspace[..6], u);
        if (x - s2) * eta < zero {
            x = one - x;
        }
    }

    // Newton-Raphson cleanup; the sign of eta pins which side of
    // sin²(theta) the root lies on.
    let (lower, upper) = if eta < zero { (zero, s2) } else { (s2, one) };
    if x < lower || x > upper {
        x = (lower + upper) / two;
    }
    newton_raphson_iterate(temme_root_finder(-lu, alpha), x, lower, upper, DIGITS, MAX_ITER).x
}

/// Third expansion: very different a and b (Temme section 4).
///
/// eta is seeded from the inverse incomplete gamma, perturbed by three
/// error terms in powers of 1/a, then mapped back to x by Newton
/// iteration bracketed around the crossing point 1/(1+mu).
pub(crate) fn temme3<T: FloatScalar>(a: T, b: T, p: T, q: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();

    // Initial approximation from the dominant incomplete gamma part:
    let mut eta0 = if p < q {
        gamma_inc_inv(b, p, true)
    } else {
        gamma_inc_inv(b, q, false)
    };
    eta0 = eta0 / a;

    let mu = b / a;
    let w = (one + mu).sqrt();
    let w2 = w * w;
    let w3 = w2 * w;
    let w4 = w2 * w2;
    let w5 = w3 * w2;
    let w6 = w3 * w3;
    let w7 = w4 * w3;
    let d = eta0 - mu;
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d2 * d2;
    let w1 = w + one;
    let w1_2 = w1 * w1;
    let w1_3 = w1 * w1_2;
    let w1_4 = w1_2 * w1_2;

    // Perturbation error terms converting eta0 to eta; polynomials of
    // polynomials, see Temme p. 154–155.
    let e1 = (w + two) * (w - one) / (three * w)
        + (w3 + T::from(9.0).unwrap() * w2 + T::from(21.0).unwrap() * w + T::from(5.0).unwrap())
            * d
            / (T::from(36.0).unwrap() * w2 * w1)
        - evalpoly(&[46.0, 167.0, 69.0, -13.0, 1.0], w) * d2
            / (T::from(1620.0).unwrap() * w1_2 * w3)
        - evalpoly(&[-31.0, -93.0, 26.0, 70.0, 21.0, 7.0], w) * d3
            / (T::from(6480.0).unwrap() * w1_3 * w4)
        - evalpoly(&[138.0, 118.0, -1345.0, -888.0, 188.0, 202.0, 75.0], w) * d4
            / (T::from(272160.0).unwrap() * w1_4 * w5);

    let e2 = evalpoly(&[208.0, 581.0, 402.0, 131.0, 28.0], w) * (w - one)
        / (T::from(1620.0).unwrap() * w1 * w3)
        - evalpoly(&[-925.0, -3514.0, -3983.0, -1636.0, -623.0, -154.0, 35.0], w) * d
            / (T::from(12960.0).unwrap() * w1_2 * w4)
        - evalpoly(
            &[
                21640.0, 95993.0, 141183.0, 87490.0, 35066.0, 16821.0, 7915.0, 2132.0,
            ],
            w,
        ) * d2
            / (T::from(816480.0).unwrap() * w5 * w1_3)
        - evalpoly(
            &[
                -105497.0, -481940.0, -677042.0, -258428.0, 116188.0, 163924.0, 117010.0,
                53308.0, 11053.0,
            ],
            w,
        ) * d3
            / (T::from(14696640.0).unwrap() * w1_4 * w6);

    let e3 = -evalpoly(
        &[
            -29632.0, -116063.0, -154413.0, -89578.0, -29198.0, -1323.0, 8375.0, 3592.0,
        ],
        w,
    ) * (w - one)
        / (T::from(816480.0).unwrap() * w5 * w1_2)
        - evalpoly(
            &[
                -5253353.0,
                -23128299.0,
                -34714674.0,
                -19904934.0,
                -2393568.0,
                2141568.0,
                3470754.0,
                3803094.0,
                2054169.0,
                442043.0,
            ],
            w,
        ) * d
            / (T::from(146966400.0).unwrap() * w6 * w1_3)
        - evalpoly(
            &[
                2919016.0, 15431867.0, 30869976.0, 30651894.0, 18739500.0, 10622748.0,
                6806004.0, 4341330.0, 2378172.0, 819281.0, 116932.0,
            ],
            w,
        ) * d2
            / (T::from(146966400.0).unwrap() * w1_4 * w7);

    // Combine eta0 and the error terms (second equation on p. 155):
    let mut eta = eta0 + e1 / a + e2 / (a * a) + e3 / (a * a * a);

    // Solve eq. 4.2 for x. The two solutions sit either side of the
    // crossing point 1/(1+mu); which one we want follows from the sign
    // of eta − mu:
    //
    //   cross < x ≤ 1   iff eta < mu
    //   x == cross      iff eta == mu
    //   0 ≤ x < cross   iff eta > mu
    if eta <= zero {
        eta = T::min_positive_value();
    }
    let u = eta - mu * eta.ln() + (one + mu) * (one + mu).ln() - mu;
    let cross = one / (one + mu);
    let (lower, upper) = if eta < mu { (cross, one) } else { (zero, cross) };
    let x = (lower + upper) / two;

    newton_raphson_iterate(temme_root_finder(u, mu), x, lower, upper, DIGITS, MAX_ITER).x
}
