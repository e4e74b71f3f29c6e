//! Error function, complementary error function, and the inverse of erfc.
//!
//! erf/erfc go through the regularized incomplete gamma relation
//! erf(x) = P(1/2, x²). The inverse uses rational approximations over a
//! ladder of intervals in −ln(q), with coefficients derived from the Boost
//! erf_inv tables.

use crate::FloatScalar;
use crate::tools::evalpoly;
use super::gamma_fn::lgamma;

/// Error function erf(x).
///
/// erf(x) = (2/√π) ∫₀ˣ e^{−t²} dt
///
/// Uses the relation erf(x) = sign(x) · P(1/2, x²) with the regularized
/// incomplete gamma function.
///
/// # Example
///
/// ```
/// use betainv::special::erf;
///
/// assert!(erf(0.0_f64).abs() < 1e-16);
/// assert!((erf(1.0_f64) - 0.8427007929497149).abs() < 1e-13);
/// assert!((erf(6.0_f64) - 1.0).abs() < 1e-15);
/// ```
pub fn erf<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let one = T::one();
    let zero = T::zero();
    let ax = x.abs();
    let sign = if x < zero { -one } else { one };

    // For very large |x|, erf → ±1
    if ax > T::from(6.0).unwrap() {
        return sign;
    }

    let a = T::from(0.5).unwrap();
    let x2 = ax * ax;

    match inc_gamma_p(a, x2) {
        Some(p) => sign * p,
        None => sign, // convergence issue at extreme x; erf ≈ ±1
    }
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// For large positive x, computes erfc directly via Q(1/2, x²) to avoid
/// cancellation.
///
/// # Example
///
/// ```
/// use betainv::special::erfc;
///
/// assert!((erfc(0.0_f64) - 1.0).abs() < 1e-16);
/// assert!((erfc(6.0_f64)).abs() < 1e-10);
/// ```
pub fn erfc<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let one = T::one();
    let zero = T::zero();
    let two = T::from(2.0).unwrap();
    let ax = x.abs();

    if ax > T::from(27.0).unwrap() {
        return if x > zero { zero } else { two };
    }

    let a = T::from(0.5).unwrap();
    let x2 = ax * ax;

    // For x > 0: erfc(x) = Q(0.5, x²) = 1 - P(0.5, x²)
    // For x < 0: erfc(x) = 1 + P(0.5, x²)
    match inc_gamma_pair(a, x2) {
        Some((p, q)) => {
            if x >= zero {
                q
            } else {
                one + p
            }
        }
        None => {
            if x >= zero { zero } else { two }
        }
    }
}

/// Inverse complementary error function.
///
/// Returns x such that erfc(x) = z for z in (0, 2); the boundaries map to
/// ±infinity. Relative error is a few machine epsilons across the domain,
/// including deep into the small-z tail.
///
/// # Example
///
/// ```
/// use betainv::special::erfc_inv;
///
/// assert!(erfc_inv(1.0_f64).abs() < 1e-16);
/// assert!((erfc_inv(0.5_f64) - 0.4769362762044699).abs() < 1e-14);
/// assert!((erfc_inv(1.5_f64) + 0.4769362762044699).abs() < 1e-14);
/// ```
pub fn erfc_inv<T: FloatScalar>(z: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    if z.is_nan() {
        return z;
    }
    if z <= T::zero() {
        return T::infinity();
    }
    if z >= two {
        return T::neg_infinity();
    }
    if z > one {
        erf_inv_impl(z - one, two - z, -one)
    } else {
        erf_inv_impl(one - z, z, one)
    }
}

// ---------------------------------------------------------------------------
// Rational approximation tables for the inverse.
// p is the erf argument, q its complement; each interval gets a numerator/
// denominator pair in ascending order.
// ---------------------------------------------------------------------------

/// Numerator, p in [0, 0.5].
const ERF_INV_AN: [f64; 8] = [
    -0.000508781949658280665617,
    -0.00836874819741736770379,
    0.0334806625409744615033,
    -0.0126926147662974029034,
    -0.0365637971411762664006,
    0.0219878681111168899165,
    0.00822687874676915743155,
    -0.00538772965071242932965,
];

/// Denominator, p in [0, 0.5].
const ERF_INV_AD: [f64; 10] = [
    1.0,
    -0.970005043303290640362,
    -1.56574558234175846809,
    1.56221558398423026363,
    0.662328840472002992063,
    -0.71228902341542847553,
    -0.0527396382340099713954,
    0.0795283687341571680018,
    -0.00233393759374190016776,
    0.000886216390456424707504,
];

/// Numerator, q in [0.25, 0.5].
const ERF_INV_BN: [f64; 9] = [
    -0.202433508355938759655,
    0.105264680699391713268,
    8.37050328343119927838,
    17.6447298408374015486,
    -18.8510648058714251895,
    -44.6382324441786960818,
    17.445385985570866523,
    21.1294655448340526258,
    -3.67192254707729348546,
];

/// Denominator, q in [0.25, 0.5].
const ERF_INV_BD: [f64; 9] = [
    1.0,
    6.24264124854247537712,
    3.9713437953343869095,
    -28.6608180499800029974,
    -20.1432634680485188801,
    48.5609213108739935468,
    10.8268667355460159008,
    -22.6436933413139721736,
    1.72114765761200282724,
];

/// Numerator, x = √(−ln q) in [1.0, 3.0].
const ERF_INV_CN: [f64; 11] = [
    -0.131102781679951906451,
    -0.163794047193317060787,
    0.117030156341995252019,
    0.387079738972604337464,
    0.337785538912035898924,
    0.142869534408157156766,
    0.0290157910005329060432,
    0.00214558995388805277169,
    -0.679465575181126350155e-6,
    0.285225331782217055858e-7,
    -0.681149956853776992068e-9,
];

/// Denominator, x in [1.0, 3.0].
const ERF_INV_CD: [f64; 8] = [
    1.0,
    3.46625407242567245975,
    5.38168345707006855425,
    4.77846592945843778382,
    2.59301921623620271374,
    0.848854343457902036425,
    0.152264338295331783612,
    0.01105924229346489121,
];

/// Numerator, x in [3.0, 6.0].
const ERF_INV_DN: [f64; 9] = [
    -0.0350353787183177984712,
    -0.00222426529213447927281,
    0.0185573306514231072324,
    0.00950804701325919603619,
    0.00187123492819559223345,
    0.000157544617424960554631,
    0.460469890584317994083e-5,
    -0.230404776911882601748e-9,
    0.266339227425782031962e-11,
];

/// Denominator, x in [3.0, 6.0].
const ERF_INV_DD: [f64; 7] = [
    1.0,
    1.3653349817554063097,
    0.762059164553623404043,
    0.220091105764131249824,
    0.0341589143670947727934,
    0.00263861676657015992959,
    0.764675292302794483503e-4,
];

/// Numerator, x in [6.0, 18.0].
const ERF_INV_EN: [f64; 9] = [
    -0.0167431005076633737133,
    -0.00112951438745580278863,
    0.00105628862152492910091,
    0.000209386317487588078668,
    0.149624783758342370182e-4,
    0.449696789927706453732e-6,
    0.462596163522878599135e-8,
    -0.281128735628831791805e-13,
    0.99055709973310326855e-16,
];

/// Denominator, x in [6.0, 18.0].
const ERF_INV_ED: [f64; 7] = [
    1.0,
    0.591429344886417493481,
    0.138151865749083321638,
    0.0160746087093676504695,
    0.000964011807005165528527,
    0.275335474764726041141e-4,
    0.282243172016108031869e-6,
];

/// Numerator, x in [18.0, 44.0].
const ERF_INV_FN: [f64; 8] = [
    -0.0024978212791898131227,
    -0.779190719229053954292e-5,
    0.254723037413027451751e-4,
    0.162397777342510920873e-5,
    0.396341011304801168516e-7,
    0.411632831190944208473e-9,
    0.145596286718675035587e-11,
    -0.116765012397184275695e-17,
];

/// Denominator, x in [18.0, 44.0].
const ERF_INV_FD: [f64; 7] = [
    1.0,
    0.207123112214422517181,
    0.0169410838120975906478,
    0.000690538265622684595676,
    0.145007359818232637924e-4,
    0.144437756628144157666e-6,
    0.509761276599778486139e-9,
];

/// Numerator, x above 44.
const ERF_INV_GN: [f64; 8] = [
    -0.000539042911019078575891,
    -0.28398759004727721098e-6,
    0.899465114892291446442e-6,
    0.229345859265920864296e-7,
    0.225561444863500149219e-9,
    0.947846627503022684216e-12,
    0.135880130108924861008e-14,
    -0.348890393399948882918e-21,
];

/// Denominator, x above 44.
const ERF_INV_GD: [f64; 7] = [
    1.0,
    0.0845746234001899436914,
    0.00282092984726264681981,
    0.468292921940894236786e-4,
    0.399968812193862100054e-6,
    0.161809290887904476097e-8,
    0.231558608310259605225e-11,
];

/// Shared inverse kernel: `p` is the erf argument, `q = 1 − p`, and `s`
/// carries the sign of the result.
fn erf_inv_impl<T: FloatScalar>(p: T, q: T, s: T) -> T {
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();

    let result = if p <= half {
        let y = T::from(0.0891314744949340820313).unwrap();
        let g = p * (p + T::from(10.0).unwrap());
        let r = evalpoly(&ERF_INV_AN, p) / evalpoly(&ERF_INV_AD, p);
        g * y + g * r
    } else if q >= T::from(0.25).unwrap() {
        let y = T::from(2.249481201171875).unwrap();
        let g = (-two * q.ln()).sqrt();
        let xs = q - T::from(0.25).unwrap();
        let r = evalpoly(&ERF_INV_BN, xs) / evalpoly(&ERF_INV_BD, xs);
        g / (y + r)
    } else {
        let x = (-(q.ln())).sqrt();
        if x < T::from(3.0).unwrap() {
            let y = T::from(0.807220458984375).unwrap();
            let xs = x - T::from(1.125).unwrap();
            let r = evalpoly(&ERF_INV_CN, xs) / evalpoly(&ERF_INV_CD, xs);
            y * x + r * x
        } else if x < T::from(6.0).unwrap() {
            let y = T::from(0.93995571136474609375).unwrap();
            let xs = x - T::from(3.0).unwrap();
            let r = evalpoly(&ERF_INV_DN, xs) / evalpoly(&ERF_INV_DD, xs);
            y * x + r * x
        } else if x < T::from(18.0).unwrap() {
            let y = T::from(0.98362827301025390625).unwrap();
            let xs = x - T::from(6.0).unwrap();
            let r = evalpoly(&ERF_INV_EN, xs) / evalpoly(&ERF_INV_ED, xs);
            y * x + r * x
        } else if x < T::from(44.0).unwrap() {
            let y = T::from(0.99714565277099609375).unwrap();
            let xs = x - T::from(18.0).unwrap();
            let r = evalpoly(&ERF_INV_FN, xs) / evalpoly(&ERF_INV_FD, xs);
            y * x + r * x
        } else {
            let y = T::from(0.99941349029541015625).unwrap();
            let xs = x - T::from(44.0).unwrap();
            let r = evalpoly(&ERF_INV_GN, xs) / evalpoly(&ERF_INV_GD, xs);
            y * x + r * x
        }
    };
    s * result
}

// ---------------------------------------------------------------------------
// Internal: regularized incomplete gamma P(a, x) and Q(a, x)
// Duplicates the logic from incgamma.rs but returns Option instead of Result
// and avoids circular dependency issues with re-exporting.
// ---------------------------------------------------------------------------

const MAX_ITER: usize = 200;

/// Compute P(a, x) only.
fn inc_gamma_p<T: FloatScalar>(a: T, x: T) -> Option<T> {
    let (p, _) = inc_gamma_pair(a, x)?;
    Some(p)
}

/// Compute both (P, Q).
fn inc_gamma_pair<T: FloatScalar>(a: T, x: T) -> Option<(T, T)> {
    let zero = T::zero();
    let one = T::one();

    if x == zero {
        return Some((zero, one));
    }

    // Log prefactor: exp(-x + a·ln(x) - lgamma(a))
    let log_pf = -x + a * x.ln() - lgamma(a);
    let pf = log_pf.exp();

    if x < a + one {
        let p = series_p(a, x, pf)?;
        Some((p, one - p))
    } else {
        let q = cf_q(a, x, pf)?;
        Some((one - q, q))
    }
}

fn series_p<T: FloatScalar>(a: T, x: T, pf: T) -> Option<T> {
    let one = T::one();
    let eps = T::epsilon();
    let mut term = one / a;
    let mut sum = term;
    let mut ap = a;
    for _ in 0..MAX_ITER {
        ap = ap + one;
        term = term * x / ap;
        sum = sum + term;
        if term.abs() < sum.abs() * eps {
            return Some(pf * sum);
        }
    }
    None
}

fn cf_q<T: FloatScalar>(a: T, x: T, pf: T) -> Option<T> {
    let one = T::one();
    let eps = T::epsilon();
    let tiny = T::from(1e-30).unwrap();

    let b0 = x + one - a;
    let mut f = if b0.abs() < tiny { tiny } else { b0 };
    let mut c = f;
    let mut d = T::zero();

    for n in 1..=MAX_ITER {
        let nf = T::from(n).unwrap();
        let an = nf * (a - nf);
        let bn = x + T::from(2 * n + 1).unwrap() - a;

        d = bn + an * d;
        if d.abs() < tiny { d = tiny; }
        d = one / d;

        c = bn + an / c;
        if c.abs() < tiny { c = tiny; }

        let delta = c * d;
        f = f * delta;

        if (delta - one).abs() < eps {
            return Some(pf * f.recip());
        }
    }
    None
}
