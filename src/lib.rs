//! # betainv
//!
//! Pure-Rust inverse of the regularized incomplete beta function, with
//! Student's-t quantiles, bracketed root polishing, and the supporting
//! special functions. No-std compatible, no heap allocation.
//!
//! ## Quick start
//!
//! ```
//! use betainv::{betaincinv, special::betainc};
//!
//! // Invert I_x(3, 3) = 0.2 ...
//! let x = betaincinv(3.0_f64, 3.0, 0.2, false).unwrap();
//!
//! // ... and recover the probability:
//! assert!((betainc(3.0, 3.0, x).unwrap() - 0.2).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`betaincinv`](mod@betaincinv) — the inverse kernel:
//!   [`kernel_betaincinv`] (pre-validated `(a, b, p, q) → (x, 1−x)`),
//!   the validating wrapper [`betaincinv`](fn@betaincinv), and the
//!   Student's-t quantile [`inverse_students_t`]. Initial estimates come
//!   from closed forms, Temme's asymptotic expansions, or
//!   inflection-point seeds; a bracketed Halley iteration polishes to 32
//!   binary digits.
//!
//! - [`special`] — gamma/beta families, regularized incomplete
//!   gamma/beta with inverses and derivatives, and erf/erfc with the
//!   complementary inverse. Generic over [`FloatScalar`].
//!
//! - [`roots`] — bracketed Newton-Raphson and Halley root polishers with
//!   oscillation detection and silent best-effort semantics.
//!
//! - [`stats`] — `Beta` and `StudentT` distributions whose quantile
//!   functions go through the exact kernel.
//!
//! - [`tools`] — Horner polynomial evaluation over `f64` coefficient
//!   tables.
//!
//! - [`traits`] — the [`Scalar`] / [`FloatScalar`] element hierarchy.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod betaincinv;
pub mod roots;
pub mod special;
pub mod stats;
pub mod tools;
pub mod traits;

pub use betaincinv::{betaincinv, inverse_students_t, kernel_betaincinv};
pub use traits::{FloatScalar, Scalar};
