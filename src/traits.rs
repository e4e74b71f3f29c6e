use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as numeric elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point scalars.
///
/// Required by everything that needs `sqrt`, `ln`, `exp`, trigonometric
/// functions, or IEEE special values: the special functions, the root
/// polishers, and the inverse incomplete beta kernel. Reference accuracy
/// is defined at `f64`; `f32` works but the coefficient tables carry more
/// precision than it can use.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
