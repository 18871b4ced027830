use core::fmt::Debug;
use num_traits::{Float, FloatConst};

/// Trait for the real floating-point scalars every routine is generic over.
///
/// Blanket-implemented for all types satisfying the bounds, which covers
/// `f32` and `f64`. `FloatConst` supplies π for the quadrature range and
/// the gamma reflection formula; `Debug` lets values appear in trace fields.
pub trait FloatScalar: Float + FloatConst + Debug + 'static {}

impl<T: Float + FloatConst + Debug + 'static> FloatScalar for T {}
