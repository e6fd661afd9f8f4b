use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Scalar type of every patch quantity (f32 or f64).
/// Bundles the nalgebra field requirements with a lossless route to `f64` for quadrature.
pub trait FloatingPoint: RealField + ToPrimitive + Copy {}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
