use std::cmp::Ordering;

use nalgebra::Vector3;

use super::FloatingPoint;

/// Narrow vector capability consumed by the patch interpolator.
///
/// Normalization is total: a vector whose length does not exceed the tolerance
/// has no unit direction, and `unit_or_zero` returns the zero vector instead of NaN.
pub trait VectorOps<T: FloatingPoint>: Sized {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, factor: T) -> Self;
    fn dot(&self, other: &Self) -> T;
    fn cross(&self, other: &Self) -> Self;
    fn length(&self) -> T;

    /// Returns the unit vector, or `None` if the length is at or below `tolerance`.
    fn try_unit(&self, tolerance: T) -> Option<Self>;

    /// Returns the unit vector, or the zero vector if the length is at or below `tolerance`.
    fn unit_or_zero(&self, tolerance: T) -> Self;

    /// Removes the component along the unit vector `axis`.
    fn reject_from(&self, axis: &Self) -> Self {
        self.add(&axis.scale(-self.dot(axis)))
    }
}

impl<T: FloatingPoint> VectorOps<T> for Vector3<T> {
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn scale(&self, factor: T) -> Self {
        self * factor
    }

    fn dot(&self, other: &Self) -> T {
        Vector3::dot(self, other)
    }

    fn cross(&self, other: &Self) -> Self {
        Vector3::cross(self, other)
    }

    fn length(&self) -> T {
        self.norm()
    }

    fn try_unit(&self, tolerance: T) -> Option<Self> {
        let length = self.norm();
        // NaN lengths compare as `None` and are rejected too
        match length.partial_cmp(&tolerance) {
            Some(Ordering::Greater) => Some(self / length),
            _ => None,
        }
    }

    fn unit_or_zero(&self, tolerance: T) -> Self {
        self.try_unit(tolerance).unwrap_or_else(Vector3::zeros)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use super::VectorOps;

    #[test]
    fn unit_of_regular_vector() {
        let v = Vector3::new(3.0, 0.0, 4.0);
        let u = v.try_unit(1e-12).unwrap();
        assert_relative_eq!(u, Vector3::new(0.6, 0.0, 0.8), epsilon = 1e-12);
        assert_relative_eq!(VectorOps::length(&u), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_vector_has_no_unit() {
        let v = Vector3::<f64>::zeros();
        assert!(v.try_unit(1e-12).is_none());
        let u = v.unit_or_zero(1e-12);
        assert!(u.iter().all(|c| c.is_finite()));
        assert_eq!(u, Vector3::zeros());
    }

    #[test]
    fn tiny_vector_below_tolerance() {
        let v = Vector3::new(1e-14, 0.0, 0.0);
        assert!(v.try_unit(1e-12).is_none());
        assert!(v.try_unit(0.0).is_some());
    }

    #[test]
    fn reject_removes_axis_component() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let r = v.reject_from(&Vector3::y());
        assert_relative_eq!(r, Vector3::new(1.0, 0.0, 3.0), epsilon = 1e-12);
        assert_relative_eq!(VectorOps::dot(&r, &Vector3::y()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn cross_and_scale() {
        let c = VectorOps::cross(&Vector3::<f64>::x(), &Vector3::y());
        assert_relative_eq!(c, Vector3::z(), epsilon = 1e-12);
        let s = VectorOps::add(&VectorOps::scale(&c, 2.0), &Vector3::x());
        assert_relative_eq!(s, Vector3::new(1.0, 0.0, 2.0), epsilon = 1e-12);
    }
}
