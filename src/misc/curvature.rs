use nalgebra::Vector3;

use crate::misc::FloatingPoint;

/// Unit tangent and curvature vector of a patch at one parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Curvature<T: FloatingPoint> {
    /// Unit tangent vector
    t: Vector3<T>,
    /// Curvature vector
    k: Vector3<T>,
}

impl<T: FloatingPoint> Curvature<T> {
    pub fn new(t: Vector3<T>, k: Vector3<T>) -> Self {
        Self { t, k }
    }

    /// Compute curvature from first and second derivatives
    /// Returns `Err` carrying the best available tangent if the first derivative vanishes
    pub fn derivatives(deriv1: Vector3<T>, deriv2: Vector3<T>) -> Result<Self, Self> {
        // T = D1 / |D1|
        // K = ( D2 - (D2 o T)*T )/( D1 o D1)
        let n1 = deriv1.norm();
        if n1.is_zero() {
            // With a vanishing first derivative the tangent is the unitized
            // second derivative (up to sign), if there is one.
            let n2 = deriv2.norm();
            if n2.is_zero() {
                Err(Self::new(Vector3::zeros(), Vector3::zeros()))
            } else {
                Err(Self::new(deriv2 / n2, Vector3::zeros()))
            }
        } else {
            let tangent = deriv1 / n1;
            let dot = deriv2.dot(&tangent);
            let d1 = T::one() / deriv1.dot(&deriv1);
            let k = (deriv2 - tangent * dot) * d1;
            Ok(Self::new(tangent, k))
        }
    }

    /// Returns the unit tangent vector
    pub fn tangent_vector(&self) -> Vector3<T> {
        self.t
    }

    /// Returns the curvature vector
    pub fn curvature_vector(&self) -> Vector3<T> {
        self.k
    }

    /// Returns the curvature magnitude
    pub fn kappa(&self) -> T {
        self.k.norm()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use super::Curvature;

    #[test]
    fn circle_of_radius_two() {
        // p(s) = 2 (cos s, sin s, 0) at s = 0
        let c = Curvature::derivatives(Vector3::new(0., 2., 0.), Vector3::new(-2., 0., 0.)).unwrap();
        assert_relative_eq!(c.tangent_vector(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(c.kappa(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn vanishing_first_derivative() {
        let c = Curvature::derivatives(Vector3::zeros(), Vector3::new(0., 0., 3.)).unwrap_err();
        assert_relative_eq!(c.tangent_vector(), Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(c.kappa(), 0.0);
    }
}
