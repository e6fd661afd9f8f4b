use gauss_quad::GaussLegendre;
use itertools::Itertools;
use nalgebra::{convert, Point3, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::{three_points_are_flat, Curvature, FloatingPoint};

use super::{PatchEndpoints, PatchInterpolator, PatchInterpolatorOptions};

/// Number of Gauss-Legendre nodes used for the arc length of a cubic patch
const QUADRATURE_NODES: usize = 16;

/// Maximum recursion depth of the adaptive tessellation
const MAX_TESSELLATION_DEPTH: usize = 12;

/// A curved patch that keeps its endpoints next to the interpolator,
/// so it can be queried like a standalone parametric curve over `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatchCurve<T: FloatingPoint> {
    endpoints: PatchEndpoints<T>,
    interpolator: PatchInterpolator<T>,
}

impl<T: FloatingPoint> PatchCurve<T> {
    /// Create a patch curve. Degenerate geometry yields the straight chord.
    pub fn new(endpoints: PatchEndpoints<T>) -> Self {
        let interpolator = PatchInterpolator::new(&endpoints);
        Self {
            endpoints,
            interpolator,
        }
    }

    /// Create a patch curve with the given options. Degenerate geometry yields the straight chord.
    pub fn with_options(endpoints: PatchEndpoints<T>, options: &PatchInterpolatorOptions<T>) -> Self {
        let interpolator = PatchInterpolator::with_options(&endpoints, options);
        Self {
            endpoints,
            interpolator,
        }
    }

    /// Create a patch curve
    /// # Failures
    /// - if the geometry is degenerate
    ///
    /// # Example
    /// ```
    /// use patchcurve::prelude::*;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let coincident = PatchEndpoints::new(
    ///     [Point3::new(1., 1., 1.), Point3::new(1., 1., 1.)],
    ///     [Vector3::x(), Vector3::x()],
    /// );
    /// assert!(PatchCurve::<f64>::try_new(coincident).is_err());
    /// ```
    pub fn try_new(endpoints: PatchEndpoints<T>) -> anyhow::Result<Self> {
        let interpolator = PatchInterpolator::try_new(&endpoints)?;
        Ok(Self {
            endpoints,
            interpolator,
        })
    }

    pub fn endpoints(&self) -> &PatchEndpoints<T> {
        &self.endpoints
    }

    pub fn interpolator(&self) -> &PatchInterpolator<T> {
        &self.interpolator
    }

    pub fn is_valid(&self) -> bool {
        self.interpolator.is_valid()
    }

    /// Same curve traversed from endpoint 1 to endpoint 0
    pub fn reversed(&self) -> Self {
        Self {
            endpoints: self.endpoints.reversed(),
            interpolator: self.interpolator.reversed(),
        }
    }

    /// Evaluate the curve at a given parameter to get a point
    pub fn point_at(&self, t: T) -> Point3<T> {
        self.interpolator.evaluate(self.endpoints.positions(), t)
    }

    /// Evaluate the curve at a given parameter to get a tangent vector (not normalized)
    pub fn tangent_at(&self, t: T) -> Vector3<T> {
        self.interpolator.derivative(self.endpoints.positions(), t)
    }

    /// Evaluate the curvature at a given parameter
    pub fn curvature_at(&self, t: T) -> Curvature<T> {
        let deriv1 = self.tangent_at(t);
        let deriv2 = self.interpolator.second_derivative(t);
        Curvature::derivatives(deriv1, deriv2).unwrap_or_else(|c| c)
    }

    /// Sample the curve at a given number of points between the start and end parameters
    pub fn sample_regular_range(
        &self,
        start: T,
        end: T,
        samples: usize,
    ) -> anyhow::Result<Vec<Point3<T>>> {
        Ok(self
            .sample_regular_range_with_parameter(start, end, samples)?
            .into_iter()
            .map(|(_, p)| p)
            .collect())
    }

    /// Sample the curve at a given number of points between the start and end
    /// Return the vector of tuples of parameter and point
    pub fn sample_regular_range_with_parameter(
        &self,
        start: T,
        end: T,
        samples: usize,
    ) -> anyhow::Result<Vec<(T, Point3<T>)>> {
        anyhow::ensure!(samples >= 2, "At least two samples are required, got {}", samples);
        let step = (end - start) / convert::<f64, T>((samples - 1) as f64);
        Ok((0..samples)
            .map(|i| {
                let t = start + convert::<f64, T>(i as f64) * step;
                (t, self.point_at(t))
            })
            .collect())
    }

    /// Arc length of the whole patch
    pub fn try_length(&self) -> anyhow::Result<T> {
        self.try_length_at(T::one())
    }

    /// Arc length between parameter 0 and `t` (negative when `t < 0`)
    pub fn try_length_at(&self, t: T) -> anyhow::Result<T> {
        let right = t
            .to_f64()
            .ok_or_else(|| anyhow::anyhow!("Parameter is not representable as f64"))?;
        let gauss = GaussLegendre::new(QUADRATURE_NODES)?;
        let sum = gauss.integrate(0.0, right, |x| {
            self.tangent_at(convert(x))
                .norm()
                .to_f64()
                .unwrap_or(f64::NAN)
        });
        Ok(convert(sum))
    }

    /// Tessellate the curve into a polyline whose interior points lie within
    /// `tolerance` of the straight pieces, by recursive bisection of the parameter range
    pub fn tessellate(&self, tolerance: Option<T>) -> Vec<Point3<T>> {
        let tol = tolerance.unwrap_or(convert(1e-3));
        if self.interpolator.is_flat() {
            return self.endpoints.positions().to_vec();
        }
        let mut points = self.tessellate_adaptive(T::zero(), T::one(), tol, 0);
        points.push(self.point_at(T::one()));
        points
    }

    /// Returns the points in [start, end), the end point is emitted by the caller
    fn tessellate_adaptive(&self, start: T, end: T, tol: T, depth: usize) -> Vec<Point3<T>> {
        let p1 = self.point_at(start);
        let p3 = self.point_at(end);

        // probe off-center so an antisymmetric profile cannot hide on the chord
        let delta = end - start;
        let third: T = convert(1.0 / 3.0);
        let q1 = self.point_at(start + delta * third);
        let q2 = self.point_at(end - delta * third);

        let flat = three_points_are_flat(&p1, &q1, &p3, tol)
            && three_points_are_flat(&p1, &q2, &p3, tol);
        if flat || depth >= MAX_TESSELLATION_DEPTH {
            return vec![p1];
        }

        let half: T = convert(0.5);
        let mid = start + delta * half;
        let mut left = self.tessellate_adaptive(start, mid, tol, depth + 1);
        left.extend(self.tessellate_adaptive(mid, end, tol, depth + 1));
        left
    }

    /// Control points of the same cubic in Bézier form over `[0, 1]`
    pub fn bezier_control_points(&self) -> [Point3<T>; 4] {
        let [x0, x1] = *self.endpoints.positions();
        let third: T = convert(1.0 / 3.0);
        let d0 = self.tangent_at(T::zero()) * third;
        let d1 = self.tangent_at(T::one()) * third;
        [x0, x0 + d0, x1 - d1, x1]
    }

    /// Largest distance from the chord among `samples` evenly spaced parameters
    pub fn max_deviation(&self, samples: usize) -> anyhow::Result<T> {
        let params = self.sample_regular_range_with_parameter(T::zero(), T::one(), samples)?;
        Ok(params
            .iter()
            .map(|(t, _)| self.interpolator.deviation(*t).abs())
            .fold(T::zero(), |a, b| a.max(b)))
    }

    /// Length of the polyline through `samples` evenly spaced points
    pub fn polyline_length(&self, samples: usize) -> anyhow::Result<T> {
        let points = self.sample_regular_range(T::zero(), T::one(), samples)?;
        Ok(points
            .iter()
            .tuple_windows()
            .map(|(a, b)| (b - a).norm())
            .fold(T::zero(), |acc, l| acc + l))
    }

    /// Cast the curve to a different floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> PatchCurve<F> {
        PatchCurve {
            endpoints: self.endpoints.cast(),
            interpolator: self.interpolator.cast(),
        }
    }
}
