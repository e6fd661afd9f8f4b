use nalgebra::{convert, Point3, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::{FloatingPoint, VectorOps};

use super::{PatchDegeneracy, PatchEnd, PatchEndpoints, PatchInterpolatorOptions};

/// Cubic interpolant of a two node boundary patch.
///
/// The curve is the chord between the endpoints bent along a single transverse
/// direction `m` by a natural cubic spline profile:
///
/// `p(t) = (1 - t) x0 + t x1 + m ((A³ - A) c0 + (B³ - B) c1)`, with `A = 1 - t`, `B = t`.
///
/// The coefficients `c_i = y''_i h² / 6` are solved so that the end tangents
/// are orthogonal to the prescribed normals. The profile vanishes at `t = 0`
/// and `t = 1`, so the endpoints are reproduced for any coefficients.
///
/// Degenerate input (coincident endpoints, zero normals, normals parallel to the chord,
/// or normals cancelling each other) does not fail: the interpolator stores a flat profile,
/// evaluates to the straight chord, and reports the reason through [`PatchInterpolator::degeneracy`].
///
/// # Example
/// ```
/// use patchcurve::prelude::*;
/// use nalgebra::{Point3, Vector3};
/// use approx::assert_relative_eq;
///
/// let endpoints = PatchEndpoints::new(
///     [Point3::new(0., 0., 0.), Point3::new(0., 1., 0.)],
///     [Vector3::new(1., -1., 0.), Vector3::new(1., 1., 0.)],
/// );
/// let interpolator = PatchInterpolator::new(&endpoints);
/// assert!(interpolator.is_valid());
///
/// // the normals describe the parabola x = 0.25 - (y - 0.5)^2
/// let p = interpolator.evaluate(endpoints.positions(), 0.5);
/// assert_relative_eq!(p, Point3::new(0.25, 0.5, 0.), epsilon = 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatchInterpolator<T: FloatingPoint> {
    /// unit transverse direction, zero for a straight patch
    normal: Vector3<T>,
    /// `y'' h² / 6` at each endpoint
    coefficients: [T; 2],
    degeneracy: Option<PatchDegeneracy>,
}

impl<T: FloatingPoint> PatchInterpolator<T> {
    /// Build the interpolator with default options.
    /// Degenerate geometry falls back to the straight chord.
    pub fn new(endpoints: &PatchEndpoints<T>) -> Self {
        Self::with_options(endpoints, &PatchInterpolatorOptions::default())
    }

    /// Build the interpolator with the given options.
    /// Degenerate geometry falls back to the straight chord.
    pub fn with_options(
        endpoints: &PatchEndpoints<T>,
        options: &PatchInterpolatorOptions<T>,
    ) -> Self {
        Self::solve(endpoints, options).unwrap_or_else(|degeneracy| {
            #[cfg(feature = "log")]
            log::debug!("patch falls back to its chord: {}", degeneracy);
            Self::straight(Some(degeneracy))
        })
    }

    /// Build the interpolator with default options.
    /// # Failures
    /// - if the geometry is degenerate, with the [`PatchDegeneracy`] as the error
    pub fn try_new(endpoints: &PatchEndpoints<T>) -> anyhow::Result<Self> {
        Self::try_with_options(endpoints, &PatchInterpolatorOptions::default())
    }

    /// Build the interpolator with the given options.
    /// # Failures
    /// - if the geometry is degenerate, with the [`PatchDegeneracy`] as the error
    pub fn try_with_options(
        endpoints: &PatchEndpoints<T>,
        options: &PatchInterpolatorOptions<T>,
    ) -> anyhow::Result<Self> {
        Self::solve(endpoints, options).map_err(anyhow::Error::new)
    }

    fn straight(degeneracy: Option<PatchDegeneracy>) -> Self {
        Self {
            normal: Vector3::zeros(),
            coefficients: [T::zero(), T::zero()],
            degeneracy,
        }
    }

    fn solve(
        endpoints: &PatchEndpoints<T>,
        options: &PatchInterpolatorOptions<T>,
    ) -> Result<Self, PatchDegeneracy> {
        let tol = options.degenerate_tolerance;
        let [x0, x1] = endpoints.positions();

        // coincident up to the rounding of the coordinates, independent of placement and size
        let chord = endpoints.chord();
        let h = VectorOps::length(&chord);
        let magnitude = x0.coords.norm().max(x1.coords.norm());
        if h.is_zero() || h <= options.coincident_tolerance * magnitude {
            return Err(PatchDegeneracy::CoincidentEndpoints);
        }
        let axis = chord / h;

        let [n0, n1] = endpoints.normals();
        let n0 = n0
            .try_unit(T::zero())
            .ok_or(PatchDegeneracy::ZeroNormal {
                end: PatchEnd::Start,
            })?;
        let n1 = n1
            .try_unit(T::zero())
            .ok_or(PatchDegeneracy::ZeroNormal { end: PatchEnd::End })?;

        // shared transverse direction: the mean normal with its chord component removed
        let normal = VectorOps::add(&n0, &n1)
            .reject_from(&axis)
            .try_unit(tol)
            .ok_or(PatchDegeneracy::OpposingNormals)?;

        // slope dy/dx of the profile that keeps the tangent (1, slope) orthogonal to each normal
        let slope = |n: &Vector3<T>, end: PatchEnd| -> Result<T, PatchDegeneracy> {
            let along = VectorOps::dot(n, &axis);
            let across = VectorOps::dot(n, &normal);
            if across.abs() <= tol {
                return Err(PatchDegeneracy::NormalAlongChord { end });
            }
            let s = -along / across;
            Ok(match options.max_slope {
                Some(bound) => s.max(-bound).min(bound),
                None => s,
            })
        };
        let s0 = slope(&n0, PatchEnd::Start)?;
        let s1 = slope(&n1, PatchEnd::End)?;

        // f'(0) = -2 c0 - c1 = h s0 and f'(1) = c0 + 2 c1 = h s1
        let two: T = convert(2.0);
        let third: T = convert(1.0 / 3.0);
        let c0 = -h * (two * s0 + s1) * third;
        let c1 = h * (s0 + two * s1) * third;

        Ok(Self {
            normal,
            coefficients: [c0, c1],
            degeneracy: None,
        })
    }

    /// `false` if construction fell back to the straight chord
    pub fn is_valid(&self) -> bool {
        self.degeneracy.is_none()
    }

    /// Reason for the straight chord fallback, if any
    pub fn degeneracy(&self) -> Option<PatchDegeneracy> {
        self.degeneracy
    }

    /// Unit transverse direction of the profile (zero for a fallback patch)
    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    pub fn coefficients(&self) -> [T; 2] {
        self.coefficients
    }

    /// `true` if the interpolant coincides with the chord
    pub fn is_flat(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// Signed transverse offset from the chord along [`PatchInterpolator::normal`]
    pub fn deviation(&self, t: T) -> T {
        let a = T::one() - t;
        let b = t;
        let [c0, c1] = self.coefficients;
        (a * a * a - a) * c0 + (b * b * b - b) * c1
    }

    fn deviation_derivative(&self, t: T) -> T {
        let three: T = convert(3.0);
        let a = T::one() - t;
        let b = t;
        let [c0, c1] = self.coefficients;
        -(three * a * a - T::one()) * c0 + (three * b * b - T::one()) * c1
    }

    fn deviation_second_derivative(&self, t: T) -> T {
        let six: T = convert(6.0);
        let [c0, c1] = self.coefficients;
        six * ((T::one() - t) * c0 + t * c1)
    }

    /// Evaluate the patch at parameter `t`.
    /// `nodes` are the endpoint positions the interpolator was built from.
    /// Parameters outside `[0, 1]` extrapolate along the same cubic.
    pub fn evaluate(&self, nodes: &[Point3<T>; 2], t: T) -> Point3<T> {
        let [x0, x1] = nodes;
        let on_chord = x0 + (x1 - x0) * t;
        if self.is_flat() {
            return on_chord;
        }
        on_chord + self.normal * self.deviation(t)
    }

    /// First derivative of the patch with respect to `t`
    pub fn derivative(&self, nodes: &[Point3<T>; 2], t: T) -> Vector3<T> {
        let [x0, x1] = nodes;
        (x1 - x0) + self.normal * self.deviation_derivative(t)
    }

    /// Second derivative of the patch with respect to `t`
    pub fn second_derivative(&self, t: T) -> Vector3<T> {
        self.normal * self.deviation_second_derivative(t)
    }

    /// Interpolator of the same patch with endpoints 0 and 1 swapped.
    /// The transverse direction is shared, so only the coefficients trade places.
    pub fn reversed(&self) -> Self {
        let [c0, c1] = self.coefficients;
        Self {
            normal: self.normal,
            coefficients: [c1, c0],
            degeneracy: self.degeneracy.map(PatchDegeneracy::reversed),
        }
    }

    /// Cast the interpolator to a different floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> PatchInterpolator<F> {
        PatchInterpolator {
            normal: self.normal.cast(),
            coefficients: self.coefficients.map(convert),
            degeneracy: self.degeneracy,
        }
    }
}
