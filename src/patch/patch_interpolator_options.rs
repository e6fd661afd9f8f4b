use crate::misc::FloatingPoint;

/// Tolerances for building a patch interpolator
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatchInterpolatorOptions<T: FloatingPoint> {
    /// Relative tolerance for coincident endpoints.
    /// The endpoints coincide when the chord is zero or no longer than
    /// `coincident_tolerance * max(|x0|, |x1|)`, i.e. within the rounding of the coordinates.
    pub coincident_tolerance: T,
    /// Tolerance on unit vectors: a unit normal whose transverse component is at or below it
    /// counts as parallel to the chord, and a mean normal at or below it as cancelled out.
    pub degenerate_tolerance: T,
    /// Upper bound for the magnitude of the end slopes (transverse rise per unit chord length).
    /// `None` leaves the slopes unbounded.
    pub max_slope: Option<T>,
}

impl<T: FloatingPoint> Default for PatchInterpolatorOptions<T> {
    fn default() -> Self {
        Self {
            coincident_tolerance: T::default_epsilon() * T::from_f64(16.0).unwrap(),
            degenerate_tolerance: T::default_epsilon().sqrt(),
            max_slope: None,
        }
    }
}

impl<T: FloatingPoint> PatchInterpolatorOptions<T> {
    pub fn with_coincident_tolerance(mut self, coincident_tolerance: T) -> Self {
        self.coincident_tolerance = coincident_tolerance;
        self
    }

    pub fn with_degenerate_tolerance(mut self, degenerate_tolerance: T) -> Self {
        self.degenerate_tolerance = degenerate_tolerance;
        self
    }

    pub fn with_max_slope(mut self, max_slope: T) -> Self {
        self.max_slope = Some(max_slope);
        self
    }
}
