use nalgebra::{Point3, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::FloatingPoint;

/// Two boundary nodes of a patch with their prescribed normal directions.
///
/// Index 0 maps to parameter 0 and index 1 to parameter 1.
/// Normals need not be unit length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatchEndpoints<T: FloatingPoint> {
    positions: [Point3<T>; 2],
    normals: [Vector3<T>; 2],
}

impl<T: FloatingPoint> PatchEndpoints<T> {
    pub fn new(positions: [Point3<T>; 2], normals: [Vector3<T>; 2]) -> Self {
        Self { positions, normals }
    }

    pub fn positions(&self) -> &[Point3<T>; 2] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vector3<T>; 2] {
        &self.normals
    }

    /// Vector from endpoint 0 to endpoint 1
    pub fn chord(&self) -> Vector3<T> {
        self.positions[1] - self.positions[0]
    }

    pub fn chord_length(&self) -> T {
        self.chord().norm()
    }

    /// Same patch with the opposite orientation
    pub fn reversed(&self) -> Self {
        Self {
            positions: [self.positions[1], self.positions[0]],
            normals: [self.normals[1], self.normals[0]],
        }
    }

    /// Cast the endpoints to a different floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> PatchEndpoints<F> {
        PatchEndpoints {
            positions: self.positions.map(|p| p.cast()),
            normals: self.normals.map(|n| n.cast()),
        }
    }
}
