use std::fmt;

/// One of the two boundary nodes of a patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatchEnd {
    /// Endpoint 0, at parameter 0
    Start,
    /// Endpoint 1, at parameter 1
    End,
}

impl PatchEnd {
    /// Position of the endpoint in [`PatchEndpoints`](super::PatchEndpoints) arrays
    pub fn index(self) -> usize {
        match self {
            PatchEnd::Start => 0,
            PatchEnd::End => 1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            PatchEnd::Start => PatchEnd::End,
            PatchEnd::End => PatchEnd::Start,
        }
    }
}

/// Reason a patch falls back to its straight chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatchDegeneracy {
    /// The two endpoints coincide, so there is no chord to bend.
    CoincidentEndpoints,
    /// The normal at `end` has zero length.
    ZeroNormal { end: PatchEnd },
    /// The normal at `end` is parallel to the chord, which makes the end slope unbounded.
    NormalAlongChord { end: PatchEnd },
    /// The normals cancel out across the chord, leaving no transverse direction.
    OpposingNormals,
}

impl PatchDegeneracy {
    /// The same degeneracy seen from the opposite patch orientation
    pub fn reversed(self) -> Self {
        match self {
            PatchDegeneracy::ZeroNormal { end } => PatchDegeneracy::ZeroNormal {
                end: end.opposite(),
            },
            PatchDegeneracy::NormalAlongChord { end } => PatchDegeneracy::NormalAlongChord {
                end: end.opposite(),
            },
            PatchDegeneracy::CoincidentEndpoints => PatchDegeneracy::CoincidentEndpoints,
            PatchDegeneracy::OpposingNormals => PatchDegeneracy::OpposingNormals,
        }
    }
}

impl fmt::Display for PatchDegeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchDegeneracy::CoincidentEndpoints => write!(f, "patch endpoints coincide"),
            PatchDegeneracy::ZeroNormal { end } => {
                write!(f, "normal at endpoint {} has zero length", end.index())
            }
            PatchDegeneracy::NormalAlongChord { end } => {
                write!(f, "normal at endpoint {} is parallel to the chord", end.index())
            }
            PatchDegeneracy::OpposingNormals => {
                write!(f, "endpoint normals have no common transverse direction")
            }
        }
    }
}

impl std::error::Error for PatchDegeneracy {}
