//! Curved boundary patches between two mesh nodes.
//!
//! A patch replaces a straight mesh edge by a cubic curve that passes through
//! both nodes and whose end tangents are orthogonal to the prescribed node normals.

mod misc;
mod patch;

pub mod prelude {
    pub use crate::misc::*;
    pub use crate::patch::*;
}
