pub mod curvature;
pub mod floating_point;
pub mod trigonometry;
pub mod vector_ops;

pub use curvature::*;
pub use floating_point::*;
pub use trigonometry::*;
pub use vector_ops::*;
