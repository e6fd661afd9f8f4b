pub mod patch_curve;
pub mod patch_degeneracy;
pub mod patch_endpoints;
pub mod patch_interpolator;
pub mod patch_interpolator_options;
pub use patch_curve::*;
pub use patch_degeneracy::*;
pub use patch_endpoints::*;
pub use patch_interpolator::*;
pub use patch_interpolator_options::*;
