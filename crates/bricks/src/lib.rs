//! Small numeric and geometric building blocks.
//!
//! Contents
//! - `matrix`: dense row-major `Matrix` with checked access and arithmetic.
//! - `dim2`: planar points, Jarvis-march convex hull, shoelace area.
//! - `dim3`: spatial points and the axis rotation builders `rx`, `ry`, `rz`.
//! - `slices`: `interleave` for alternating two slices.
//!
//! Every function is a pure computation over caller-owned data. Contract
//! violations (bad index, incompatible shapes, too few hull points) surface
//! as `BricksError` instead of panics.

pub mod dim2;
pub mod dim3;
pub mod error;
pub mod matrix;
pub mod slices;

pub use error::{BricksError, BricksResult, Shape};
pub use matrix::Matrix;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dim2::{convex_hull, orientation, polygon_area, Orientation, Point2};
    pub use crate::dim3::{rx, ry, rz, Point3};
    pub use crate::error::{BricksError, BricksResult, Shape};
    pub use crate::matrix::Matrix;
    pub use crate::slices::interleave;
}
