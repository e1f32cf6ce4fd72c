//! Spatial points and axis rotations.
//!
//! Points convert to and from `3×1` column `Matrix` values so the rotation
//! builders in `rotate` can be applied with `Matrix::dot`.

mod rotate;

use nalgebra::Vector3;

use crate::error::{BricksError, BricksResult, Shape};
use crate::matrix::Matrix;

pub use rotate::{rx, ry, rz};

/// Point in space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Column vector `[x, y, z]ᵀ`.
    pub fn to_vector(&self) -> Matrix {
        Matrix::column_vector(&[self.x, self.y, self.z])
    }

    /// Inverse of `to_vector`. Fails unless `m` is `3×1`.
    pub fn from_vector(m: &Matrix) -> BricksResult<Self> {
        let expected = Shape::new(3, 1);
        if m.shape() != expected {
            return Err(BricksError::ShapeMismatch {
                op: "convert",
                left: m.shape(),
                right: expected,
            });
        }
        let c = m.cells();
        Ok(Self::new(c[0], c[1], c[2]))
    }

    /// `r · p` for a `3×3` matrix `r`, e.g. one of `rx`, `ry`, `rz`.
    pub fn rotate(&self, r: &Matrix) -> BricksResult<Self> {
        Self::from_vector(&r.dot(&self.to_vector())?)
    }
}

impl From<Vector3<f64>> for Point3 {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vector3<f64> {
    #[inline]
    fn from(p: Point3) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_round_trip() {
        let p = Point3::new(1.0, -2.0, 3.5);
        let v = p.to_vector();
        assert_eq!(v.shape(), Shape::new(3, 1));
        assert_eq!(v.to_vec().unwrap(), vec![1.0, -2.0, 3.5]);
        assert_eq!(Point3::from_vector(&v).unwrap(), p);
    }

    #[test]
    fn from_vector_rejects_other_shapes() {
        assert!(matches!(
            Point3::from_vector(&Matrix::zeros(1, 3)),
            Err(BricksError::ShapeMismatch { op: "convert", .. })
        ));
        assert!(Point3::from_vector(&Matrix::zeros(4, 1)).is_err());
    }

    #[test]
    fn rotate_requires_square_three() {
        let p = Point3::new(1.0, 0.0, 0.0);
        assert!(p.rotate(&Matrix::identity(2)).is_err());
        assert!(p.rotate(&Matrix::zeros(4, 3)).is_err());
        assert_eq!(p.rotate(&Matrix::identity(3)).unwrap(), p);
    }
}
