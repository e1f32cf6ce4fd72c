//! Right-handed rotation matrices about the coordinate axes (angles in radians).

use crate::matrix::Matrix;

/// Rotation by `theta` about the X axis.
pub fn rx(theta: f64) -> Matrix {
    let (s, c) = theta.sin_cos();
    Matrix::from_rows(&[
        [1.0, 0.0, 0.0],
        [0.0, c, -s],
        [0.0, s, c],
    ])
}

/// Rotation by `theta` about the Y axis.
pub fn ry(theta: f64) -> Matrix {
    let (s, c) = theta.sin_cos();
    Matrix::from_rows(&[
        [c, 0.0, s],
        [0.0, 1.0, 0.0],
        [-s, 0.0, c],
    ])
}

/// Rotation by `theta` about the Z axis.
pub fn rz(theta: f64) -> Matrix {
    let (s, c) = theta.sin_cos();
    Matrix::from_rows(&[
        [c, -s, 0.0],
        [s, c, 0.0],
        [0.0, 0.0, 1.0],
    ])
}
