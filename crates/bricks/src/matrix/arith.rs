//! Shape-checked arithmetic. All results are newly allocated.

use std::ops::{Mul, Neg};

use super::Matrix;
use crate::error::{BricksError, BricksResult};

impl Matrix {
    fn mismatch(&self, op: &'static str, other: &Matrix) -> BricksError {
        BricksError::ShapeMismatch {
            op,
            left: self.shape(),
            right: other.shape(),
        }
    }

    fn zip_with(
        &self,
        op: &'static str,
        other: &Matrix,
        f: impl Fn(f64, f64) -> f64,
    ) -> BricksResult<Matrix> {
        if self.shape() != other.shape() {
            return Err(self.mismatch(op, other));
        }
        let cells = self
            .cells
            .iter()
            .zip(other.cells.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// Matrix product `self · other`. Requires `self.cols == other.rows`.
    ///
    /// Complexity: O(rows · cols · other.cols).
    pub fn dot(&self, other: &Matrix) -> BricksResult<Matrix> {
        if self.cols != other.rows {
            return Err(self.mismatch("dot", other));
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            let lhs = &self.cells[i * self.cols..(i + 1) * self.cols];
            for j in 0..other.cols {
                let mut sum = 0.0;
                for (k, a) in lhs.iter().enumerate() {
                    sum += a * other.cells[k * other.cols + j];
                }
                out.cells[i * other.cols + j] = sum;
            }
        }
        Ok(out)
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Matrix) -> BricksResult<Matrix> {
        self.zip_with("add", other, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Matrix) -> BricksResult<Matrix> {
        self.zip_with("subtract", other, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn multiply(&self, other: &Matrix) -> BricksResult<Matrix> {
        self.zip_with("multiply", other, |a, b| a * b)
    }

    /// Every cell multiplied by `scalar`.
    pub fn scale(&self, scalar: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|v| v * scalar).collect(),
        }
    }

    /// `(cols × rows)` matrix with `out[j][i] = self[i][j]`.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.cells[j * self.rows + i] = self.cells[i * self.cols + j];
            }
        }
        out
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    #[inline]
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
