//! Dense row-major matrices of `f64`.
//!
//! Model
//! - Cells live in one flat `Vec<f64>`; `(r, c)` maps to `r * cols + c`.
//! - `cells.len() == rows * cols` always holds; fields are private and every
//!   constructor establishes it.
//! - Arithmetic (see `arith`) never mutates its operands and returns freshly
//!   allocated results. `set` is the only in-place mutation.
//!
//! Code cross-refs: `BricksError::{OutOfBounds, ShapeMismatch}`, `dim3::{rx, ry, rz}`.

mod arith;

use std::fmt;

use nalgebra::DMatrix;
use rand::Rng;

use crate::error::{BricksError, BricksResult, Shape};

/// Dense `rows × cols` matrix stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl Matrix {
    /// All-zero matrix of the given shape.
    ///
    /// # Panics
    /// If `rows * cols` overflows `usize` (same contract as `vec!`).
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0.0; cell_count(rows, cols)],
        }
    }

    /// Square identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.cells[i * n + i] = 1.0;
        }
        m
    }

    /// Cells drawn independently from U[0, 1) using the thread-local RNG.
    ///
    /// Non-deterministic; use `random_with` and a seeded RNG for reproducible draws.
    pub fn random(rows: usize, cols: usize) -> Self {
        Self::random_with(rows, cols, &mut rand::thread_rng())
    }

    /// Cells drawn independently from U[0, 1) using `rng`.
    ///
    /// # Panics
    /// If `rows * cols` overflows `usize`.
    pub fn random_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = (0..cell_count(rows, cols)).map(|_| rng.gen::<f64>()).collect();
        Self { rows, cols, cells }
    }

    /// Build from row-major cells. Fails unless `cells.len() == rows * cols`
    /// (an overflowing product never matches).
    pub fn from_row_slice(rows: usize, cols: usize, cells: &[f64]) -> BricksResult<Self> {
        if Shape::new(rows, cols).cell_count() != Some(cells.len()) {
            return Err(BricksError::ShapeMismatch {
                op: "build",
                left: Shape::new(rows, cols),
                right: Shape::new(cells.len(), 1),
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: cells.to_vec(),
        })
    }

    /// Build from fixed-width rows; always consistent, so infallible.
    pub fn from_rows<const C: usize>(rows: &[[f64; C]]) -> Self {
        Self {
            rows: rows.len(),
            cols: C,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    /// Column vector (`values.len() × 1`) with cell `i` equal to `values[i]`.
    pub fn column_vector(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            cells: values.to_vec(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }
    /// Row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    #[inline]
    fn index(&self, r: usize, c: usize) -> usize {
        self.cols * r + c
    }

    /// Value at row `r`, column `c`.
    pub fn at(&self, r: usize, c: usize) -> BricksResult<f64> {
        if !self.shape().contains(r, c) {
            return Err(self.out_of_bounds("get", r, c));
        }
        Ok(self.cells[self.index(r, c)])
    }

    /// Overwrite the value at row `r`, column `c`. Nothing changes on error.
    pub fn set(&mut self, r: usize, c: usize, value: f64) -> BricksResult<()> {
        if !self.shape().contains(r, c) {
            return Err(self.out_of_bounds("set", r, c));
        }
        let i = self.index(r, c);
        self.cells[i] = value;
        Ok(())
    }

    fn out_of_bounds(&self, op: &'static str, row: usize, col: usize) -> BricksError {
        BricksError::OutOfBounds {
            op,
            row,
            col,
            shape: self.shape(),
        }
    }

    /// Cells of a column vector in row order. Fails unless `cols == 1`.
    pub fn to_vec(&self) -> BricksResult<Vec<f64>> {
        if self.cols != 1 {
            return Err(BricksError::ShapeMismatch {
                op: "vectorize",
                left: self.shape(),
                right: Shape::new(self.rows, 1),
            });
        }
        Ok(self.cells.clone())
    }

    /// True when shapes agree and every cell differs by at most `tol`.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

fn cell_count(rows: usize, cols: usize) -> usize {
    match Shape::new(rows, cols).cell_count() {
        Some(n) => n,
        None => panic!("matrix shape ({rows}, {cols}) overflows usize"),
    }
}

impl From<Vec<f64>> for Matrix {
    /// Column vector, taking ownership of `values`.
    fn from(values: Vec<f64>) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            cells: values,
        }
    }
}

impl From<&DMatrix<f64>> for Matrix {
    fn from(m: &DMatrix<f64>) -> Self {
        // nalgebra stores column-major; transpose so the column-major buffer
        // of `t` is our row-major layout.
        let t = m.transpose();
        Self {
            rows: m.nrows(),
            cols: m.ncols(),
            cells: t.as_slice().to_vec(),
        }
    }
}

impl From<&Matrix> for DMatrix<f64> {
    fn from(m: &Matrix) -> Self {
        DMatrix::from_row_slice(m.rows, m.cols, &m.cells)
    }
}

impl fmt::Display for Matrix {
    /// `Matrix (r, c)` header, then one bracketed row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}", self.shape())?;
        write!(f, "[")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, ",\n ")?;
            }
            let row = &self.cells[r * self.cols..(r + 1) * self.cols];
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        write!(f, "]")
    }
}
