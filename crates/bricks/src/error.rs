//! Error type shared by all modules.

use std::fmt;

use thiserror::Error;

/// Matrix dimensions `(rows, cols)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
    /// Number of cells, `rows * cols`; `None` if the product overflows `usize`.
    #[inline]
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// Caller contract violations. Every failure is deterministic given the inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BricksError {
    #[error("cannot {op} ({row}, {col}) in {shape} matrix")]
    OutOfBounds {
        op: &'static str,
        row: usize,
        col: usize,
        shape: Shape,
    },

    /// `left` is the receiver's shape; `right` the argument's (or the expected one
    /// for unary checks such as `to_vec`).
    #[error("cannot {op} matrices {left} and {right}")]
    ShapeMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type BricksResult<T> = Result<T, BricksError>;
