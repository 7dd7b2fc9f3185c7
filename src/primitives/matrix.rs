//! Immutable matrix type for 2D numeric data.

use super::kernel;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense 2D matrix of `f64` values (row-major storage).
///
/// Instances are immutable after construction and own their buffer
/// exclusively; every arithmetic operation validates operand shapes and
/// returns a brand-new `Matrix`. Equality is structural and exact: two
/// matrices are equal iff their shapes match and every corresponding
/// element compares equal with no tolerance.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a new matrix by copying a nested rectangular buffer.
    ///
    /// Every row must have the same length as the first; the check is
    /// explicit rather than trusting the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty, the first row is empty, or
    /// any row length differs from the first row's.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(MatrizError::malformed_input("matrix needs at least one row"));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(MatrizError::malformed_input(
                "matrix rows need at least one element",
            ));
        }

        let mut data = Vec::with_capacity(height * width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MatrizError::malformed_input(&format!(
                    "row {i} has {} elements, expected {width}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: height,
            cols: width,
        })
    }

    /// Creates a new matrix from a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or data length doesn't
    /// match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::malformed_input(
                "matrix dimensions must be at least 1x1",
            ));
        }
        if data.len() != rows * cols {
            return Err(MatrizError::malformed_input(&format!(
                "data length {} does not equal {rows} * {cols}",
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Gets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::index_out_of_bounds(
                row, col, self.rows, self.cols,
            ));
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Writes the element at (row, col). Shared write path for the mutable
    /// wrapper; bounds are checked the same way as reads.
    pub(super) fn set_element(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::index_out_of_bounds(
                row, col, self.rows, self.cols,
            ));
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let data = kernel::add(&self.data, self.shape(), &other.data, other.shape())?;
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let data = kernel::sub(&self.data, self.shape(), &other.data, other.shape())?;
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        let (data, (rows, cols)) =
            kernel::matmul(&self.data, self.shape(), &other.data, other.shape())?;
        Ok(Self { data, rows, cols })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: kernel::scale(&self.data, scalar),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Divides each element by a scalar.
    ///
    /// # Errors
    ///
    /// Returns an error if the divisor is exactly zero.
    pub fn div_scalar(&self, scalar: f64) -> Result<Self> {
        let data = kernel::scale_div(&self.data, scalar)?;
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Returns a new matrix with every element negated.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            data: kernel::negate(&self.data),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

/// Formats rows separated by newlines, elements within a row separated by
/// a single space, with a trailing newline after the last row.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("data length matches rows * cols");
/// assert_eq!(m.to_string(), "1 2\n3 4\n");
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.cols) {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
