//! Mutable matrix variant with in-place compound operations.

use super::Matrix;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense 2D matrix of `f64` values whose compound operations replace the
/// owned buffer in place.
///
/// `MatrixMut` offers the full read-only surface of [`Matrix`] plus a
/// write accessor and compound arithmetic. Compound operations validate
/// and compute a complete result through the same kernels as the
/// non-mutating operations before touching the receiver, so a failed
/// operation leaves the receiver unchanged. A compound multiplication may
/// change the receiver's shape; its identity is preserved. Non-mutating
/// arithmetic on `MatrixMut` returns a new `MatrixMut`, keeping results
/// derived from mutable operands mutable.
///
/// # Examples
///
/// ```
/// use matriz::primitives::MatrixMut;
///
/// let mut m = MatrixMut::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("data length matches rows * cols");
/// let other = m.clone();
/// m.add_assign(&other).expect("same shape");
/// assert_eq!(m.get(1, 1).expect("in bounds"), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixMut {
    inner: Matrix,
}

impl MatrixMut {
    /// Creates a new mutable matrix by copying a nested rectangular buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty, the first row is empty, or
    /// any row length differs from the first row's.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        Ok(Self {
            inner: Matrix::from_rows(rows)?,
        })
    }

    /// Creates a new mutable matrix from a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or data length doesn't
    /// match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        Ok(Self {
            inner: Matrix::from_vec(rows, cols, data)?,
        })
    }

    /// Returns the read-only view of this matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &Matrix {
        &self.inner
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.inner.shape()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.inner.n_rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.inner.n_cols()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.inner.as_slice()
    }

    /// Gets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.inner.get(row, col)
    }

    /// Sets the element at (row, col) in place.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds; the matrix is
    /// unchanged on failure.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.inner.set_element(row, col, value)
    }

    /// Adds another matrix element-wise, returning a new mutable matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            inner: self.inner.add(&other.inner)?,
        })
    }

    /// Subtracts another matrix element-wise, returning a new mutable
    /// matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            inner: self.inner.sub(&other.inner)?,
        })
    }

    /// Matrix-matrix multiplication, returning a new mutable matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            inner: self.inner.matmul(&other.inner)?,
        })
    }

    /// Multiplies each element by a scalar, returning a new mutable matrix.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            inner: self.inner.mul_scalar(scalar),
        }
    }

    /// Divides each element by a scalar, returning a new mutable matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the divisor is exactly zero.
    pub fn div_scalar(&self, scalar: f64) -> Result<Self> {
        Ok(Self {
            inner: self.inner.div_scalar(scalar)?,
        })
    }

    /// Returns a new mutable matrix with every element negated.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            inner: self.inner.neg(),
        }
    }

    /// Transposes the matrix, returning a new mutable matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            inner: self.inner.transpose(),
        }
    }

    /// Adds another matrix element-wise, replacing the receiver's buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes don't match; the receiver is unchanged.
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        self.inner = self.inner.add(&other.inner)?;
        Ok(())
    }

    /// Subtracts another matrix element-wise, replacing the receiver's
    /// buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes don't match; the receiver is unchanged.
    pub fn sub_assign(&mut self, other: &Self) -> Result<()> {
        self.inner = self.inner.sub(&other.inner)?;
        Ok(())
    }

    /// Multiplies by another matrix, replacing the receiver's buffer and
    /// shape with the product's.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != other.n_rows()`; the receiver
    /// keeps its shape and contents on failure.
    pub fn matmul_assign(&mut self, other: &Self) -> Result<()> {
        self.inner = self.inner.matmul(&other.inner)?;
        Ok(())
    }

    /// Multiplies each element by a scalar in place.
    pub fn mul_scalar_assign(&mut self, scalar: f64) {
        self.inner = self.inner.mul_scalar(scalar);
    }

    /// Divides each element by a scalar in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the divisor is exactly zero; the receiver is
    /// unchanged.
    pub fn div_scalar_assign(&mut self, scalar: f64) -> Result<()> {
        self.inner = self.inner.div_scalar(scalar)?;
        Ok(())
    }
}

impl fmt::Display for MatrixMut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<Matrix> for MatrixMut {
    fn from(inner: Matrix) -> Self {
        Self { inner }
    }
}

impl From<MatrixMut> for Matrix {
    fn from(matrix: MatrixMut) -> Self {
        matrix.inner
    }
}

impl PartialEq<MatrixMut> for Matrix {
    fn eq(&self, other: &MatrixMut) -> bool {
        *self == other.inner
    }
}

impl PartialEq<Matrix> for MatrixMut {
    fn eq(&self, other: &Matrix) -> bool {
        self.inner == *other
    }
}

#[cfg(test)]
#[path = "matrix_mut_tests.rs"]
mod tests;
