//! Shared validated arithmetic kernels.
//!
//! Free functions over row-major `f64` buffers and their shapes. Both
//! [`Matrix`](super::Matrix) and [`MatrixMut`](super::MatrixMut) route
//! arithmetic through these kernels, so every operation validates its
//! operands exactly once and produces a complete result buffer before any
//! caller state changes.

use crate::error::{MatrizError, Result};

/// Shape of a matrix buffer as (rows, cols).
pub(super) type Shape = (usize, usize);

/// Element-wise sum of two equally shaped buffers.
pub(super) fn add(a: &[f64], ashape: Shape, b: &[f64], bshape: Shape) -> Result<Vec<f64>> {
    if ashape != bshape {
        return Err(MatrizError::shape_mismatch(ashape, bshape));
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x + y).collect())
}

/// Element-wise difference of two equally shaped buffers.
pub(super) fn sub(a: &[f64], ashape: Shape, b: &[f64], bshape: Shape) -> Result<Vec<f64>> {
    if ashape != bshape {
        return Err(MatrizError::shape_mismatch(ashape, bshape));
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
}

/// Inner-product matrix multiplication.
///
/// Requires `ashape.1 == bshape.0`; returns the result buffer together
/// with its shape `(ashape.0, bshape.1)`.
pub(super) fn matmul(a: &[f64], ashape: Shape, b: &[f64], bshape: Shape) -> Result<(Vec<f64>, Shape)> {
    let (m, n) = ashape;
    let (inner, p) = bshape;
    if n != inner {
        return Err(MatrizError::shape_mismatch(ashape, bshape));
    }

    let mut out = vec![0.0; m * p];
    for i in 0..m {
        for j in 0..p {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * p + j];
            }
            out[i * p + j] = sum;
        }
    }

    Ok((out, (m, p)))
}

/// Element-wise scaling by a factor.
pub(super) fn scale(a: &[f64], factor: f64) -> Vec<f64> {
    a.iter().map(|x| x * factor).collect()
}

/// Element-wise division by a scalar.
///
/// The divisor is tested against exact `0.0`; no epsilon is applied.
pub(super) fn scale_div(a: &[f64], divisor: f64) -> Result<Vec<f64>> {
    if divisor == 0.0 {
        return Err(MatrizError::DivisionByZero);
    }
    Ok(a.iter().map(|x| x / divisor).collect())
}

/// Element-wise negation.
pub(super) fn negate(a: &[f64]) -> Vec<f64> {
    a.iter().map(|x| -x).collect()
}
