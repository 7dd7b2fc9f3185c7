//! Core matrix primitives (Matrix, MatrixMut).
//!
//! The immutable [`Matrix`] and mutable [`MatrixMut`] types share the
//! validated arithmetic kernels in `kernel`, so mutating and non-mutating
//! operations agree on validation and results by construction.

mod kernel;
mod matrix;
mod matrix_mut;

pub use matrix::Matrix;
pub use matrix_mut::MatrixMut;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
