//! Matriz: dense matrix arithmetic primitives in pure Rust.
//!
//! Matriz provides an immutable [`primitives::Matrix`] value type and a
//! mutable [`primitives::MatrixMut`] variant with in-place compound
//! operations, built around shape-checked arithmetic where every failure
//! is an error value rather than a panic.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_rows(&[
//!     vec![2.0, 2.0, 2.0],
//!     vec![2.0, 2.0, 2.0],
//! ]).unwrap();
//!
//! // Element-wise arithmetic returns a new matrix
//! let sum = a.add(&a).unwrap();
//! assert_eq!(sum.get(1, 2).unwrap(), 4.0);
//!
//! // Multiplication follows the (m x n) * (n x p) shape law
//! let product = a.matmul(&a.transpose()).unwrap();
//! assert_eq!(product.shape(), (2, 2));
//!
//! // The mutable variant updates its own storage in place
//! let mut m = MatrixMut::from(a);
//! m.mul_scalar_assign(3.0);
//! assert_eq!(m.get(0, 0).unwrap(), 6.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Matrix and MatrixMut types
//! - [`error`]: Error type and Result alias
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;
