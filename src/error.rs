//! Error types for matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for matriz operations.
///
/// Provides detailed context about failures including incompatible operand
/// shapes, zero divisors, out-of-range positions, and malformed
/// construction input.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::ShapeMismatch {
///     lhs: "2x3".to_string(),
///     rhs: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("incompatible matrix shapes"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Operand shapes are incompatible for the requested operation.
    ShapeMismatch {
        /// Left operand shape description
        lhs: String,
        /// Right operand shape description
        rhs: String,
    },

    /// Scalar divisor is exactly zero.
    DivisionByZero,

    /// Read or write with an invalid row/column position.
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// Construction from a ragged or empty buffer.
    MalformedInput {
        /// Description of the offending input
        message: String,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::ShapeMismatch { lhs, rhs } => {
                write!(f, "incompatible matrix shapes: {lhs} and {rhs}")
            }
            MatrizError::DivisionByZero => {
                write!(f, "division by zero: scalar divisor is exactly 0")
            }
            MatrizError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "index ({row}, {col}) out of bounds for {rows}x{cols} matrix"
                )
            }
            MatrizError::MalformedInput { message } => {
                write!(f, "malformed matrix input: {message}")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create a shape mismatch error from the two operand shapes
    #[must_use]
    pub fn shape_mismatch(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            lhs: format!("{}x{}", lhs.0, lhs.1),
            rhs: format!("{}x{}", rhs.0, rhs.1),
        }
    }

    /// Create an index out of bounds error for a position in a matrix
    #[must_use]
    pub fn index_out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Create a malformed input error with a descriptive message
    #[must_use]
    pub fn malformed_input(message: &str) -> Self {
        Self::MalformedInput {
            message: message.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
