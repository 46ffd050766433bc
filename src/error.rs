//! Error types for matrix construction, element access and arithmetic
//!
//! Every fallible operation in the crate returns [`MatrixError`]. Problems
//! with individual entry lines while parsing are not errors; they are
//! reported as [`crate::codec::ParseWarning`]s next to the parsed matrix.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised by matrix operations
#[derive(Error, Debug)]
pub enum MatrixError {
    /// Row or column count missing, unparsable or not strictly positive
    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimension(String),

    /// Coordinate outside the matrix extent
    #[error("Index ({row}, {col}) out of bounds for matrix of size {n_rows}x{n_cols}")]
    OutOfBounds {
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("Dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Checked integer arithmetic overflowed while computing an entry
    #[error("Integer overflow in {op} at ({row}, {col})")]
    Overflow {
        op: &'static str,
        row: usize,
        col: usize,
    },

    /// Reading or writing a matrix file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    pub(crate) fn invalid_dimension(reason: impl Into<String>) -> Self {
        MatrixError::InvalidDimension(reason.into())
    }

    pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        MatrixError::DimensionMismatch { op, left, right }
    }
}
