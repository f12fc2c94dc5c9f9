//! Error types for matrix construction and inversion
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Matrix Error Enum ==
/// Errors raised by the linear algebra routines.
///
/// When inversion is used as the transform of a cached value, these errors
/// reach the caller of `resolve` unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// No pivot larger than the tolerance was found
    #[error("Matrix is singular: no usable pivot in column {pivot_column}")]
    Singular { pivot_column: usize },

    /// Operation requires a square matrix
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Operand shapes are incompatible
    #[error("Dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Matrix has no rows or no columns
    #[error("Matrix must have at least one row and one column")]
    Empty,

    /// Rows of differing lengths were supplied
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

// == Result Type Alias ==
/// Convenience Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
