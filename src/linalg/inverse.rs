//! Matrix Inversion
//!
//! Gauss-Jordan elimination with partial pivoting.

use crate::error::{MatrixError, Result};
use crate::linalg::{Matrix, DEFAULT_PIVOT_TOLERANCE};

// == Invert ==
/// Inverts a square matrix using the default pivot tolerance.
pub fn invert(matrix: &Matrix) -> Result<Matrix> {
    invert_with_tolerance(matrix, DEFAULT_PIVOT_TOLERANCE)
}

/// Inverts a square matrix.
///
/// Each column picks the row with the largest remaining magnitude as its
/// pivot. A pivot with magnitude at or below `tolerance` means the matrix
/// is singular.
pub fn invert_with_tolerance(matrix: &Matrix, tolerance: f64) -> Result<Matrix> {
    if !matrix.is_square() {
        return Err(MatrixError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }

    let n = matrix.rows();
    let mut work = matrix.clone();
    let mut inverse = Matrix::identity(n)?;

    for col in 0..n {
        // Partial pivot: largest |value| at or below the diagonal
        let pivot_row = (col..n)
            .max_by(|&a, &b| work[(a, col)].abs().total_cmp(&work[(b, col)].abs()))
            .unwrap_or(col);

        let pivot = work[(pivot_row, col)];
        if !pivot.is_finite() || pivot.abs() <= tolerance {
            return Err(MatrixError::Singular { pivot_column: col });
        }

        work.swap_rows(col, pivot_row);
        inverse.swap_rows(col, pivot_row);

        for c in 0..n {
            work[(col, c)] /= pivot;
            inverse[(col, c)] /= pivot;
        }

        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = work[(r, col)];
            if factor == 0.0 {
                continue;
            }
            for c in 0..n {
                work[(r, c)] -= factor * work[(col, c)];
                inverse[(r, c)] -= factor * inverse[(col, c)];
            }
        }
    }

    Ok(inverse)
}
