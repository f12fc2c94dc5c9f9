//! Linear Algebra Module
//!
//! Dense matrices and inversion, used as the transform behind the inverse cache.

mod inverse;
mod matrix;

pub use inverse::{invert, invert_with_tolerance};
pub use matrix::Matrix;

// == Public Constants ==
/// Pivots at or below this magnitude are treated as zero
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;
