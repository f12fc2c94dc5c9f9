//! Matrix Cache - memoized matrix inversion
//!
//! Holds a matrix together with its lazily computed inverse. Replacing the
//! matrix discards the cached inverse.

pub mod cache;
pub mod config;
pub mod error;
pub mod linalg;
pub mod solver;

pub use cache::{CacheStats, CachedDerivedValue, Lookup, Resolved, SharedCachedValue};
pub use config::Config;
pub use error::{MatrixError, Result};
pub use linalg::{invert, Matrix};
pub use solver::{cache_solve, MatrixCache, SharedMatrixCache};
