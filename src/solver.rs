//! Inverse Cache Solver
//!
//! Matrix-specific resolve for a cached inverse, with logging of the path taken.

use tracing::{info, warn};

use crate::cache::{CachedDerivedValue, Lookup, Resolved, SharedCachedValue};
use crate::error::Result;
use crate::linalg::{invert_with_tolerance, Matrix, DEFAULT_PIVOT_TOLERANCE};

/// A matrix with its cached inverse.
pub type MatrixCache = CachedDerivedValue<Matrix, Matrix>;

/// Thread-safe [`MatrixCache`].
pub type SharedMatrixCache = SharedCachedValue<Matrix, Matrix>;

// == Cache Solve ==
/// Returns the inverse of the cached matrix, computing it only on a miss.
pub fn cache_solve(cache: &mut MatrixCache) -> Result<Resolved<Matrix>> {
    cache_solve_with_tolerance(cache, DEFAULT_PIVOT_TOLERANCE)
}

/// Like [`cache_solve`] with an explicit singularity tolerance.
pub fn cache_solve_with_tolerance(
    cache: &mut MatrixCache,
    tolerance: f64,
) -> Result<Resolved<Matrix>> {
    let resolved = cache
        .resolve(|m| invert_with_tolerance(m, tolerance))
        .inspect_err(|e| warn!("Inverse computation failed: {}", e))?;
    log_lookup(&resolved);
    Ok(resolved)
}

/// Shared counterpart of [`cache_solve_with_tolerance`].
pub async fn shared_cache_solve(
    cache: &SharedMatrixCache,
    tolerance: f64,
) -> Result<Resolved<Matrix>> {
    let resolved = cache
        .resolve(|m| invert_with_tolerance(m, tolerance))
        .await
        .inspect_err(|e| warn!("Inverse computation failed: {}", e))?;
    log_lookup(&resolved);
    Ok(resolved)
}

fn log_lookup(resolved: &Resolved<Matrix>) {
    match resolved.lookup {
        Lookup::Hit => info!("Inverse retrieved from cache (previously calculated)"),
        Lookup::Miss => info!(
            "Inverse freshly calculated for {}x{} matrix",
            resolved.value.rows(),
            resolved.value.cols()
        ),
    }
}
