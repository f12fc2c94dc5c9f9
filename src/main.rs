//! Matrix Cache - memoized matrix inversion
//!
//! Demo binary: inverts two sample matrices through the cache and logs
//! which resolves were served from cache.

use anyhow::{ensure, Context};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matrix_cache::solver::{cache_solve_with_tolerance, shared_cache_solve};
use matrix_cache::{Config, Matrix, MatrixCache, SharedMatrixCache};

/// Entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load tolerances from environment variables
/// 3. Resolve, re-resolve, replace and resolve again on a `MatrixCache`
/// 4. Repeat with concurrent resolvers on a `SharedMatrixCache`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matrix_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: pivot_tolerance={:e}, verify_tolerance={:e}",
        config.pivot_tolerance, config.verify_tolerance
    );

    let first = sample_matrix(1.0)?;
    let second = sample_matrix(2.0)?;

    // Single-owner cache
    let mut cache = MatrixCache::new(first.clone());
    let inverse = cache_solve_with_tolerance(&mut cache, config.pivot_tolerance)?.into_value();
    verify_inverse(&first, &inverse, config.verify_tolerance)?;
    info!("Inverse: {}", serde_json::to_string(&inverse)?);

    let again = cache_solve_with_tolerance(&mut cache, config.pivot_tolerance)?;
    ensure!(again.is_hit(), "second resolve should be served from cache");

    cache.set_primary(second.clone());
    let inverse = cache_solve_with_tolerance(&mut cache, config.pivot_tolerance)?.into_value();
    verify_inverse(&second, &inverse, config.verify_tolerance)?;
    info!("Stats: {}", serde_json::to_string(cache.stats())?);

    // Shared cache, concurrent resolvers
    let shared = SharedMatrixCache::from_primary(first);
    let mut handles = Vec::new();
    for _ in 0..4 {
        let shared = shared.clone();
        let tolerance = config.pivot_tolerance;
        handles.push(tokio::spawn(async move {
            shared_cache_solve(&shared, tolerance).await
        }));
    }
    for handle in handles {
        handle.await.context("resolver task panicked")??;
    }

    shared.set_primary(second).await;
    shared_cache_solve(&shared, config.pivot_tolerance).await?;
    info!("Shared stats: {}", serde_json::to_string(&shared.stats().await)?);

    Ok(())
}

/// Builds `[[corner, 9, 3], [5, 4, 6], [7, 5, 9]]` by stacking rows.
fn sample_matrix(corner: f64) -> matrix_cache::Result<Matrix> {
    Matrix::from_rows(vec![vec![corner, 9.0, 3.0], vec![5.0, 4.0, 6.0]])?
        .append_rows(&Matrix::from_rows(vec![vec![7.0, 5.0, 9.0]])?)
}

fn verify_inverse(matrix: &Matrix, inverse: &Matrix, tolerance: f64) -> anyhow::Result<()> {
    let product = matrix.matmul(inverse)?;
    let identity = Matrix::identity(matrix.rows())?;
    ensure!(
        product.approx_eq(&identity, tolerance),
        "matrix * inverse deviates from identity by more than {tolerance:e}"
    );
    Ok(())
}
