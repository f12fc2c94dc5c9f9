//! Configuration Module
//!
//! Handles loading numeric tolerances from environment variables.

use std::env;

use crate::linalg::DEFAULT_PIVOT_TOLERANCE;

/// Default tolerance when checking `matrix * inverse` against the identity.
pub const DEFAULT_VERIFY_TOLERANCE: f64 = 1e-9;

/// Numeric configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pivots at or below this magnitude mark a matrix as singular
    pub pivot_tolerance: f64,
    /// Maximum element-wise deviation accepted when verifying an inverse
    pub verify_tolerance: f64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PIVOT_TOLERANCE` - Singularity threshold (default: 1e-12)
    /// - `VERIFY_TOLERANCE` - Identity check tolerance (default: 1e-9)
    ///
    /// Negative or non-finite values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            pivot_tolerance: tolerance_var("PIVOT_TOLERANCE")
                .unwrap_or(DEFAULT_PIVOT_TOLERANCE),
            verify_tolerance: tolerance_var("VERIFY_TOLERANCE")
                .unwrap_or(DEFAULT_VERIFY_TOLERANCE),
        }
    }
}

fn tolerance_var(name: &str) -> Option<f64> {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            verify_tolerance: DEFAULT_VERIFY_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.pivot_tolerance, 1e-12);
        assert_eq!(config.verify_tolerance, 1e-9);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("PIVOT_TOLERANCE");
        env::remove_var("VERIFY_TOLERANCE");

        let config = Config::from_env();
        assert_eq!(config.pivot_tolerance, DEFAULT_PIVOT_TOLERANCE);
        assert_eq!(config.verify_tolerance, DEFAULT_VERIFY_TOLERANCE);
    }

    #[test]
    fn test_tolerance_var_rejects_invalid() {
        env::set_var("MATRIX_CACHE_TEST_TOL_NEG", "-1.0");
        env::set_var("MATRIX_CACHE_TEST_TOL_TEXT", "tiny");
        env::set_var("MATRIX_CACHE_TEST_TOL_OK", "0.5");

        assert_eq!(tolerance_var("MATRIX_CACHE_TEST_TOL_NEG"), None);
        assert_eq!(tolerance_var("MATRIX_CACHE_TEST_TOL_TEXT"), None);
        assert_eq!(tolerance_var("MATRIX_CACHE_TEST_TOL_OK"), Some(0.5));
    }
}
