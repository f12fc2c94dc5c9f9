//! Cache Module
//!
//! Provides a primary value with a lazily computed, cached derived value,
//! plus hit/miss statistics and a lock-guarded shared variant.

mod shared;
mod stats;
mod value;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use shared::SharedCachedValue;
pub use stats::CacheStats;
pub use value::{CachedDerivedValue, Lookup, Resolved};
