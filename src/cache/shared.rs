//! Shared Cached Value
//!
//! Thread-safe handle around a [`CachedDerivedValue`]. A single `RwLock`
//! guards the primary and derived values together, so a reader never sees
//! a derived value that belongs to an older primary.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CachedDerivedValue, Resolved};

// == Shared Cached Value ==
/// Cloneable, lock-guarded [`CachedDerivedValue`].
///
/// Mutations and `resolve` take the write lock. Plain reads share the read lock.
#[derive(Debug)]
pub struct SharedCachedValue<T, D> {
    inner: Arc<RwLock<CachedDerivedValue<T, D>>>,
}

impl<T, D> Clone for SharedCachedValue<T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, D> SharedCachedValue<T, D> {
    // == Constructors ==
    /// Wraps an existing container.
    pub fn new(cell: CachedDerivedValue<T, D>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cell)),
        }
    }

    /// Creates a shared container with no cached derived value.
    pub fn from_primary(primary: T) -> Self {
        Self::new(CachedDerivedValue::new(primary))
    }

    // == Writes ==
    /// Replaces the primary value and discards the cached derived value.
    pub async fn set_primary(&self, new_value: T) {
        self.inner.write().await.set_primary(new_value);
    }

    /// Overwrites the cached derived value.
    pub async fn set_derived_cached(&self, value: D) {
        self.inner.write().await.set_derived_cached(value);
    }

    // == Reads ==
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats().clone()
    }

    pub async fn is_cached(&self) -> bool {
        self.inner.read().await.is_cached()
    }
}

impl<T: Clone, D: Clone> SharedCachedValue<T, D> {
    /// Returns a copy of the current primary value.
    pub async fn primary(&self) -> T {
        self.inner.read().await.primary().clone()
    }

    /// Returns a copy of the cached derived value, if any.
    pub async fn derived_cached(&self) -> Option<D> {
        self.inner.read().await.derived_cached().cloned()
    }

    // == Resolve ==
    /// Resolves under the write lock.
    ///
    /// The hit check and the computation happen under the same guard, so
    /// concurrent callers run `transform` at most once per invalidation.
    pub async fn resolve<E, F>(&self, transform: F) -> Result<Resolved<D>, E>
    where
        F: FnOnce(&T) -> Result<D, E>,
    {
        let mut guard = self.inner.write().await;
        guard.resolve(transform)
    }
}
