//! Cached Derived Value Module
//!
//! A primary value paired with a lazily computed, cached derived value.

use std::convert::Infallible;

use crate::cache::CacheStats;

// == Lookup ==
/// Which path a resolve took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Served from the cached derived value, transform not called
    Hit,
    /// Transform was called and its result stored
    Miss,
}

// == Resolved ==
/// The derived value returned by a resolve, tagged with the path taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<D> {
    pub value: D,
    pub lookup: Lookup,
}

impl<D> Resolved<D> {
    pub fn is_hit(&self) -> bool {
        self.lookup == Lookup::Hit
    }

    pub fn into_value(self) -> D {
        self.value
    }
}

// == Cached Derived Value ==
/// Holds a primary value and an optional cached value derived from it.
///
/// While `derived` is present it must equal `transform(primary)` for the
/// transform used with [`resolve`](Self::resolve). Replacing the primary
/// always clears it. The transform is expected to be pure; this is not
/// checked.
#[derive(Debug, Clone)]
pub struct CachedDerivedValue<T, D> {
    /// Source-of-truth value
    primary: T,
    /// Cached result of the transform, None until computed or after invalidation
    derived: Option<D>,
    /// Resolve statistics
    stats: CacheStats,
}

impl<T, D> CachedDerivedValue<T, D> {
    // == Constructors ==
    /// Creates a container with no cached derived value.
    pub fn new(primary: T) -> Self {
        Self {
            primary,
            derived: None,
            stats: CacheStats::new(),
        }
    }

    /// Creates a container seeded with a pre-computed derived value.
    ///
    /// The caller is responsible for `derived` matching `primary`.
    pub fn with_derived(primary: T, derived: D) -> Self {
        Self {
            primary,
            derived: Some(derived),
            stats: CacheStats::new(),
        }
    }

    // == Primary ==
    /// Returns the current primary value.
    pub fn primary(&self) -> &T {
        &self.primary
    }

    /// Replaces the primary value and discards any cached derived value.
    ///
    /// The cache is cleared even when `new_value` equals the old primary.
    pub fn set_primary(&mut self, new_value: T) {
        self.primary = new_value;
        self.clear_derived();
    }

    // == Derived ==
    /// Returns the cached derived value without computing anything.
    pub fn derived_cached(&self) -> Option<&D> {
        self.derived.as_ref()
    }

    /// Overwrites the cached derived value.
    pub fn set_derived_cached(&mut self, value: D) {
        self.derived = Some(value);
    }

    /// Drops the cached derived value, keeping the primary.
    ///
    /// Returns true if a value was present.
    pub fn clear_derived(&mut self) -> bool {
        let cleared = self.derived.take().is_some();
        if cleared {
            self.stats.record_invalidation();
        }
        cleared
    }

    pub fn is_cached(&self) -> bool {
        self.derived.is_some()
    }

    // == Stats ==
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Consumes the container, returning the primary and the cached value.
    pub fn into_parts(self) -> (T, Option<D>) {
        (self.primary, self.derived)
    }
}

impl<T, D: Clone> CachedDerivedValue<T, D> {
    // == Resolve ==
    /// Returns the derived value, computing and caching it on a miss.
    ///
    /// On a hit `transform` is not called. On a miss it is called once with
    /// the primary. If it fails, the error is returned unchanged and nothing
    /// is cached.
    pub fn resolve<E, F>(&mut self, transform: F) -> Result<Resolved<D>, E>
    where
        F: FnOnce(&T) -> Result<D, E>,
    {
        if let Some(derived) = &self.derived {
            self.stats.record_hit();
            return Ok(Resolved {
                value: derived.clone(),
                lookup: Lookup::Hit,
            });
        }

        self.stats.record_miss();
        match transform(&self.primary) {
            Ok(value) => {
                self.derived = Some(value.clone());
                Ok(Resolved {
                    value,
                    lookup: Lookup::Miss,
                })
            }
            Err(err) => {
                self.stats.record_failure();
                Err(err)
            }
        }
    }

    /// Same as [`resolve`](Self::resolve) for a transform that cannot fail.
    pub fn resolve_with<F>(&mut self, transform: F) -> Resolved<D>
    where
        F: FnOnce(&T) -> D,
    {
        match self.resolve(|p| Ok::<D, Infallible>(transform(p))) {
            Ok(resolved) => resolved,
            Err(never) => match never {},
        }
    }
}
