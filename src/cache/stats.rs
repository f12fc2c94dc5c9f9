//! Cache Statistics Module
//!
//! Tracks how a cached derived value is served: hits, misses, failed
//! computations and invalidations.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of resolves served from the cached derived value
    pub hits: u64,
    /// Number of resolves that had to run the transform
    pub misses: u64,
    /// Number of misses whose transform returned an error
    pub failures: u64,
    /// Number of times a present derived value was discarded
    pub invalidations: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if nothing has been resolved.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Failure ==
    /// Increments the failure counter.
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    // == Record Invalidation ==
    /// Increments the invalidation counter.
    pub fn record_invalidation(&mut self) {
        self.invalidations += 1;
    }

    /// Total number of resolve calls observed.
    pub fn resolves(&self) -> u64 {
        self.hits + self.misses
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.failures, 0);
        assert_eq!(stats.invalidations, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        assert_eq!(stats.hit_rate(), 1.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
        assert_eq!(stats.resolves(), 2);
    }

    #[test]
    fn test_record_failure_and_invalidation() {
        let mut stats = CacheStats::new();
        stats.record_failure();
        stats.record_invalidation();
        stats.record_invalidation();
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.invalidations, 2);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.record_miss();
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"{"hits":0,"misses":1,"failures":0,"invalidations":0}"#
        );
    }
}
