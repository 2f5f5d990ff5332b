//! Cache Statistics Module
//!
//! Tracks cache size and performance counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache size and performance counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Current number of stored entries, including expired ones not yet swept
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Number of successful reads
    pub hits: u64,
    /// Number of reads that found nothing or an expired entry
    pub misses: u64,
    /// Number of entries evicted to make room
    pub evictions: u64,
    /// Number of expired entries removed, lazily or by the sweep
    pub expirations: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates an empty snapshot for a cache of the given capacity.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new(10_000);
        assert_eq!(stats.size, 0);
        assert_eq!(stats.max_size, 10_000);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.expirations, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new(1);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new(1);
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_eviction_and_expirations() {
        let mut stats = CacheStats::new(1);
        stats.record_eviction();
        stats.record_expirations(3);
        stats.record_expirations(0);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.expirations, 3);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats::new(2);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["max_size"], 2);
        assert_eq!(json["size"], 0);
    }
}
