//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, LRU eviction and
//! pattern invalidation.

use std::time::Duration;

mod entry;
mod lru;
mod memoize;
mod pattern;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use memoize::{memoize_async, Memoized};
pub use pattern::KeyPattern;
pub use shared::PerformanceCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default capacity in entries
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// TTL applied when a caller does not give one
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Interval between background sweeps of expired entries
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// Maximum key length accepted over HTTP, in bytes
pub const MAX_KEY_LENGTH: usize = 256;
