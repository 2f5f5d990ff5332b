//! Cache Entry Module
//!
//! Defines a single stored value together with its expiry deadline and
//! last-access timestamp.

use std::time::Duration;

use tokio::time::Instant;

/// Upper bound applied to TTLs so `now + ttl` can never overflow an `Instant`.
const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute expiry deadline
    pub expires_at: Instant,
    /// Refreshed on every successful read, used to rank eviction
    pub last_accessed_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            expires_at: now + ttl.min(MAX_TTL),
            last_accessed_at: now,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is expired once `now >= expires_at`, so an entry read exactly
    /// at its deadline is already gone.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Checks if the entry has expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    // == Touch ==
    /// Records a successful read.
    pub fn touch(&mut self, now: Instant) {
        self.last_accessed_at = now;
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, saturating at zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
