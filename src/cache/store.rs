//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, KeyPattern, LruTracker};

// == Cache Store ==
/// Single-owner cache storage with LRU eviction and TTL support.
///
/// The store never fails: misses and expired entries are reported as `None`,
/// and capacity pressure is absorbed by evicting the least recently used key.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed, always at least 1
    max_entries: usize,
    /// TTL applied when the caller gives none
    default_ttl: Duration,
    /// Set once the store has been shut down
    closed: bool,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and default TTL.
    ///
    /// A capacity of zero is raised to one. A zero default TTL falls back to
    /// [`DEFAULT_TTL`](crate::cache::DEFAULT_TTL).
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        let max_entries = max_entries.max(1);
        let default_ttl = if default_ttl.is_zero() {
            crate::cache::DEFAULT_TTL
        } else {
            default_ttl
        };

        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(max_entries),
            max_entries,
            default_ttl,
            closed: false,
        }
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists its value, deadline and access time are all
    /// replaced. If the key is new and the cache is full, exactly one least
    /// recently used entry is evicted first. A zero TTL is treated as missing.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        if self.closed {
            debug!(key = %key, "set ignored on closed cache");
            return;
        }

        let ttl = match ttl {
            Some(ttl) if ttl.is_zero() => {
                debug!(key = %key, "zero TTL replaced by default");
                self.default_ttl
            }
            Some(ttl) => ttl,
            None => self.default_ttl,
        };

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_one();
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, ttl));
        self.lru.touch(&key);
    }

    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// Returns `None` when the key is missing or expired. An expired entry is
    /// removed as a side effect. A closed store answers `None` without
    /// counting a miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if self.closed {
            return None;
        }
        let now = Instant::now();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.remove_expired(key);
            self.stats.record_miss();
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.touch(now);
        let value = entry.value.clone();
        self.lru.touch(key);
        self.stats.record_hit();
        Some(value)
    }

    // == Has ==
    /// Returns true exactly when [`get`](Self::get) would return a value.
    ///
    /// Expired entries are removed like in `get`, but a live entry's recency
    /// and the hit/miss counters are left untouched.
    pub fn has(&mut self, key: &str) -> bool {
        match self.entries.get(key).map(CacheEntry::is_expired) {
            Some(true) => {
                self.remove_expired(key);
                false
            }
            Some(false) => true,
            None => false,
        }
    }

    // == Peek Entry ==
    /// Borrows the raw entry without any expiry or recency bookkeeping.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes every entry. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        count
    }

    // == Invalidate Pattern ==
    /// Removes every key that fully matches the glob `pattern`.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate_pattern(&mut self, pattern: &str) -> usize {
        let glob = KeyPattern::new(pattern);
        let matched: Vec<String> = self
            .entries
            .keys()
            .filter(|key| glob.matches(key))
            .cloned()
            .collect();

        for key in &matched {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        debug!(pattern = %pattern, removed = matched.len(), "pattern invalidated");
        matched.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.size = self.entries.len();
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Close ==
    /// Clears the store and turns every later `set` into a no-op.
    ///
    /// Returns how many entries were dropped. Closing twice is harmless.
    pub fn close(&mut self) -> usize {
        self.closed = true;
        self.clear()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn evict_one(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.stats.record_eviction();
            debug!(key = %evicted, "evicted least recently used entry");
        }
    }

    fn remove_expired(&mut self, key: &str) {
        self.entries.remove(key);
        self.lru.remove(key);
        self.stats.record_expirations(1);
    }
}
