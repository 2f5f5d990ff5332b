//! Shared Cache Module
//!
//! Concurrency-safe handle over a [`CacheStore`] that owns the background
//! sweep task and an explicit start/shutdown lifecycle.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::tasks::spawn_sweep_task;

// == Performance Cache ==
/// Thread-safe bounded TTL cache.
///
/// Every operation, the background sweep included, goes through a single
/// lock around the store. Share it between request handlers behind an `Arc`.
///
/// Call [`shutdown`](Self::shutdown) before the process exits. Dropping the
/// handle also stops the sweep but leaves the entries to be freed with it.
#[derive(Debug)]
pub struct PerformanceCache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<V> PerformanceCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Start ==
    /// Creates a cache and starts its periodic sweep.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: &CacheConfig) -> Self {
        let store = CacheStore::new(config.max_entries, config.default_ttl);
        Self::with_store(store, config.sweep_interval)
    }

    /// Wraps an existing store and starts sweeping it every `sweep_interval`.
    pub fn with_store(store: CacheStore<V>, sweep_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(store));
        let sweeper = spawn_sweep_task(store.clone(), sweep_interval);

        Self {
            store,
            sweeper: Mutex::new(Some(sweeper)),
        }
    }

    // == Operations ==
    /// Stores `value` under `key`. `None` uses the default TTL.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        self.store.write().await.set(key, value, ttl);
    }

    /// Returns a clone of the live value under `key`.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.write().await.get(key)
    }

    pub async fn has(&self, key: &str) -> bool {
        self.store.write().await.has(key)
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    pub async fn clear(&self) -> usize {
        self.store.write().await.clear()
    }

    /// Removes every key fully matching the glob `pattern`.
    pub async fn invalidate_pattern(&self, pattern: &str) -> usize {
        self.store.write().await.invalidate_pattern(pattern)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Runs one sweep pass immediately.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    // == Get Or Insert ==
    /// Returns the cached value, or computes, stores and returns it.
    pub async fn get_or_insert_with<F, Fut>(
        &self,
        key: impl Into<String>,
        ttl: Option<Duration>,
        compute: F,
    ) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        let key = key.into();
        if let Some(value) = self.get(&key).await {
            return value;
        }

        let value = compute().await;
        self.set(key, value.clone(), ttl).await;
        value
    }

    /// Fallible variant of [`get_or_insert_with`](Self::get_or_insert_with).
    ///
    /// Errors are returned to the caller and nothing is cached. The lock is
    /// not held while `compute` runs, so concurrent misses may both compute.
    pub async fn get_or_try_insert_with<F, Fut, E>(
        &self,
        key: impl Into<String>,
        ttl: Option<Duration>,
        compute: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let key = key.into();
        if let Some(value) = self.get(&key).await {
            return Ok(value);
        }

        let value = compute().await?;
        self.set(key, value.clone(), ttl).await;
        Ok(value)
    }

    // == Shutdown ==
    /// Stops the sweep task and drops every entry.
    ///
    /// Later calls on this handle are harmless no-ops. Calling it again does
    /// nothing, though a concurrent caller waits until the store is closed.
    pub async fn shutdown(&self) {
        let mut sweeper = self.sweeper.lock().await;
        let Some(handle) = sweeper.take() else {
            return;
        };
        handle.abort();

        let dropped = self.store.write().await.close();
        drop(sweeper);
        info!(dropped, "Cache shut down");
    }

    pub async fn is_shut_down(&self) -> bool {
        self.store.read().await.is_closed()
    }
}

impl<V> Drop for PerformanceCache<V> {
    fn drop(&mut self) {
        if let Some(handle) = self.sweeper.get_mut().take() {
            handle.abort();
        }
    }
}
