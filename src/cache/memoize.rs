//! Memoization Module
//!
//! Wraps an async operation with "check the cache, else compute and store".

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::PerformanceCache;

// == Memoized ==
/// An async operation whose successful results are cached.
///
/// Built by [`memoize_async`]. `key_fn` derives the cache key from the
/// argument; `op` runs only on a miss. Failed calls are never cached.
pub struct Memoized<V, K, F> {
    cache: Arc<PerformanceCache<V>>,
    key_fn: K,
    ttl: Option<Duration>,
    op: F,
}

/// Wraps `op` so that its results are cached under `key_fn(&arg)` for `ttl`.
///
/// `None` for `ttl` uses the cache's default TTL.
pub fn memoize_async<V, K, F>(
    cache: Arc<PerformanceCache<V>>,
    key_fn: K,
    ttl: Option<Duration>,
    op: F,
) -> Memoized<V, K, F> {
    Memoized {
        cache,
        key_fn,
        ttl,
        op,
    }
}

impl<V, K, F> Memoized<V, K, F>
where
    V: Clone + Send + Sync + 'static,
{
    /// Runs the wrapped operation, or returns the cached result for `arg`.
    pub async fn call<A, Fut, E>(&self, arg: A) -> Result<V, E>
    where
        K: Fn(&A) -> String,
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let key = (self.key_fn)(&arg);
        self.cache
            .get_or_try_insert_with(key, self.ttl, || (self.op)(arg))
            .await
    }

    /// Drops the cached result for `arg`, if any.
    pub async fn forget<A>(&self, arg: &A) -> bool
    where
        K: Fn(&A) -> String,
    {
        self.cache.delete(&(self.key_fn)(arg)).await
    }
}
