//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries, including
//! ones that are written once and never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheStore, DEFAULT_SWEEP_INTERVAL};

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between passes
/// and taking the store's write lock only for the duration of one pass. A
/// zero interval falls back to [`DEFAULT_SWEEP_INTERVAL`].
///
/// # Returns
/// A JoinHandle for the spawned task. Abort it to stop sweeping.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::<String>::new(1000, DEFAULT_TTL)));
/// let sweep_handle = spawn_sweep_task(store.clone(), Duration::from_secs(120));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<V>(store: Arc<RwLock<CacheStore<V>>>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = if interval.is_zero() {
        DEFAULT_SWEEP_INTERVAL
    } else {
        interval
    };

    tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut guard = store.write().await;
                guard.cleanup_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
