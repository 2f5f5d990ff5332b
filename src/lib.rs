//! Perf Cache - a bounded in-process cache for game backends
//!
//! Provides TTL expiration, LRU eviction, glob-pattern invalidation and a
//! periodic sweep of expired entries, plus a small HTTP surface over it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{memoize_async, CacheStats, PerformanceCache};
pub use config::{CacheConfig, Config};
pub use tasks::spawn_sweep_task;
