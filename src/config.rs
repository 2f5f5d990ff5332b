//! Configuration Module
//!
//! Handles loading and managing cache and server configuration from
//! environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_SWEEP_INTERVAL, DEFAULT_TTL};

const DEFAULT_SERVER_PORT: u16 = 3000;

// == Cache Config ==
/// Construction parameters for a [`PerformanceCache`](crate::cache::PerformanceCache).
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// TTL for entries stored without an explicit one
    pub default_ttl: Duration,
    /// Interval between background sweeps
    pub sweep_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            default_ttl: DEFAULT_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

// == Server Config ==
/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Default TTL in milliseconds for entries without explicit TTL
    pub default_ttl_ms: u64,
    /// Background sweep interval in milliseconds
    pub sweep_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 10000, minimum 1)
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `SWEEP_INTERVAL_MS` - Sweep frequency in milliseconds (default: 120000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Missing or unparsable values fall back to the default. A zero
    /// `MAX_ENTRIES` is raised to 1, other zero values use the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env_parse::<usize>("MAX_ENTRIES")
                .map(|n| n.max(1))
                .unwrap_or(defaults.max_entries),
            default_ttl_ms: env_nonzero("DEFAULT_TTL_MS").unwrap_or(defaults.default_ttl_ms),
            sweep_interval_ms: env_nonzero("SWEEP_INTERVAL_MS")
                .unwrap_or(defaults.sweep_interval_ms),
            server_port: env_parse("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }

    /// Returns the cache construction parameters.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_entries: self.max_entries,
            default_ttl: Duration::from_millis(self.default_ttl_ms),
            sweep_interval: Duration::from_millis(self.sweep_interval_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            default_ttl_ms: DEFAULT_TTL.as_millis() as u64,
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL.as_millis() as u64,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn env_nonzero<T: FromStr + Default + PartialEq>(name: &str) -> Option<T> {
    env_parse(name).filter(|v: &T| *v != T::default())
}
