//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold (0 = unbounded)
    pub capacity: usize,
    /// Entry time-to-live in seconds (0 = entries never expire)
    pub ttl_seconds: u64,
    /// Background expiration sweep interval in seconds (0 = lazy expiration only)
    pub sweep_interval_seconds: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `USER_CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `USER_CACHE_TTL` - Entry TTL in seconds (default: 300)
    /// - `USER_CACHE_SWEEP_INTERVAL` - Sweep cadence in seconds (default: 0, lazy-only)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("USER_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            ttl_seconds: env::var("USER_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sweep_interval_seconds: env::var("USER_CACHE_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            ttl_seconds: 300,
            sweep_interval_seconds: 0,
        }
    }
}
