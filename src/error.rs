//! Error types for the user record cache
//!
//! Provides unified error handling using thiserror.
//!
//! A cache miss is never an error: `get` reports absent or expired keys as
//! `Ok(None)`, and `remove` on an absent key is a silent no-op. Only misuse
//! (bad arguments, use after close) surfaces as a `CacheError`.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the user record cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Empty or over-long username passed to `put`
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Operation attempted after the cache was closed
    #[error("Cache has been closed")]
    Closed,
}

// == Result Type Alias ==
/// Convenience Result type for the user record cache.
pub type Result<T> = std::result::Result<T, CacheError>;
