//! Cache Entry Module
//!
//! Defines the structure for individual cached user records with TTL support.

use std::sync::Arc;

use chrono::Utc;

// == Cache Entry ==
/// A single cached user record with its timestamps.
///
/// The record itself is opaque to the cache: it is held behind an `Arc` and
/// handed back to callers as an immutable snapshot.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// The stored user record snapshot
    pub value: Arc<V>,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
    /// Timestamp of the last successful lookup (Unix milliseconds)
    pub last_accessed_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// `expires_at` is fixed at construction; renewing an entry requires a
    /// fresh `put`, which creates a new entry.
    ///
    /// # Arguments
    /// * `value` - The user record to store
    /// * `ttl_seconds` - Optional TTL in seconds (None = never expires)
    pub fn new(value: V, ttl_seconds: Option<u64>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = ttl_seconds.map(|ttl| now + (ttl * 1000));

        Self {
            value: Arc::new(value),
            inserted_at: now,
            expires_at,
            last_accessed_at: now,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time, so an entry is
    /// never observable once its full TTL has elapsed.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }

    // == Touch ==
    /// Refreshes the last-accessed timestamp after a successful lookup.
    pub fn touch(&mut self) {
        self.last_accessed_at = current_timestamp_ms();
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    Utc::now().timestamp_millis() as u64
}
