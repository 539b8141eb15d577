//! User Record Model
//!
//! Immutable snapshot of an authenticated user as seen by the cache. The
//! cache never interprets these fields; they exist for the authentication
//! layer that populates and consumes entries.

use serde::{Deserialize, Serialize};

/// Snapshot of a user's credentials and account state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Username, also the cache key
    pub username: String,
    /// Hashed password as stored by the authoritative source
    pub password_hash: String,
    /// Granted authorities (roles)
    pub authorities: Vec<String>,
    /// Whether the account is enabled
    pub enabled: bool,
    /// Whether the account is locked
    pub locked: bool,
}

impl UserRecord {
    /// Creates an enabled, unlocked record with no authorities.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            authorities: Vec::new(),
            enabled: true,
            locked: false,
        }
    }

    /// Adds a granted authority.
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authorities.push(authority.into());
        self
    }

    /// Marks the account as disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Marks the account as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}
