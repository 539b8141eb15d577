//! User Cache Module
//!
//! The capability consumed by the authentication layer: look a user record up
//! before an expensive credential fetch, store it after a miss, and drop it
//! when credentials change.
//!
//! Two implementations are provided: [`InMemoryUserCache`], the bounded
//! LRU/TTL engine, and [`NullUserCache`], which caches nothing.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == User Cache Trait ==
/// Cache of authenticated-user records, keyed by username.
///
/// A miss is a first-class `Ok(None)` result, never an error; the caller is
/// expected to fall back to the authoritative source and `put` the fresh
/// record. The record type `V` is opaque to the cache and handed back as an
/// `Arc` snapshot.
pub trait UserCache<V>: Send + Sync {
    /// Looks up the record cached for `username`.
    ///
    /// Returns `Ok(None)` for an absent or expired entry.
    fn get(&self, username: &str) -> Result<Option<Arc<V>>>;

    /// Stores `record` under `username`, replacing any previous entry and
    /// resetting its TTL.
    fn put(&self, username: &str, record: V) -> Result<()>;

    /// Removes the record cached for `username`. Removing an absent username
    /// is a no-op.
    fn remove(&self, username: &str) -> Result<()>;
}

// == In-Memory User Cache ==
/// Thread-safe handle to a bounded, expiring [`CacheStore`].
///
/// A single exclusive lock guards the index and the LRU order together, so
/// operations on the same username are linearizable and the two structures
/// never diverge. All operations are synchronous and in-memory; `get`, `put`
/// and `remove` take the write lock because a hit updates recency.
///
/// The handle is cheap to clone; every clone refers to the same cache. After
/// [`close`](InMemoryUserCache::close) all three operations fail fast with
/// [`CacheError::Closed`].
pub struct InMemoryUserCache<V> {
    /// Shared cache engine
    store: Arc<RwLock<CacheStore<V>>>,
    /// Set once at teardown; checked before every operation
    closed: Arc<AtomicBool>,
}

impl<V> Clone for InMemoryUserCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            closed: Arc::clone(&self.closed),
        }
    }
}

impl<V> InMemoryUserCache<V> {
    // == Constructor ==
    /// Creates a new cache with the given capacity and TTL.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries (0 = unbounded)
    /// * `ttl_seconds` - TTL applied to every entry (0 = never expire)
    pub fn new(capacity: usize, ttl_seconds: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(capacity, ttl_seconds))),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates a new cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.capacity, config.ttl_seconds)
    }

    // == Lock Helpers ==
    // A poisoned lock only means another caller panicked mid-operation; the
    // store's per-method updates keep index and LRU consistent, so recover
    // the guard rather than propagate the panic.
    fn write(&self) -> RwLockWriteGuard<'_, CacheStore<V>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheStore<V>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            Err(CacheError::Closed)
        } else {
            Ok(())
        }
    }

    // == Close ==
    /// Tears the cache down and drops every entry.
    ///
    /// Subsequent `get`/`put`/`remove` calls fail fast with
    /// [`CacheError::Closed`]. Closing an already-closed cache is a no-op.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let dropped = {
            let mut store = self.write();
            let count = store.len();
            *store = CacheStore::new(0, 0);
            count
        };
        info!("User cache closed, dropped {} entries", dropped);
    }

    /// Returns true once [`close`](InMemoryUserCache::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    // == Sweep Expired ==
    /// Removes all expired entries.
    ///
    /// Called by the background sweep task; does nothing on a closed cache.
    /// Returns the number of entries removed.
    pub fn sweep_expired(&self) -> usize {
        if self.is_closed() {
            return 0;
        }
        let removed = self.write().sweep_expired();
        if removed > 0 {
            debug!("Swept {} expired user records", removed);
        }
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.read().stats()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<V: Send + Sync> UserCache<V> for InMemoryUserCache<V> {
    fn get(&self, username: &str) -> Result<Option<Arc<V>>> {
        self.ensure_open()?;
        Ok(self.write().get(username))
    }

    fn put(&self, username: &str, record: V) -> Result<()> {
        self.ensure_open()?;
        self.write().put(username, record)
    }

    fn remove(&self, username: &str) -> Result<()> {
        self.ensure_open()?;
        self.write().remove(username);
        Ok(())
    }
}

// == Null User Cache ==
/// A cache that caches nothing.
///
/// Every lookup misses and `put`/`remove` do nothing. Useful as a drop-in
/// when caching must be disabled without touching the authentication layer.
#[derive(Debug, Default)]
pub struct NullUserCache<V> {
    _marker: PhantomData<fn() -> V>,
}

impl<V> NullUserCache<V> {
    /// Creates a new no-op cache.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<V: Send + Sync> UserCache<V> for NullUserCache<V> {
    fn get(&self, _username: &str) -> Result<Option<Arc<V>>> {
        Ok(None)
    }

    fn put(&self, _username: &str, _record: V) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _username: &str) -> Result<()> {
        Ok(())
    }
}
