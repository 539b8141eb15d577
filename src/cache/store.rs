//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL
//! expiration. Single-threaded; concurrent access goes through
//! [`InMemoryUserCache`](crate::cache::InMemoryUserCache), which wraps the
//! store in a lock so the index and LRU order always change together.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_KEY_LENGTH};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Main cache storage with LRU eviction and TTL support.
///
/// Generic over the cached record type `V`, which the store never inspects.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Username to entry storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed (0 = unbounded)
    capacity: usize,
    /// Entry TTL in seconds (0 = entries never expire)
    ttl_seconds: u64,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and TTL.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries (0 = unbounded)
    /// * `ttl_seconds` - TTL applied to every entry (0 = never expire)
    pub fn new(capacity: usize, ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity,
            ttl_seconds,
        }
    }

    // == Put ==
    /// Stores a user record under the given username.
    ///
    /// If the username already has an entry, the record is replaced and all
    /// timestamps are reset. If the insert pushes the cache over a nonzero
    /// capacity, least-recently-used entries are evicted until it fits.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidKey`] for an empty username or one longer
    /// than [`MAX_KEY_LENGTH`] bytes.
    pub fn put(&mut self, key: &str, value: V) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey("key cannot be empty".to_string()));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidKey(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        // Check if key already exists (replace case)
        let is_replace = self.entries.contains_key(key);

        // If not replacing and at a bounded capacity, evict until there is room
        if !is_replace && self.capacity > 0 {
            while self.entries.len() >= self.capacity {
                match self.lru.evict_oldest() {
                    Some(evicted_key) => {
                        self.entries.remove(&evicted_key);
                        self.stats.record_eviction();
                    }
                    None => break,
                }
            }
        }

        // ttl_seconds == 0 means no time-based expiry
        let ttl = (self.ttl_seconds > 0).then_some(self.ttl_seconds);

        let entry = CacheEntry::new(value, ttl);
        self.entries.insert(key.to_string(), entry);

        // Update LRU tracker (touch moves to front)
        self.lru.touch(key);

        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a user record by username.
    ///
    /// Returns `None` for an absent key, and for a present-but-expired entry
    /// after removing it (lazy expiration). A miss is a normal outcome, never
    /// an error. A hit refreshes the entry's recency.
    pub fn get(&mut self, key: &str) -> Option<Arc<V>> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            // Remove expired entry as a side effect of the lookup
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_expiration();
            self.stats.record_miss();
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.touch();
        let value = Arc::clone(&entry.value);

        self.stats.record_hit();
        self.lru.touch(key);

        Some(value)
    }

    // == Remove ==
    /// Removes an entry by username.
    ///
    /// Removing an absent key is a no-op. Returns whether an entry was
    /// actually removed.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. This is the body of the
    /// optional active-expiration sweep; lazy expiration on `get` upholds the
    /// observable contract on its own.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.lru.remove(&key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new(100, 300);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(100, 300);

        store.put("alice", "record_a".to_string()).unwrap();
        let value = store.get("alice").unwrap();

        assert_eq!(*value, "record_a");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new(100, 300);

        assert!(store.get("nonexistent").is_none());
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_store_remove() {
        let mut store = CacheStore::new(100, 300);

        store.put("alice", "record_a".to_string()).unwrap();
        assert!(store.remove("alice"));

        assert!(store.is_empty());
        assert!(store.get("alice").is_none());
    }

    #[test]
    fn test_store_remove_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new(100, 300);

        // Absent key is a no-op, not an error
        assert!(!store.remove("nonexistent"));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_remove_leaves_other_entries() {
        let mut store = CacheStore::new(100, 300);

        store.put("alice", "record_a".to_string()).unwrap();
        store.remove("nonexistent");

        assert_eq!(store.len(), 1);
        assert!(store.get("alice").is_some());
    }

    #[test]
    fn test_store_replace() {
        let mut store = CacheStore::new(100, 300);

        store.put("alice", "old".to_string()).unwrap();
        store.put("alice", "new".to_string()).unwrap();

        let value = store.get("alice").unwrap();
        assert_eq!(*value, "new");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(100, 1);

        store.put("alice", "record_a".to_string()).unwrap();

        // Should be accessible immediately
        assert!(store.get("alice").is_some());

        // Wait for expiration
        sleep(Duration::from_millis(1100));

        // Expired entry reads as a miss and is removed as a side effect
        assert!(store.get("alice").is_none());
        assert_eq!(store.len(), 0);
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_zero_ttl_never_expires() {
        let mut store = CacheStore::new(100, 0);

        store.put("alice", "record_a".to_string()).unwrap();
        sleep(Duration::from_millis(50));

        assert!(store.get("alice").is_some());
    }

    #[test]
    fn test_store_lru_eviction() {
        let mut store = CacheStore::new(3, 300);

        store.put("alice", "a".to_string()).unwrap();
        store.put("bob", "b".to_string()).unwrap();
        store.put("carol", "c".to_string()).unwrap();

        // Cache is full, adding a fourth user should evict alice (oldest)
        store.put("dave", "d".to_string()).unwrap();

        assert_eq!(store.len(), 3);
        assert!(store.get("alice").is_none());
        assert!(store.get("bob").is_some());
        assert!(store.get("carol").is_some());
        assert!(store.get("dave").is_some());
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_store_lru_touch_on_get() {
        let mut store = CacheStore::new(3, 300);

        store.put("alice", "a".to_string()).unwrap();
        store.put("bob", "b".to_string()).unwrap();
        store.put("carol", "c".to_string()).unwrap();

        // Access alice to make her most recently used
        store.get("alice").unwrap();

        // Adding a fourth user should now evict bob
        store.put("dave", "d".to_string()).unwrap();

        assert!(store.get("alice").is_some());
        assert!(store.get("bob").is_none());
    }

    #[test]
    fn test_store_capacity_two_sequence() {
        // put A,B,C with capacity 2 -> A evicted; get(B); put D -> C evicted
        let mut store = CacheStore::new(2, 300);

        store.put("a", "1".to_string()).unwrap();
        store.put("b", "2".to_string()).unwrap();
        store.put("c", "3".to_string()).unwrap();

        assert!(store.get("a").is_none());
        assert!(store.get("b").is_some());

        store.put("d", "4".to_string()).unwrap();

        assert!(store.get("c").is_none());
        assert!(store.get("b").is_some());
        assert!(store.get("d").is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_zero_capacity_unbounded() {
        let mut store = CacheStore::new(0, 300);

        for i in 0..500 {
            store.put(&format!("user{}", i), i.to_string()).unwrap();
        }

        assert_eq!(store.len(), 500);
        assert_eq!(store.stats().evictions, 0);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(100, 300);

        store.put("alice", "a".to_string()).unwrap();
        store.get("alice").unwrap(); // hit
        let _ = store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_sweep_expired() {
        let mut store = CacheStore::new(100, 1);

        store.put("shortlived", "a".to_string()).unwrap();

        // A fresh store with no expiry for the second entry
        sleep(Duration::from_millis(1100));
        store.put("fresh", "b".to_string()).unwrap();

        let removed = store.sweep_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("fresh").is_some());
    }

    #[test]
    fn test_store_empty_key_rejected() {
        let mut store = CacheStore::new(100, 300);

        let result = store.put("", "value".to_string());
        assert!(matches!(result, Err(CacheError::InvalidKey(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_key_too_long() {
        let mut store = CacheStore::new(100, 300);
        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);

        let result = store.put(&long_key, "value".to_string());
        assert!(matches!(result, Err(CacheError::InvalidKey(_))));
    }

    #[test]
    fn test_store_get_returns_shared_snapshot() {
        let mut store = CacheStore::new(100, 300);

        store.put("alice", "record_a".to_string()).unwrap();

        let first = store.get("alice").unwrap();
        let second = store.get("alice").unwrap();

        // Same underlying record, not a fresh copy
        assert!(Arc::ptr_eq(&first, &second));
    }
}
