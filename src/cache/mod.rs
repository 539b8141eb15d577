//! Cache Module
//!
//! Provides in-memory caching of user records with TTL expiration and LRU
//! eviction.

mod entry;
mod lru;
mod stats;
mod store;
mod user_cache;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use user_cache::{InMemoryUserCache, NullUserCache, UserCache};

// == Public Constants ==
/// Maximum allowed username length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
