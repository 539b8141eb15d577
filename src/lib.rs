//! User Record Cache - a bounded in-memory cache for authenticated users
//!
//! Caches user records so that repeated authentication calls do not re-hit
//! the authoritative store on every request. Entries expire after a
//! configurable TTL and the least recently used entry is evicted once a
//! configured capacity is reached.
//!
//! # Usage
//!
//! ```
//! use user_record_cache::{InMemoryUserCache, UserCache, UserRecord};
//!
//! let cache = InMemoryUserCache::new(1000, 300);
//!
//! cache.put("alice", UserRecord::new("alice", "hash")).unwrap();
//! let record = cache.get("alice").unwrap();
//! assert!(record.is_some());
//!
//! cache.remove("alice").unwrap();
//! assert!(cache.get("alice").unwrap().is_none());
//!
//! cache.close();
//! assert!(cache.get("alice").is_err());
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use cache::{CacheStats, CacheStore, InMemoryUserCache, NullUserCache, UserCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use models::UserRecord;
pub use tasks::spawn_sweep_task;
