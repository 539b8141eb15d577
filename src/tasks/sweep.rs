//! Expiration Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Lazy expiration on `get` already upholds the observable contract; the
//! sweep reclaims memory from records that are written once and never read
//! again. With a sweep interval of 0 the cache runs lazy-only and no task
//! should be spawned.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::InMemoryUserCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task sleeps for the given interval between sweeps and holds the write
/// lock only while removing expired entries, so foreground operations are
/// never blocked for longer than one sweep pass. It exits on its own once the
/// cache is closed, and can also be aborted via the returned handle.
///
/// # Arguments
/// * `cache` - Handle to the cache to sweep
/// * `sweep_interval_secs` - Interval in seconds between sweeps (must be > 0)
///
/// # Example
/// ```ignore
/// let cache: InMemoryUserCache<UserRecord> = InMemoryUserCache::new(1000, 300);
/// let sweep_handle = spawn_sweep_task(cache.clone(), 60);
/// // Later, during teardown:
/// cache.close();
/// ```
pub fn spawn_sweep_task<V: Send + Sync + 'static>(
    cache: InMemoryUserCache<V>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiration sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            if cache.is_closed() {
                info!("Cache closed, stopping expiration sweep task");
                break;
            }

            let removed = cache.sweep_expired();

            if removed > 0 {
                info!("Expiration sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiration sweep: no expired entries found");
            }
        }
    })
}
