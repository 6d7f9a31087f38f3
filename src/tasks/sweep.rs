//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Lazy expiry on read is not enough on its own: keys that are set once and
//! never read again would stay in memory forever. The periodic sweep bounds
//! that growth to roughly one sweep interval of stale writes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the configured interval
/// between runs and acquiring a write lock on the store for each sweep. It is
/// spawned exactly once per cache instance, by the [`TtlCache`](crate::TtlCache)
/// constructor, and stopped by aborting the returned handle.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `interval` - Time between sweep runs
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort the task when the cache
/// shuts down.
pub fn spawn_sweep_task<V>(
    store: Arc<RwLock<CacheStore<V>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Sweep task running every {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            // One write-lock acquisition per pass, released before sleeping
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Sweep reclaimed {} expired entries", removed);
            } else {
                debug!("Sweep pass found nothing expired");
            }
        }
    })
}
