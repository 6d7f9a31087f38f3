//! Cache Handle Module
//!
//! The constructible, shareable front of the cache: wraps the synchronous
//! [`CacheStore`] in a single lock and owns the background sweep task, so the
//! sweep's lifetime is scoped to the handle's lifetime rather than to any
//! process-wide ambient state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::ConfigError;
use crate::tasks::spawn_sweep_task;

// == TTL Cache ==
/// An in-process TTL key-value cache with lazy expiry and a periodic sweep.
///
/// Each instance is independent: it carries its own store, statistics, and
/// sweep task. The sweep is spawned exactly once, by the constructor, and is
/// aborted by [`shutdown`](TtlCache::shutdown) or when the handle is dropped,
/// so re-creating a cache can never leave a duplicate sweeper behind.
///
/// All operations execute under a single lock guarding the whole map, which
/// keeps overwrites atomic from the caller's point of view and preserves the
/// one-live-entry-per-key invariant under concurrent access.
///
/// # Example
/// ```
/// use ttl_cache::TtlCache;
/// use std::time::Duration;
///
/// # tokio_test::block_on(async {
/// let cache: TtlCache<String> = TtlCache::with_defaults();
///
/// cache.set_with_ttl("user:42", "Ann".to_string(), Duration::from_secs(1)).await;
/// assert_eq!(cache.get("user:42").await, Some("Ann".to_string()));
/// # });
/// ```
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Store shared with the sweep task
    store: Arc<RwLock<CacheStore<V>>>,
    /// Handle of the background sweep task
    sweeper: JoinHandle<()>,
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a cache from the given configuration and starts its sweep task.
    ///
    /// Must be called from within a Tokio runtime, which the sweep task is
    /// spawned onto.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(config: CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let store = Arc::new(RwLock::new(CacheStore::new(config.default_ttl)));
        let sweeper = spawn_sweep_task(store.clone(), config.sweep_interval);

        Ok(Self { store, sweeper })
    }

    /// Creates a cache with the default configuration
    /// (60 second TTL, 5 minute sweep interval).
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default()).expect("default configuration is valid")
    }

    // == Set ==
    /// Stores a key-value pair with the instance's default TTL.
    ///
    /// Overwrites any prior entry for the key and resets its TTL.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        let mut store = self.store.write().await;
        store.set(key.into(), value);
    }

    // == Set With TTL ==
    /// Stores a key-value pair with an explicit TTL.
    ///
    /// A zero `ttl` produces an entry that is never observable to
    /// [`get`](TtlCache::get).
    pub async fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let mut store = self.store.write().await;
        store.set_with_ttl(key.into(), value, ttl);
    }

    // == Get ==
    /// Retrieves a value by key, if present and unexpired.
    ///
    /// An expired entry found here is removed before `None` is returned, so
    /// this call is not side-effect-free. A write lock is taken for that
    /// reason.
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut store = self.store.write().await;
        store.get(key)
    }

    // == Contains Key ==
    /// Checks whether an unexpired entry exists for `key`, with the same
    /// lazy-expiry side effect as [`get`](TtlCache::get).
    pub async fn contains_key(&self, key: &str) -> bool {
        let mut store = self.store.write().await;
        store.contains_key(key)
    }

    // == Time Remaining ==
    /// Returns the remaining TTL of an unexpired entry, or None if the key
    /// is absent or expired.
    ///
    /// Unlike [`get`](TtlCache::get) and [`contains_key`](TtlCache::contains_key),
    /// this is a pure read under a read lock: an expired entry is reported as
    /// `None` but left in place until a read, a cleanup, or the sweep
    /// reclaims it.
    pub async fn time_remaining(&self, key: &str) -> Option<Duration> {
        let store = self.store.read().await;
        store.time_remaining(key)
    }

    // == Delete ==
    /// Removes the entry for `key` if present; no-op on an absent key.
    ///
    /// Returns whether an entry was removed.
    pub async fn delete(&self, key: &str) -> bool {
        let mut store = self.store.write().await;
        store.delete(key)
    }

    // == Clear ==
    /// Removes all entries unconditionally, expired or not.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        store.clear();
    }

    // == Cleanup ==
    /// Removes every expired entry and returns the number removed.
    ///
    /// The sweep task calls this on its own schedule; it is exposed for
    /// callers that want an explicit sweep.
    pub async fn cleanup(&self) -> usize {
        let mut store = self.store.write().await;
        store.cleanup_expired()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        store.stats()
    }

    // == Length ==
    /// Returns the current number of entries, including ones that have
    /// expired but not yet been reclaimed.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        let store = self.store.read().await;
        store.is_empty()
    }

    // == Shutdown ==
    /// Stops the background sweep task.
    ///
    /// The store itself stays usable afterwards; only the periodic sweep
    /// stops. Dropping the handle has the same effect.
    pub fn shutdown(&self) {
        debug!("Stopping TTL sweep task");
        self.sweeper.abort();
    }
}

impl<V> Drop for TtlCache<V> {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}
