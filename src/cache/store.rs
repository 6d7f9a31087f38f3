//! Cache Store Module
//!
//! Synchronous cache engine combining HashMap storage with TTL expiration.
//! Expired entries are removed lazily on read and in bulk by
//! [`cleanup_expired`](CacheStore::cleanup_expired).

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage with per-entry TTL.
///
/// All operations are synchronous and in-memory. Callers embedding this in a
/// concurrent host must guard the whole store with a single mutual-exclusion
/// primitive; [`TtlCache`](crate::TtlCache) does exactly that.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL applied when the caller does not supply one
    default_ttl: Duration,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL applied by [`set`](CacheStore::set) when the
    ///   caller does not choose one explicitly
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a key-value pair with the default TTL.
    ///
    /// If the key already exists, the value is overwritten and the TTL is
    /// reset. Always succeeds.
    pub fn set(&mut self, key: String, value: V) {
        let ttl = self.default_ttl;
        self.set_with_ttl(key, value, ttl);
    }

    // == Set With TTL ==
    /// Stores a key-value pair with an explicit TTL.
    ///
    /// The entry expires `ttl` from now. A zero `ttl` produces an entry that
    /// is never observable to [`get`](CacheStore::get). The insert replaces
    /// any prior entry for the key in a single map operation, so no caller
    /// ever observes a partially overwritten entry.
    pub fn set_with_ttl(&mut self, key: String, value: V, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value only if an entry exists and is unexpired. An expired
    /// entry found here is removed before absence is returned, so `get` is
    /// load-bearing for cleanup and not side-effect-free.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                // Lazy expiry: remove and count as a miss
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Contains Key ==
    /// Checks whether an unexpired entry exists for `key`.
    ///
    /// Has the same lazy-expiry side effect as [`get`](CacheStore::get) but
    /// does not clone the value and does not touch the hit/miss counters.
    pub fn contains_key(&mut self, key: &str) -> bool {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.set_total_entries(self.entries.len());
                return false;
            }
            true
        } else {
            false
        }
    }

    // == Time Remaining ==
    /// Returns the remaining TTL of an unexpired entry, or None if the key
    /// is absent or already expired.
    pub fn time_remaining(&self, key: &str) -> Option<Duration> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.time_remaining())
    }

    // == Delete ==
    /// Removes the entry for `key` if present.
    ///
    /// Returns whether an entry was removed. Idempotent: deleting an absent
    /// key is a no-op.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Removes all entries unconditionally, expired or not.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// This is the only O(n) operation; it backs the periodic sweep so that
    /// keys which are set once and never read again do not accumulate.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.record_expirations(count as u64);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, including ones that have
    /// expired but not yet been removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
