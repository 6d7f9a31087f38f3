//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

/// Horizon used when a TTL is too large to represent as an instant:
/// roughly 100 years, effectively never for a process-local cache.
const MAX_TTL_HORIZON: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// A single cache entry: the stored value plus its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, owned by the cache once inserted
    pub value: V,
    /// Creation instant
    pub created_at: Instant,
    /// Absolute expiry instant (creation instant + TTL)
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    ///
    /// A zero `ttl` yields an entry that is already expired at its own
    /// creation instant. A `ttl` too large to represent as an instant
    /// (e.g. `Duration::MAX`) saturates to roughly 100 years out, so
    /// storing never panics for any TTL.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now.checked_add(ttl).unwrap_or(now + MAX_TTL_HORIZON);
        Self {
            value,
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// instant is greater than or equal to the expiry instant. This makes a
    /// zero-TTL entry expired from the moment it is created, so it is never
    /// observable to a read.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Time Remaining ==
    /// Returns the remaining time until expiry.
    ///
    /// Returns `Duration::ZERO` once the entry has expired.
    pub fn time_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    // == Age ==
    /// Returns the time elapsed since the entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
