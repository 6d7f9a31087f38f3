//! Cache Module
//!
//! Provides in-memory key-value caching with TTL expiration: a synchronous
//! store engine and the shareable handle that wraps it.

mod entry;
mod handle;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use handle::TtlCache;
pub use stats::CacheStats;
pub use store::CacheStore;
