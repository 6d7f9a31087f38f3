//! An in-process TTL key-value cache.
//!
//! Entries are stored with an absolute expiry instant and reclaimed two ways:
//! lazily, when a read finds them expired, and proactively, by a periodic
//! background sweep owned by each cache instance. Together these give
//! fast-path correctness (stale data is never returned) and bounded memory
//! (write-only keys do not accumulate).
//!
//! # Example
//! ```
//! use ttl_cache::{CacheConfig, TtlCache};
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let config = CacheConfig::new()
//!     .with_default_ttl(Duration::from_secs(30))
//!     .with_sweep_interval(Duration::from_secs(60));
//! let cache: TtlCache<u64> = TtlCache::new(config).unwrap();
//!
//! cache.set("answer", 42).await;
//! assert_eq!(cache.get("answer").await, Some(42));
//!
//! cache.delete("answer").await;
//! assert_eq!(cache.get("answer").await, None);
//!
//! cache.shutdown();
//! # });
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, CacheStore, TtlCache};
pub use config::CacheConfig;
pub use error::ConfigError;
pub use tasks::spawn_sweep_task;
