//! Configuration Module
//!
//! Construction-time configuration for a cache instance.

use std::time::Duration;

use serde::Serialize;

use crate::error::ConfigError;

/// Default TTL applied when a caller omits one on set: 60 seconds.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Default interval between background sweeps: 5 minutes.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Cache configuration parameters.
///
/// Each cache instance carries its own configuration; there is no process-wide
/// ambient state.
#[derive(Debug, Clone, Serialize)]
pub struct CacheConfig {
    /// TTL applied to entries stored without an explicit TTL
    pub default_ttl: Duration,
    /// Interval between automatic cleanup runs of the background sweep
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a configuration with the default TTL and sweep interval.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the TTL applied when a caller omits one.
    ///
    /// A zero default TTL is allowed; it makes unqualified sets produce
    /// entries that are never observable to a read.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Sets the interval between background sweeps.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Validates the configuration.
    ///
    /// A zero sweep interval would turn the sweep task into a busy loop, so
    /// it is rejected here rather than producing confusing behavior later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sweep_interval.is_zero() {
            return Err(ConfigError::ZeroSweepInterval);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}
