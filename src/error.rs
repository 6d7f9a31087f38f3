//! Error types for the cache
//!
//! Cache operations themselves are total and cannot fail; absence of a value
//! is a normal return value. The only fallible step is construction, where an
//! invalid configuration is rejected.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised when constructing a cache from an invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The sweep interval was zero, which would busy-loop the sweep task
    #[error("sweep interval must be greater than zero")]
    ZeroSweepInterval,
}
