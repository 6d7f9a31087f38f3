//! Background Tasks Module
//!
//! Contains background tasks owned by a cache instance's lifecycle.
//!
//! # Tasks
//! - TTL sweep: removes expired cache entries at a configured interval

mod sweep;

pub use sweep::spawn_sweep_task;
