//! Membership stores backing the duplicate check.
//!
//! Every candidate key goes through one `is_new` call, which is a
//! combined check-and-set: the first caller to present a key wins it,
//! every later caller is told it is a duplicate. Backends only differ
//! in where the key set lives:
//!
//! - [`MemoryChecker`] keeps it in process memory, scoped to one run.
//! - [`RedisChecker`] keeps it in Redis, shared across machines and
//!   across runs, so shards of one batch can be processed anywhere.

pub mod memory;
pub mod redis;

use crate::error::Result;

// Re-export for convenience
pub use memory::MemoryChecker;
pub use redis::RedisChecker;

/// Trait for duplicate-check backends.
pub trait DupeChecker {
    /// Claim `key`, returning whether this caller was first.
    ///
    /// Returns `true` exactly once per key per store. A backend that
    /// cannot answer must return an error; it never defaults to either
    /// verdict.
    fn is_new(&mut self, key: &str) -> Result<bool>;
}
