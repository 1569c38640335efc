//! Cache Module
//!
//! Provides in-memory key/value caches behind one capability contract:
//! a bounded cache with LRU eviction by element count and total value size,
//! and an unbounded map for comparison.
//!
//! The recency list and the unlocked store stay inside the crate; callers
//! only reach them through [`LruCache`]:
//!
//! ```compile_fail
//! use tiny_cache::cache::LruStore;
//! ```
//!
//! ```compile_fail
//! use tiny_cache::cache::{LruTracker, NodeId};
//! ```
//!
//! ```compile_fail
//! use tiny_cache::cache::CacheEntry;
//! ```

mod bounded;
mod entry;
mod limit;
mod lru;
mod simple;
mod stats;
mod store;


// Re-export public types
pub use bounded::LruCache;
pub use limit::{Limit, Usage};
pub use simple::SimpleCache;
pub use stats::{CacheStats, EvictionCause};

pub(crate) use entry::CacheEntry;
pub(crate) use lru::LruTracker;
pub(crate) use store::LruStore;

use crate::error::{CacheError, Result};

// == Cache Contract ==
/// Operations shared by every cache variant.
///
/// Implementations are safe to share between threads.
pub trait Cache: Send + Sync {
    /// Reports whether `key` is present without counting as an access.
    fn exists(&self, key: &str) -> Result<bool>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Result<String>;

    /// Removes `key`.
    fn del(&self, key: &str) -> Result<()>;

    /// Returns the number of stored entries.
    fn total(&self) -> usize;
}

/// Rejects keys that are empty or only whitespace.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(CacheError::EmptyKey);
    }
    Ok(())
}
