//! Thread-safe bounded LRU cache.
//!
//! Every mutating call holds the write lock for its whole check-and-act
//! sequence, so eviction and the requested change are one atomic step.

use parking_lot::RwLock;

use crate::cache::{Cache, CacheStats, Limit, LruStore, Usage};
use crate::error::Result;

// == LRU Cache ==
/// Bounded cache shared between threads, usually through an `Arc`.
#[derive(Debug)]
pub struct LruCache {
    store: RwLock<LruStore>,
}

impl LruCache {
    /// Creates an empty cache bounded by `limit`.
    pub fn new(limit: Limit) -> Self {
        Self {
            store: RwLock::new(LruStore::new(limit)),
        }
    }

    pub fn limit(&self) -> Limit {
        self.store.read().limit()
    }

    pub fn usage(&self) -> Usage {
        self.store.read().usage()
    }

    pub fn stats(&self) -> CacheStats {
        self.store.read().stats()
    }

    /// Reads a value without refreshing its recency.
    pub fn peek(&self, key: &str) -> Result<Option<String>> {
        Ok(self.store.read().peek(key)?.map(str::to_string))
    }

    /// Returns the stored keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.store.read().keys()
    }

    pub fn clear(&self) {
        self.store.write().clear();
    }
}

impl Cache for LruCache {
    fn exists(&self, key: &str) -> Result<bool> {
        self.store.read().exists(key)
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.store.write().set(key, value)
    }

    // Write lock: a hit moves the entry in the recency list.
    fn get(&self, key: &str) -> Result<String> {
        self.store.write().get(key)
    }

    fn del(&self, key: &str) -> Result<()> {
        self.store.write().delete(key)
    }

    fn total(&self) -> usize {
        self.store.read().len()
    }
}
