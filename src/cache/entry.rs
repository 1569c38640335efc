//! Cache Entry Module
//!
//! Defines the structure for individual entries of the bounded cache.

use crate::cache::lru::NodeId;

// == Cache Entry ==
/// A stored value together with its position in the recency list.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Handle of this entry's node in the recency list
    pub node: NodeId,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(value: String, node: NodeId) -> Self {
        Self { value, node }
    }

    // == Size ==
    /// Returns the contribution of this entry to the cache size, in bytes.
    pub fn size(&self) -> usize {
        self.value.len()
    }

    // == Replace ==
    /// Overwrites the value in place, returning the previous one.
    pub fn replace(&mut self, value: String) -> String {
        std::mem::replace(&mut self.value, value)
    }
}
