//! Limit and Usage Module
//!
//! The configured ceiling of a bounded cache and the live counters mirroring it.

use serde::{Deserialize, Serialize};

// == Limit ==
/// Configured ceiling of a bounded cache. Fixed once the cache is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    /// Maximum number of entries
    pub max_elements: usize,
    /// Maximum sum of value lengths in bytes
    pub max_size_bytes: usize,
}

impl Limit {
    pub fn new(max_elements: usize, max_size_bytes: usize) -> Self {
        Self {
            max_elements,
            max_size_bytes,
        }
    }
}

// == Usage ==
/// Live counters for the current contents of a bounded cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Usage {
    /// Number of entries currently stored
    pub elements: usize,
    /// Sum of the lengths of all stored values
    pub size_bytes: usize,
}

impl Usage {
    // == Constructor ==
    /// Creates a zeroed usage record.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Accounts for one new entry of `size` bytes.
    pub fn add_entry(&mut self, size: usize) {
        self.elements += 1;
        self.size_bytes += size;
    }

    // == Remove ==
    /// Releases one entry of `size` bytes.
    pub fn remove_entry(&mut self, size: usize) {
        self.elements = self.elements.saturating_sub(1);
        self.size_bytes = self.size_bytes.saturating_sub(size);
    }

    // == Resize ==
    /// Replaces the contribution of an existing entry.
    pub fn resize_entry(&mut self, old_size: usize, new_size: usize) {
        self.size_bytes = self.size_bytes.saturating_sub(old_size) + new_size;
    }

    /// Returns true when both counters are within `limit`.
    pub fn fits(&self, limit: &Limit) -> bool {
        self.elements <= limit.max_elements && self.size_bytes <= limit.max_size_bytes
    }
}
