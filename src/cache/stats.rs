//! Counters describing how the bounded cache has been used: reads, writes
//! refused for size, and evictions split by the limit that forced them.

use serde::Serialize;

/// Which limit forced an entry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionCause {
    /// The incoming value did not fit the total size ceiling
    Size,
    /// A new key did not fit the element ceiling
    Count,
}

/// Snapshot of cache activity. Contents counters are filled in by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Reads that found their key
    pub hits: u64,
    /// Reads of an absent key
    pub misses: u64,
    /// Writes refused with `ValueTooLarge`
    pub rejections: u64,
    /// Entries dropped to make room under the size ceiling
    pub size_evictions: u64,
    /// Entries dropped to make room under the element ceiling
    pub count_evictions: u64,
    /// Entries stored when the snapshot was taken
    pub total_entries: usize,
    /// Bytes stored when the snapshot was taken
    pub size_bytes: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evictions of either cause.
    pub fn evictions(&self) -> u64 {
        self.size_evictions + self.count_evictions
    }

    /// hits / (hits + misses), 0.0 before the first read.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            reads => self.hits as f64 / reads as f64,
        }
    }

    pub(crate) fn record_read(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub(crate) fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    pub(crate) fn record_eviction(&mut self, cause: EvictionCause) {
        match cause {
            EvictionCause::Size => self.size_evictions += 1,
            EvictionCause::Count => self.count_evictions += 1,
        }
    }
}
