//! Cache Store Module
//!
//! Bounded cache engine combining HashMap storage with LRU tracking and
//! dual-limit eviction. Single-threaded; [`LruCache`](crate::cache::LruCache)
//! wraps it behind a lock.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::cache::{validate_key, CacheEntry, CacheStats, EvictionCause, Limit, LruTracker, Usage};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Cache storage bounded by element count and total value size.
///
/// Invariants outside of a running `&mut self` call:
/// - `usage.elements == entries.len() == lru.len()`
/// - `usage.size_bytes` is the sum of all value lengths
#[derive(Debug)]
pub struct LruStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Configured ceiling
    limit: Limit,
    /// Live counters
    usage: Usage,
}

impl LruStore {
    // == Constructor ==
    /// Creates an empty store bounded by `limit`.
    pub fn new(limit: Limit) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            limit,
            usage: Usage::new(),
        }
    }

    // == Exists ==
    /// Reports whether `key` is present. Does not touch recency.
    pub fn exists(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.entries.contains_key(key))
    }

    // == Set ==
    /// Stores a key-value pair, evicting least recently used entries first
    /// until the write fits both limits.
    ///
    /// The written entry becomes the most recently used one. Values larger
    /// than the total size ceiling are rejected and leave the store untouched.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        validate_key(key)?;

        let size = value.len();
        if size > self.limit.max_size_bytes {
            debug!(key, size, limit = self.limit.max_size_bytes, "rejected oversized value");
            self.stats.record_rejection();
            return Err(CacheError::ValueTooLarge {
                key: key.to_string(),
                size,
                limit: self.limit.max_size_bytes,
            });
        }

        match self.entries.get(key).map(|entry| (entry.node, entry.size())) {
            Some((node, old_size)) => {
                // At the head the entry can only be reached by eviction once
                // it is alone, and then the projected size already fits.
                self.lru.touch(node);
                self.evict_by_size(old_size, size);
                if let Some(entry) = self.entries.get_mut(key) {
                    entry.replace(value);
                }
                self.usage.resize_entry(old_size, size);
                trace!(key, old_size, size, "updated entry");
            }
            None => {
                self.evict_by_size(0, size);
                self.evict_by_count();
                let node = self.lru.push_front(key);
                self.entries.insert(key.to_string(), CacheEntry::new(value, node));
                self.usage.add_entry(size);
                trace!(key, size, "inserted entry");
            }
        }

        if !self.usage.fits(&self.limit) {
            warn!(
                elements = self.usage.elements,
                size_bytes = self.usage.size_bytes,
                max_elements = self.limit.max_elements,
                max_size_bytes = self.limit.max_size_bytes,
                "cache over limit with nothing left to evict"
            );
        }

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key and marks it as most recently used.
    pub fn get(&mut self, key: &str) -> Result<String> {
        validate_key(key)?;

        match self.entries.get(key) {
            Some(entry) => {
                let (node, value) = (entry.node, entry.value.clone());
                self.lru.touch(node);
                self.stats.record_read(true);
                Ok(value)
            }
            None => {
                self.stats.record_read(false);
                Err(CacheError::MissingKey(key.to_string()))
            }
        }
    }

    // == Peek ==
    /// Retrieves a value without touching recency or statistics.
    pub fn peek(&self, key: &str) -> Result<Option<&str>> {
        validate_key(key)?;
        Ok(self.entries.get(key).map(|entry| entry.value.as_str()))
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// A blank key is never stored, so it reports `MissingKey`.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let entry = self
            .entries
            .remove(key)
            .ok_or_else(|| CacheError::MissingKey(key.to_string()))?;

        self.lru.remove(entry.node);
        self.usage.remove_entry(entry.size());
        trace!(key, size = entry.size(), "deleted entry");
        Ok(())
    }

    // == Clear ==
    /// Drops every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.usage = Usage::new();
    }

    // == Keys ==
    /// Returns the stored keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.lru.iter().map(str::to_string).collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.usage.elements;
        stats.size_bytes = self.usage.size_bytes;
        stats
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.lru.len(), self.entries.len());
        self.entries.len()
    }

    // == Eviction ==
    /// Removes the least recently used entry. Returns false when empty.
    fn evict_one(&mut self, cause: EvictionCause) -> bool {
        let Some(key) = self.lru.evict_oldest() else {
            return false;
        };
        if let Some(entry) = self.entries.remove(&key) {
            self.usage.remove_entry(entry.size());
            self.stats.record_eviction(cause);
            debug!(
                key = %key,
                freed_bytes = entry.size(),
                ?cause,
                "evicted least recently used entry"
            );
        }
        true
    }

    /// Evicts until replacing `reclaimed` bytes with `incoming` bytes fits
    /// the size ceiling.
    fn evict_by_size(&mut self, reclaimed: usize, incoming: usize) {
        while self.usage.size_bytes.saturating_sub(reclaimed) + incoming
            > self.limit.max_size_bytes
        {
            if !self.evict_one(EvictionCause::Size) {
                break;
            }
        }
    }

    /// Evicts until one more entry fits the element ceiling.
    fn evict_by_count(&mut self) {
        while self.usage.elements + 1 > self.limit.max_elements {
            if !self.evict_one(EvictionCause::Count) {
                break;
            }
        }
    }

    /// Asserts the bookkeeping invariants.
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        self.lru.validate();
        assert_eq!(self.usage.elements, self.entries.len());
        assert_eq!(self.lru.len(), self.entries.len());
        let size: usize = self.entries.values().map(CacheEntry::size).sum();
        assert_eq!(self.usage.size_bytes, size);
        for key in self.lru.iter() {
            assert!(self.entries.contains_key(key), "untracked key {key}");
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn store(max_elements: usize, max_size_bytes: usize) -> LruStore {
        LruStore::new(Limit::new(max_elements, max_size_bytes))
    }

    fn usage(elements: usize, size_bytes: usize) -> Usage {
        Usage {
            elements,
            size_bytes,
        }
    }

    #[test]
    fn test_store_new() {
        let store = store(100, 1024);
        assert_eq!(store.len(), 0);
        assert_eq!(store.usage(), Usage::new());
        assert_eq!(store.limit(), Limit::new(100, 1024));
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = store(100, 1024);

        store.set("key1", "value1".to_string()).unwrap();
        let value = store.get("key1").unwrap();

        assert_eq!(value, "value1");
        assert_eq!(store.len(), 1);
        assert_eq!(store.usage(), usage(1, 6));
        store.validate();
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = store(100, 1024);

        let result = store.get("nonexistent");
        assert_eq!(result, Err(CacheError::MissingKey("nonexistent".to_string())));
    }

    #[test]
    fn test_store_empty_key() {
        let mut store = store(100, 1024);

        assert_eq!(store.set("", "v".to_string()), Err(CacheError::EmptyKey));
        assert_eq!(store.get("   "), Err(CacheError::EmptyKey));
        assert_eq!(store.exists(""), Err(CacheError::EmptyKey));
        assert_eq!(store.peek(" "), Err(CacheError::EmptyKey));

        assert_eq!(store.len(), 0);
        // Blank keys are not reads
        assert_eq!(store.stats().misses, 0);
    }

    #[test]
    fn test_store_exists_does_not_touch() {
        let mut store = store(2, 1024);

        store.set("a", "1".to_string()).unwrap();
        store.set("b", "2".to_string()).unwrap();
        assert!(store.exists("a").unwrap());
        assert!(!store.exists("c").unwrap());

        // 'a' is still the eviction candidate
        store.set("c", "3".to_string()).unwrap();
        assert!(!store.exists("a").unwrap());
        assert!(store.exists("b").unwrap());
    }

    #[test]
    fn test_store_delete() {
        let mut store = store(100, 1024);

        store.set("key1", "value1".to_string()).unwrap();
        store.set("key2", "v2".to_string()).unwrap();
        store.delete("key1").unwrap();

        assert_eq!(store.len(), 1);
        assert!(!store.exists("key1").unwrap());
        assert_eq!(store.usage(), usage(1, 2));
        assert_eq!(store.stats().evictions(), 0);
        store.validate();
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let mut store = store(100, 1024);
        store.set("key1", "value1".to_string()).unwrap();

        let result = store.delete("nonexistent");
        assert_eq!(result, Err(CacheError::MissingKey("nonexistent".to_string())));
        assert_eq!(store.delete(""), Err(CacheError::MissingKey(String::new())));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = store(100, 1024);

        store.set("key1", "value1".to_string()).unwrap();
        store.set("key1", "v2".to_string()).unwrap();

        assert_eq!(store.get("key1").unwrap(), "v2");
        assert_eq!(store.len(), 1);
        assert_eq!(store.usage(), usage(1, 2));
        store.validate();
    }

    #[test]
    fn test_store_lru_eviction_by_count() {
        let mut store = store(3, 1024);

        store.set("key1", "value1".to_string()).unwrap();
        store.set("key2", "value2".to_string()).unwrap();
        store.set("key3", "value3".to_string()).unwrap();

        // Cache is full, adding key4 should evict key1 (oldest)
        store.set("key4", "value4".to_string()).unwrap();

        assert_eq!(store.len(), 3);
        assert!(!store.exists("key1").unwrap());
        assert_eq!(store.keys(), vec!["key4", "key3", "key2"]);
        assert_eq!(store.stats().evictions(), 1);
        store.validate();
    }

    #[test]
    fn test_store_lru_touch_on_get() {
        let mut store = store(3, 1024);

        store.set("key1", "value1".to_string()).unwrap();
        store.set("key2", "value2".to_string()).unwrap();
        store.set("key3", "value3".to_string()).unwrap();

        // Access key1 to make it most recently used
        store.get("key1").unwrap();

        // Adding key4 should evict key2 (now oldest)
        store.set("key4", "value4".to_string()).unwrap();

        assert!(store.exists("key1").unwrap());
        assert!(!store.exists("key2").unwrap());
    }

    #[test]
    fn test_store_overwrite_refreshes_recency() {
        let mut store = store(2, 1024);

        store.set("a", "1".to_string()).unwrap();
        store.set("b", "2".to_string()).unwrap();
        store.set("a", "3".to_string()).unwrap();
        store.set("c", "4".to_string()).unwrap();

        assert_eq!(store.keys(), vec!["c", "a"]);
        assert_eq!(store.peek("a").unwrap(), Some("3"));
    }

    #[test]
    fn test_store_eviction_by_size() {
        let mut store = store(100, 10);

        store.set("a", "1234".to_string()).unwrap();
        store.set("b", "1234".to_string()).unwrap();
        // 8 + 4 > 10: only 'a' has to go
        store.set("c", "1234".to_string()).unwrap();

        assert_eq!(store.keys(), vec!["c", "b"]);
        assert_eq!(store.usage(), usage(2, 8));

        // A full-size value clears everything else
        store.set("d", "0123456789".to_string()).unwrap();
        assert_eq!(store.keys(), vec!["d"]);
        assert_eq!(store.stats().evictions(), 3);
        store.validate();
    }

    #[test]
    fn test_store_growing_update_evicts_others_only() {
        let mut store = store(100, 10);

        store.set("a", "123".to_string()).unwrap();
        store.set("b", "123".to_string()).unwrap();
        store.set("c", "123".to_string()).unwrap();

        // 9 - 3 + 8 = 14 > 10 evicts 'b' and 'c', never 'a' itself
        store.set("a", "12345678".to_string()).unwrap();

        assert_eq!(store.keys(), vec!["a"]);
        assert_eq!(store.peek("a").unwrap(), Some("12345678"));
        assert_eq!(store.usage(), usage(1, 8));

        // Sole entry growing to the full ceiling needs no eviction
        store.set("a", "0123456789".to_string()).unwrap();
        assert_eq!(store.usage(), usage(1, 10));
        store.validate();
    }

    #[test]
    fn test_store_update_does_not_evict_by_count() {
        let mut store = store(2, 1024);

        store.set("a", "1".to_string()).unwrap();
        store.set("b", "2".to_string()).unwrap();
        store.set("b", "22".to_string()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.stats().evictions(), 0);
    }

    #[test]
    fn test_store_value_too_large() {
        let mut store = store(100, 8);
        store.set("key", "small".to_string()).unwrap();

        let result = store.set("big", "x".repeat(9));
        assert_eq!(
            result,
            Err(CacheError::ValueTooLarge {
                key: "big".to_string(),
                size: 9,
                limit: 8,
            })
        );

        // Existing state is untouched, including on update
        assert!(store.set("key", "x".repeat(9)).unwrap_err().is_value_too_large());
        assert_eq!(store.keys(), vec!["key"]);
        assert_eq!(store.peek("key").unwrap(), Some("small"));
        assert_eq!(store.stats().evictions(), 0);
        store.validate();
    }

    #[test]
    fn test_store_eviction_causes_and_rejections() {
        let mut store = store(2, 6);

        store.set("a", "111".to_string()).unwrap();
        store.set("b", "22".to_string()).unwrap();
        // Count limit: one more key does not fit
        store.set("c", "3".to_string()).unwrap();
        // Size limit: 3 + 5 > 6 pushes out 'b'
        store.set("d", "44444".to_string()).unwrap();
        assert!(store.set("e", "x".repeat(7)).unwrap_err().is_value_too_large());

        let stats = store.stats();
        assert_eq!(stats.count_evictions, 1);
        assert_eq!(stats.size_evictions, 1);
        assert_eq!(stats.evictions(), 2);
        assert_eq!(stats.rejections, 1);
        assert_eq!(store.keys(), vec!["d", "c"]);
        store.validate();
    }

    #[test]
    fn test_store_zero_element_limit() {
        let mut store = store(0, 1024);

        // Nothing can be evicted to make room; the write still proceeds
        store.set("a", "1".to_string()).unwrap();
        assert_eq!(store.len(), 1);

        store.set("b", "2".to_string()).unwrap();
        assert_eq!(store.keys(), vec!["b"]);
        store.validate();
    }

    #[test]
    fn test_store_empty_values_and_zero_size_limit() {
        let mut store = store(2, 0);

        store.set("a", String::new()).unwrap();
        store.set("b", String::new()).unwrap();
        assert!(store.set("c", "x".to_string()).unwrap_err().is_value_too_large());

        assert_eq!(store.usage(), usage(2, 0));
        store.validate();
    }

    #[test]
    fn test_store_stats() {
        let mut store = store(100, 1024);

        store.set("key1", "value1".to_string()).unwrap();
        store.get("key1").unwrap(); // hit
        let _ = store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.size_bytes, 6);
    }

    #[test]
    fn test_store_clear() {
        let mut store = store(100, 1024);

        store.set("key1", "value1".to_string()).unwrap();
        store.get("key1").unwrap();
        store.clear();

        assert_eq!(store.len(), 0);
        assert_eq!(store.usage(), Usage::new());
        assert_eq!(store.stats().hits, 1);
        store.validate();

        store.set("key2", "v".to_string()).unwrap();
        assert_eq!(store.keys(), vec!["key2"]);
    }
}
