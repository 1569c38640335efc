//! Unbounded cache: a locked map with no eviction.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::cache::{validate_key, Cache};
use crate::error::{CacheError, Result};

/// Cache without any limit. Useful as a baseline next to [`LruCache`](crate::cache::LruCache).
#[derive(Debug, Default)]
pub struct SimpleCache {
    entries: RwLock<HashMap<String, String>>,
}

impl SimpleCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cache for SimpleCache {
    fn exists(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.entries.read().contains_key(key))
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        validate_key(key)?;
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String> {
        validate_key(key)?;
        self.entries
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::MissingKey(key.to_string()))
    }

    fn del(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| CacheError::MissingKey(key.to_string()))
    }

    fn total(&self) -> usize {
        self.entries.read().len()
    }
}
