//! Configuration Module
//!
//! Handles loading the cache limits from environment variables.

use std::env;

use crate::cache::Limit;

/// Default maximum number of cached elements.
pub const DEFAULT_MAX_ELEMENTS: usize = 1000;

/// Default ceiling on the total size of cached values (1 MiB).
pub const DEFAULT_MAX_SIZE_BYTES: usize = 1024 * 1024;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_elements: usize,
    /// Maximum total size in bytes of all cached values
    pub max_size_bytes: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ELEMENTS` - Maximum cache entries (default: 1000)
    /// - `CACHE_MAX_SIZE_BYTES` - Maximum total value size (default: 1048576)
    pub fn from_env() -> Self {
        Self {
            max_elements: env_or("CACHE_MAX_ELEMENTS", DEFAULT_MAX_ELEMENTS),
            max_size_bytes: env_or("CACHE_MAX_SIZE_BYTES", DEFAULT_MAX_SIZE_BYTES),
        }
    }

    /// Returns the cache limit described by this configuration.
    pub fn limit(&self) -> Limit {
        Limit::new(self.max_elements, self.max_size_bytes)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }
}

fn env_or(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
