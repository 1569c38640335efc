//! Tiny Cache - A bounded in-process key/value cache
//!
//! Provides LRU eviction driven by both an element count limit and a total
//! value size limit, safe to share between threads.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, EvictionCause, Limit, LruCache, SimpleCache, Usage};
pub use config::Config;
pub use error::{CacheError, Result};
