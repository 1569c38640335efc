//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for every cache variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key is empty or made only of whitespace
    #[error("Empty key")]
    EmptyKey,

    /// Key is not present in the cache
    #[error("The key '{0}' is not present")]
    MissingKey(String),

    /// Value is larger than the configured total size ceiling
    #[error("The value for '{key}' exceeds the limits ({size} > {limit} bytes)")]
    ValueTooLarge {
        key: String,
        size: usize,
        limit: usize,
    },
}

impl CacheError {
    /// Returns true for [`CacheError::EmptyKey`].
    pub fn is_empty_key(&self) -> bool {
        matches!(self, CacheError::EmptyKey)
    }

    /// Returns true for [`CacheError::MissingKey`].
    pub fn is_missing_key(&self) -> bool {
        matches!(self, CacheError::MissingKey(_))
    }

    /// Returns true for [`CacheError::ValueTooLarge`].
    pub fn is_value_too_large(&self) -> bool {
        matches!(self, CacheError::ValueTooLarge { .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
