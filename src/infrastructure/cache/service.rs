//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching slug to destination URL mappings.
///
/// Implementations must be thread-safe and degrade gracefully: a broken
/// cache turns redirects into store lookups, it never turns them into
/// errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the destination URL for a slug from cache.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Production implementations swallow backend errors, log them, and
    /// report a miss instead.
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>>;

    /// Stores a slug mapping in cache with an optional TTL.
    ///
    /// # Arguments
    ///
    /// - `slug` - The slug key
    /// - `original_url` - The destination URL to cache
    /// - `ttl_seconds` - Optional TTL in seconds (implementation default if None)
    ///
    /// # Errors
    ///
    /// Production implementations log write failures and return `Ok(())`
    /// so the request flow is never disrupted.
    async fn set_url(
        &self,
        slug: &str,
        original_url: &str,
        ttl_seconds: Option<usize>,
    ) -> CacheResult<()>;

    /// Removes a cached slug mapping.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, slug: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
