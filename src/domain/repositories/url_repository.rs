//! Repository trait for short URL data access.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new mapping.
    ///
    /// The insert is attempted exactly once; collisions are not retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SlugTaken`] if the slug is already mapped.
    /// Returns [`AppError::Store`] on other database errors.
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError>;

    /// Finds a mapping by its slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if the slug is mapped
    /// - `Ok(None)` if it is not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Lists the most recently created mappings, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Probes store connectivity for the health endpoint.
    async fn health_check(&self) -> bool;
}
