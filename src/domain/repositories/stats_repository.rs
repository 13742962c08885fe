//! Repository trait for click recording and per-slug analytics.

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Click total for one country bucket.
#[derive(Debug, Clone)]
pub struct CountryCount {
    pub country: String,
    pub count: i64,
}

/// Repository interface for the click log and the per-mapping counter.
///
/// Called from the background worker rather than request handlers, so every
/// operation is designed to be safe to fail independently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Appends one click event to the click log.
    ///
    /// The slug is not checked against existing mappings; events for a slug
    /// deleted mid-flight are stored as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn record_click(&self, click: &ClickEvent) -> Result<(), AppError>;

    /// Atomically bumps the click counter for a slug.
    ///
    /// A slug with no mapping is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn increment_click_count(&self, slug: &str) -> Result<(), AppError>;

    /// Returns click totals per country for a slug, most clicked first.
    ///
    /// Clicks stored without a country are reported under `"Unknown"`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn top_countries(&self, slug: &str, limit: i64) -> Result<Vec<CountryCount>, AppError>;
}
