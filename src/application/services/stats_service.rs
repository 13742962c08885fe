//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{CountryCount, StatsRepository, UrlRepository};
use crate::error::AppError;

/// How many country buckets a stats response includes.
const TOP_COUNTRIES_LIMIT: i64 = 10;

/// Service for reading click statistics and recent mappings.
pub struct StatsService {
    url_repository: Arc<dyn UrlRepository>,
    stats_repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        stats_repository: Arc<dyn StatsRepository>,
    ) -> Self {
        Self {
            url_repository,
            stats_repository,
        }
    }

    /// Fetches a mapping and its top clicking countries concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug has no mapping.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn slug_stats(
        &self,
        slug: &str,
    ) -> Result<(UrlRecord, Vec<CountryCount>), AppError> {
        let (record, top_countries) = tokio::try_join!(
            self.url_repository.find_by_slug(slug),
            self.stats_repository.top_countries(slug, TOP_COUNTRIES_LIMIT),
        )?;

        let record = record.ok_or(AppError::NotFound("URL not found"))?;

        Ok((record, top_countries))
    }

    /// Lists the most recently created mappings, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn recent_urls(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        self.url_repository.list_recent(limit).await
    }
}
