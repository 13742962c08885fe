//! Redirect resolution service for the hot path.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Resolves slugs to destination URLs and schedules click analytics.
///
/// Lookup is two-tier: cache first, store on a miss, with a cache warm
/// after every store hit. Cache failures degrade to store lookups; they
/// never fail the redirect.
pub struct RedirectService {
    url_repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        cache: Arc<dyn CacheService>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            url_repository,
            cache,
            click_sender,
        }
    }

    /// Resolves a slug to its destination URL.
    ///
    /// A cache hit skips the store entirely. On a miss the mapping is read
    /// from the store and written back to the cache before returning, so
    /// the next redirect for the same slug stays off the database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown slug. That path leaves
    /// no side effects: nothing is cached and nothing is queued.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        match self.cache.get_url(slug).await {
            Ok(Some(url)) => {
                debug!(slug = %slug, "Resolved from cache");
                return Ok(url);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(slug = %slug, error = %e, "Cache lookup failed, falling back to store");
            }
        }

        let record = self
            .url_repository
            .find_by_slug(slug)
            .await?
            .ok_or(AppError::NotFound("Short URL not found"))?;

        if let Err(e) = self
            .cache
            .set_url(&record.slug, &record.original_url, None)
            .await
        {
            warn!(slug = %record.slug, error = %e, "Failed to warm cache");
        }

        Ok(record.original_url)
    }

    /// Queues a click event for the background worker.
    ///
    /// Never blocks the redirect: when the queue is full the event is
    /// dropped and the drop is logged.
    pub fn record_click(&self, event: ClickEvent) {
        if let Err(e) = self.click_sender.try_send(event) {
            warn!(error = %e, "Dropping click event");
        }
    }
}
