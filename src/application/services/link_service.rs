//! Link creation service.

use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::slug::{generate_slug, validate_slug};
use crate::utils::url_policy::validate_target_url;

/// Service for creating short URL mappings.
///
/// Owns target URL validation, slug selection, and the write-through cache
/// population that makes the first redirect a cache hit.
pub struct LinkService {
    url_repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix short URLs are rendered with; a
    /// trailing slash is trimmed so formatting stays predictable.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        cache: Arc<dyn CacheService>,
        base_url: String,
    ) -> Self {
        Self {
            url_repository,
            cache,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a mapping for `url` under a caller-chosen or generated slug.
    ///
    /// The target URL is stored verbatim once it passes validation. The
    /// insert is attempted exactly once; a taken slug surfaces as
    /// [`AppError::SlugTaken`] for custom and generated slugs alike.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the slug is rejected.
    /// Returns [`AppError::SlugTaken`] if the slug is already mapped.
    pub async fn shorten(
        &self,
        url: String,
        custom_slug: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        validate_target_url(&url)?;

        let slug = custom_slug.unwrap_or_else(generate_slug);
        validate_slug(&slug)?;

        let record = self
            .url_repository
            .create(NewUrl {
                slug,
                original_url: url,
            })
            .await?;

        if let Err(e) = self
            .cache
            .set_url(&record.slug, &record.original_url, None)
            .await
        {
            warn!(slug = %record.slug, error = %e, "Failed to prime cache for new slug");
        }

        Ok(record)
    }

    /// Constructs the full public short URL for a slug.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }
}
