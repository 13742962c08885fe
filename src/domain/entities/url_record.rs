//! Short URL mapping entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored short URL mapping.
///
/// `click_count` is maintained asynchronously by the click worker, so a
/// freshly read record may lag behind redirects delivered moments ago.
///
/// Serializes with snake_case field names, matching the row shape the admin
/// listing exposes.
#[derive(Debug, Clone, Serialize)]
pub struct UrlRecord {
    /// Slug the mapping is reachable under.
    pub slug: String,
    /// Destination URL, stored verbatim as submitted.
    pub original_url: String,
    /// When the mapping was created.
    pub created_at: DateTime<Utc>,
    /// Total redirects counted so far.
    pub click_count: i64,
}

impl UrlRecord {
    /// Creates a record from its stored fields.
    pub fn new(
        slug: String,
        original_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            slug,
            original_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for creating a new mapping.
///
/// The slug is already validated and the URL already accepted by the time
/// this struct reaches a repository.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub slug: String,
    pub original_url: String,
}
