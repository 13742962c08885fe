//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// Both fields default so a missing `url` surfaces as a policy rejection
/// (400 with a message) rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The destination URL to shorten.
    #[serde(default)]
    pub url: String,

    /// Optional caller-chosen slug; a random one is generated when absent.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Response for a created mapping.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub slug: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}
