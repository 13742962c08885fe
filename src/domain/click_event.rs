//! Click event model for asynchronous click tracking.

/// Upper bound on stored click metadata fields, in characters.
const MAX_FIELD_LENGTH: usize = 512;

/// An in-memory representation of a click event for async processing.
///
/// Used to pass click information from the redirect handler to the
/// background worker via a channel. This decouples the HTTP response from
/// database writes, allowing fast redirects without blocking.
///
/// Metadata is clamped to [`MAX_FIELD_LENGTH`] characters at construction,
/// so the worker and repositories never see oversized header values.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub slug: String,
    /// Country code from the edge proxy, `"Unknown"` when absent.
    pub country: String,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

impl ClickEvent {
    /// Creates a click event from raw header values.
    ///
    /// # Arguments
    ///
    /// - `slug` - The slug that was resolved
    /// - `country` - Optional `cf-ipcountry` header value
    /// - `user_agent` - Optional `User-Agent` header value
    /// - `referrer` - Optional `Referer` header value
    ///
    /// A missing country collapses to `"Unknown"` so aggregation always has
    /// a bucket; user agent and referrer stay optional.
    pub fn new(
        slug: String,
        country: Option<&str>,
        user_agent: Option<&str>,
        referrer: Option<&str>,
    ) -> Self {
        Self {
            slug,
            country: clamp(country.unwrap_or("Unknown")),
            user_agent: user_agent.map(clamp),
            referrer: referrer.map(clamp),
        }
    }
}

/// Truncates a header value to [`MAX_FIELD_LENGTH`] characters.
fn clamp(value: &str) -> String {
    value.chars().take(MAX_FIELD_LENGTH).collect()
}
