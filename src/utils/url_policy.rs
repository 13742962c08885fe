//! Target URL validation policy for link creation.
//!
//! Accepted URLs are stored verbatim; validation never rewrites them.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::AppError;

/// Maximum accepted target URL length in characters.
const MAX_URL_LENGTH: usize = 2048;

/// Hostnames and address prefixes that resolve into loopback or private
/// networks (RFC 1918 plus localhost).
static PRIVATE_HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(localhost|127\.|10\.|172\.(1[6-9]|2\d|3[01])\.|192\.168\.)").unwrap()
});

/// Validates a target URL before a mapping is created for it.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the URL is longer than 2048
/// characters, does not parse, uses a scheme other than `http`/`https`, or
/// points at a private or loopback host.
pub fn validate_target_url(raw: &str) -> Result<(), AppError> {
    if raw.chars().count() > MAX_URL_LENGTH {
        return Err(AppError::validation("URL must be 2048 characters or fewer"));
    }

    let url = Url::parse(raw).map_err(|_| AppError::validation("Invalid URL format"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::validation("Only HTTP and HTTPS URLs are allowed"));
    }

    // Url::parse lowercases the host, so the pattern match is case-insensitive.
    let host = url.host_str().unwrap_or_default();
    if PRIVATE_HOST_PATTERN.is_match(host) {
        return Err(AppError::validation("Private URLs not allowed"));
    }

    Ok(())
}
