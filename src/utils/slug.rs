//! Slug generation and validation.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::error::AppError;

/// Alphabet used for generated slugs (base62).
const SLUG_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated slugs.
const GENERATED_SLUG_LENGTH: usize = 7;

/// Pattern every slug must match, generated or caller-chosen.
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,50}$").unwrap());

/// Generates a random 7-character base62 slug.
pub fn generate_slug() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_SLUG_LENGTH)
        .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
        .collect()
}

/// Validates a slug against the allowed pattern.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the slug is shorter than 3 or longer
/// than 50 characters, or contains anything besides ASCII letters, digits,
/// `_` and `-`.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if SLUG_PATTERN.is_match(slug) {
        Ok(())
    } else {
        Err(AppError::validation(
            "Slug must be 3–50 chars: letters, digits, _ -",
        ))
    }
}
