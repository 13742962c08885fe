//! Utility functions for slug handling and target URL validation.
//!
//! - [`slug`] - Slug generation and validation
//! - [`url_policy`] - Acceptance rules for destination URLs

pub mod slug;
pub mod url_policy;
