//! DTO for the admin listing endpoint.

use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// The latest mappings, newest first, as raw snake_case rows.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub urls: Vec<UrlRecord>,
}
