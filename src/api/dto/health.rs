//! DTOs for the health endpoint.

use serde::Serialize;

/// Health probe response with per-dependency results.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceChecks,
}

/// Connectivity result for each backing service.
#[derive(Debug, Serialize)]
pub struct ServiceChecks {
    pub postgres: bool,
    pub redis: bool,
}
