//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short URL creation
//! - [`services::redirect_service::RedirectService`] - Slug resolution and click queuing
//! - [`services::stats_service::StatsService`] - Click statistics and recent mappings

pub mod services;
