//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Short URL mapping reads and writes
//! - [`StatsRepository`] - Click recording and per-slug analytics

pub mod stats_repository;
pub mod url_repository;

pub use stats_repository::{CountryCount, StatsRepository};
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
