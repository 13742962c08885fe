//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Short URL mapping storage and retrieval
//! - [`PgStatsRepository`] - Click log writes and analytics queries

pub mod pg_stats_repository;
pub mod pg_url_repository;

pub use pg_stats_repository::PgStatsRepository;
pub use pg_url_repository::PgUrlRepository;
