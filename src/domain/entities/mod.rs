//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A stored short URL mapping with its click counter
//! - [`NewUrl`] - Input data for creating a mapping

pub mod url_record;

pub use url_record::{NewUrl, UrlRecord};
