//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies use snake_case fields; JSON responses for the public API
//! are camelCase, except the admin listing which exposes raw row shapes.

pub mod health;
pub mod list;
pub mod shorten;
pub mod stats;
