//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::CacheService;

/// Application state shared across all handlers.
///
/// Services and repositories are held behind `Arc`, so cloning the state
/// per request is cheap. The repository and cache appear both inside the
/// services and directly here; the direct handles feed the health probes.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub stats_service: Arc<StatsService>,
    pub url_repository: Arc<dyn UrlRepository>,
    pub cache: Arc<dyn CacheService>,
    pub admin_key: String,
}
