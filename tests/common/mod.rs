#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::extract::{ConnectInfo, Request};
use axum::middleware::map_request;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::mpsc;

use edge_shortener::application::services::{LinkService, RedirectService, StatsService};
use edge_shortener::domain::click_event::ClickEvent;
use edge_shortener::domain::entities::{NewUrl, UrlRecord};
use edge_shortener::domain::repositories::{CountryCount, StatsRepository, UrlRepository};
use edge_shortener::error::AppError;
use edge_shortener::infrastructure::cache::{CacheResult, CacheService};
use edge_shortener::state::AppState;

/// In-memory store implementing both repository traits.
///
/// Records live in plain vectors behind mutexes. `created_at` values are
/// assigned from a fixed base plus an insertion counter, so recency
/// ordering in assertions is deterministic.
pub struct MemoryStore {
    urls: Mutex<Vec<UrlRecord>>,
    clicks: Mutex<Vec<ClickEvent>>,
    url_reads: AtomicUsize,
    healthy: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            urls: Mutex::new(Vec::new()),
            clicks: Mutex::new(Vec::new()),
            url_reads: AtomicUsize::new(0),
            healthy: AtomicBool::new(true),
        }
    }

    /// Inserts a mapping directly, bypassing validation.
    pub fn seed(&self, slug: &str, url: &str) -> UrlRecord {
        let mut urls = self.urls.lock().unwrap();
        let record = UrlRecord::new(
            slug.to_string(),
            url.to_string(),
            created_at_for(urls.len()),
            0,
        );
        urls.push(record.clone());
        record
    }

    /// Appends a click row directly, as the worker would.
    pub fn seed_click(&self, slug: &str, country: Option<&str>) {
        self.clicks
            .lock()
            .unwrap()
            .push(ClickEvent::new(slug.to_string(), country, None, None));
    }

    /// Current stored state of a mapping.
    pub fn get(&self, slug: &str) -> Option<UrlRecord> {
        self.urls.lock().unwrap().iter().find(|r| r.slug == slug).cloned()
    }

    pub fn click_rows(&self) -> Vec<ClickEvent> {
        self.clicks.lock().unwrap().clone()
    }

    /// How many times `find_by_slug` has been called.
    pub fn url_read_count(&self) -> usize {
        self.url_reads.load(Ordering::SeqCst)
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

#[async_trait]
impl UrlRepository for MemoryStore {
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let mut urls = self.urls.lock().unwrap();
        if urls.iter().any(|r| r.slug == new_url.slug) {
            return Err(AppError::SlugTaken);
        }
        let record = UrlRecord::new(
            new_url.slug,
            new_url.original_url,
            created_at_for(urls.len()),
            0,
        );
        urls.push(record.clone());
        Ok(record)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, AppError> {
        self.url_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.urls.lock().unwrap().iter().find(|r| r.slug == slug).cloned())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let mut recent = self.urls.lock().unwrap().clone();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit as usize);
        Ok(recent)
    }

    async fn health_check(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsRepository for MemoryStore {
    async fn record_click(&self, click: &ClickEvent) -> Result<(), AppError> {
        self.clicks.lock().unwrap().push(click.clone());
        Ok(())
    }

    async fn increment_click_count(&self, slug: &str) -> Result<(), AppError> {
        let mut urls = self.urls.lock().unwrap();
        if let Some(record) = urls.iter_mut().find(|r| r.slug == slug) {
            record.click_count += 1;
        }
        Ok(())
    }

    async fn top_countries(&self, slug: &str, limit: i64) -> Result<Vec<CountryCount>, AppError> {
        let clicks = self.clicks.lock().unwrap();
        let mut counts: HashMap<String, i64> = HashMap::new();
        for click in clicks.iter().filter(|c| c.slug == slug) {
            *counts.entry(click.country.clone()).or_insert(0) += 1;
        }
        let mut buckets: Vec<CountryCount> = counts
            .into_iter()
            .map(|(country, count)| CountryCount { country, count })
            .collect();
        buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
        buckets.truncate(limit as usize);
        Ok(buckets)
    }
}

fn created_at_for(position: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap() + Duration::seconds(position as i64)
}

/// In-memory cache with inspectable entries.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
    healthy: AtomicBool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            healthy: AtomicBool::new(true),
        }
    }

    pub fn get(&self, slug: &str) -> Option<String> {
        self.entries.lock().unwrap().get(slug).cloned()
    }

    /// Pre-populates an entry, as a warm production cache would hold.
    pub fn insert(&self, slug: &str, url: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(slug.to_string(), url.to_string());
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(slug).cloned())
    }

    async fn set_url(
        &self,
        slug: &str,
        original_url: &str,
        _ttl_seconds: Option<usize>,
    ) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(slug.to_string(), original_url.to_string());
        Ok(())
    }

    async fn invalidate(&self, slug: &str) -> CacheResult<()> {
        self.entries.lock().unwrap().remove(slug);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}

/// Everything a handler test needs: wired state plus direct handles on the
/// fakes behind it.
pub struct TestContext {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub cache: Arc<MemoryCache>,
    pub click_rx: mpsc::Receiver<ClickEvent>,
}

pub fn create_test_state() -> TestContext {
    create_test_state_with(Arc::new(MemoryStore::new()), Arc::new(MemoryCache::new()))
}

/// Wires fresh services and a fresh click channel over existing fakes.
pub fn create_test_state_with(store: Arc<MemoryStore>, cache: Arc<MemoryCache>) -> TestContext {
    let (tx, rx) = mpsc::channel(100);

    let url_repository: Arc<dyn UrlRepository> = store.clone();
    let stats_repository: Arc<dyn StatsRepository> = store.clone();
    let cache_service: Arc<dyn CacheService> = cache.clone();

    let link_service = Arc::new(LinkService::new(
        url_repository.clone(),
        cache_service.clone(),
        "http://localhost:3014".to_string(),
    ));
    let redirect_service = Arc::new(RedirectService::new(
        url_repository.clone(),
        cache_service.clone(),
        tx,
    ));
    let stats_service = Arc::new(StatsService::new(url_repository.clone(), stats_repository));

    let state = AppState {
        link_service,
        redirect_service,
        stats_service,
        url_repository,
        cache: cache_service,
        admin_key: "test-admin-key".to_string(),
    };

    TestContext {
        state,
        store,
        cache,
        click_rx: rx,
    }
}

async fn inject_client_addr(mut req: Request) -> Request {
    let addr: SocketAddr = "203.0.113.7:4711".parse().unwrap();
    req.extensions_mut().insert(ConnectInfo(addr));
    req
}

/// Stamps every request with a fixed peer address.
///
/// The rate limiter keys on the connecting IP, which the test transport
/// does not provide.
pub fn with_client_addr(router: Router) -> Router {
    router.layer(map_request(inject_client_addr))
}
