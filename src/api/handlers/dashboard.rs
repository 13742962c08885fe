//! Handler serving the dashboard page.

use axum::response::Html;

/// Serves the single-page dashboard.
///
/// # Endpoint
///
/// `GET /`
///
/// The page is compiled into the binary, so the service ships as a single
/// artifact with no asset directory to deploy.
pub async fn dashboard_handler() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}
