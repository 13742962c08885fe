//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates the rate limiter for link creation.
///
/// # Limits
///
/// - **Replenish**: one token every 2 seconds
/// - **Burst**: 30 requests
///
/// Together that allows 30 creations per minute and client IP. Requests
/// exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Limits are applied per client IP extracted from the socket peer
/// address, so the server must be built with connect info.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(Duration::from_secs(2))
            .burst_size(30)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
