//! Background worker draining the click queue into the store.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::StatsRepository;

/// Consumes click events until every sender is dropped.
///
/// Each event fans out into two independent writes: the click log insert
/// and the counter increment. The writes run concurrently and are not
/// transactional; either may fail without affecting the other. Failures
/// are logged and the event is not retried.
///
/// When the channel closes, the remaining buffered events are drained
/// before the worker returns, so awaiting the worker task flushes pending
/// clicks on shutdown.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    stats_repository: Arc<dyn StatsRepository>,
) {
    info!("Click worker started");

    while let Some(event) = rx.recv().await {
        let (recorded, incremented) = tokio::join!(
            stats_repository.record_click(&event),
            stats_repository.increment_click_count(&event.slug),
        );

        if let Err(e) = recorded {
            error!(slug = %event.slug, error = %e, "Failed to record click");
        }

        if let Err(e) = incremented {
            error!(slug = %event.slug, error = %e, "Failed to increment click count");
        }
    }

    info!("Click queue closed, worker stopped");
}
