//! # Image Tasks
//!
//! Fetch-on-first-render for remote images. Each URL is fetched at most once
//! per process: the cache entry is claimed as `Pending` under the write lock
//! before the task is spawned, so concurrent frames cannot double-fetch.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, ImageState};
use crate::core::service::ImageFetcher;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Start fetching `url` unless it is already pending, loaded or failed.
///
/// Returns `true` when a fetch was spawned.
///
/// Internal task function - spawns async task and sends the result via event channel.
pub(crate) fn request_image(
    state: Arc<RwLock<AppState>>,
    fetcher: Arc<dyn ImageFetcher>,
    event_tx: Sender<AppEvent>,
    url: &str,
) -> bool {
    {
        let mut state = state.write();
        if state.images.contains_key(url) {
            return false;
        }
        state.images.insert(url.to_string(), ImageState::Pending);
    } // Lock released here

    let url = url.to_string();
    TOKIO_RT.spawn(async move {
        let event = match fetcher.fetch(&url).await {
            Ok(bytes) => {
                tracing::debug!(url = %url, bytes = bytes.len(), "Image fetch completed");
                AppEvent::ImageLoaded {
                    url,
                    bytes: Arc::from(bytes),
                }
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Image fetch failed - keeping placeholder");
                AppEvent::ImageFailed {
                    url,
                    reason: e.to_string(),
                }
            }
        };
        let _ = event_tx.send(event).await;
    });

    true
}
