//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use std::sync::Arc;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Image bytes downloaded
    ImageLoaded { url: String, bytes: Arc<[u8]> },
    /// Image fetch failed; the placeholder stays
    ImageFailed { url: String, reason: String },
}
