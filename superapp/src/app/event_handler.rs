//! # Event Handler
//!
//! Applies async task results to the application state.

use std::sync::Arc;

use crate::app::{App, AppEvent, ImageState};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event and releases it before returning.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::ImageLoaded { url, bytes } => {
                self.handle_image_loaded(url, bytes);
            }
            AppEvent::ImageFailed { url, reason } => {
                self.handle_image_failed(url, reason);
            }
        }
    }
}

impl App {
    fn handle_image_loaded(&mut self, url: String, bytes: Arc<[u8]>) {
        tracing::debug!(url = %url, bytes = bytes.len(), "Image ready");
        let mut state = self.state.write();
        state.images.insert(url, ImageState::Ready(bytes));
        state.needs_immediate_repaint = true;
    }

    fn handle_image_failed(&mut self, url: String, reason: String) {
        let mut state = self.state.write();
        state.images.insert(url, ImageState::Failed(reason));
    }
}
