//! # App Trait
//!
//! The user-action surface screen renderers talk to. Screens take
//! `&mut impl AppLike`, so headless tests can drive them with a stub.

use std::sync::Arc;
use parking_lot::RwLock;
use crate::app::{AppState, Tab};

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Navigation methods
    fn handle_tab_change(&mut self, tab: Tab);
    fn next_tab(&mut self);
    fn previous_tab(&mut self);

    // Search
    fn handle_search_query_change(&mut self, text: String);

    // Scroll-driven tab bar minimization
    fn handle_scroll(&mut self, offset_y: f32, max_offset_y: f32);

    // Remote images
    fn request_image(&mut self, url: &str);
}
