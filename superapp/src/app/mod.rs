//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, the background
//! image fetches and the view-local state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - tab, search text, tab bar flag, image cache       │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio runtime (utils::runtime)                 │
//! │  - tasks::images::request_image() - one fetch per URL       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: orchestrator and `eframe::App` implementation
//! - **[`AppState`]**: shared state (see [`state`] module)
//! - **[`AppEvent`]**: async task results (see [`events`] module)
//! - **[`handlers`]**: navigation, search, scroll and settings handlers
//! - **[`tasks`]**: background image fetches
//!
//! ## State Management Pattern
//!
//! Locks are held for the duration of a single handler or event and never
//! while rendering. The UI renders from a cloned snapshot:
//!
//! ```rust,ignore
//! let snapshot = app.state.read().clone();
//! render(&snapshot);
//! ```

mod state;
mod events;
pub mod handlers;
mod tasks;
mod event_handler;
mod app_trait;

pub use state::*;
pub use events::AppEvent;
pub use app_trait::AppLike;

use std::sync::Arc;
use std::time::Duration;
use parking_lot::RwLock;
use async_channel::{Sender, Receiver, unbounded};

use crate::core::service::ImageFetcher;
use crate::services::images;
use crate::ui::theme::{Theme, ThemeConfig};

/// How often to poll for finished fetches while images are still in flight
const PENDING_IMAGE_POLL: Duration = Duration::from_millis(100);

/// Main application orchestrator.
///
/// Owns the shared [`AppState`], the event channel that background fetches
/// report through, and the [`ImageFetcher`] used for remote images.
///
/// # Example
///
/// ```rust,no_run
/// use superapp::app::{App, Tab};
/// use superapp::ui::theme::ThemeConfig;
///
/// let mut app = App::new(ThemeConfig::default());
/// app.handle_tab_change(Tab::Activity);
/// assert_eq!(app.state.read().current_tab, Tab::Activity);
/// ```
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for reading (shared lock, multiple readers)
    /// - Use `write()` for writing (exclusive lock, single writer)
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into background tasks.
    event_tx: Sender<AppEvent>,

    /// Remote image source
    fetcher: Arc<dyn ImageFetcher>,
}

impl App {
    /// Create an application using the HTTP image fetcher.
    pub fn new(theme_config: ThemeConfig) -> Self {
        Self::with_fetcher(theme_config, images::default_fetcher())
    }

    /// Create an application with an injected image fetcher.
    pub fn with_fetcher(theme_config: ThemeConfig, fetcher: Arc<dyn ImageFetcher>) -> Self {
        let settings = SettingsState {
            theme_config,
            ..SettingsState::default()
        };
        let state = AppState {
            settings,
            ..AppState::default()
        };

        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - Event channel created");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            fetcher,
        }
    }

    /// eframe creation hook: installs image loaders and applies the theme.
    pub fn setup(&self, ctx: &egui::Context) {
        egui_extras::install_image_loaders(ctx);
        let config = self.state.read().settings.theme_config.clone();
        Theme::apply_custom_theme(ctx, &config);
    }

    /// Called every frame to apply finished background work.
    ///
    /// Drains all pending events with `try_recv()` and never blocks.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }

        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: Processed events from event channel");
        }
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Make `tab` the visible destination
    pub fn handle_tab_change(&mut self, tab: Tab) {
        handlers::navigation::handle_tab_change(self.state.clone(), tab);
    }

    /// Navigate to next tab in bar order
    pub fn next_tab(&mut self) {
        handlers::navigation::next_tab(self.state.clone());
    }

    /// Navigate to previous tab in bar order
    pub fn previous_tab(&mut self) {
        handlers::navigation::previous_tab(self.state.clone());
    }

    /// Store the search text
    pub fn handle_search_query_change(&mut self, text: String) {
        handlers::navigation::handle_search_query_change(self.state.clone(), text);
    }

    /// Report the vertical scroll offset of the visible destination and the
    /// largest offset its scroll area currently allows
    pub fn handle_scroll(&mut self, offset_y: f32, max_offset_y: f32) {
        handlers::navigation::handle_scroll(self.state.clone(), offset_y, max_offset_y);
    }

    /// Fetch `url` in the background unless it is already known
    pub fn request_image(&mut self, url: &str) {
        tasks::images::request_image(
            self.state.clone(),
            self.fetcher.clone(),
            self.event_tx.clone(),
            url,
        );
    }

    /// Get the event sender.
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_tab_change(&mut self, tab: Tab) {
        self.handle_tab_change(tab);
    }

    fn next_tab(&mut self) {
        self.next_tab();
    }

    fn previous_tab(&mut self) {
        self.previous_tab();
    }

    fn handle_search_query_change(&mut self, text: String) {
        self.handle_search_query_change(text);
    }

    fn handle_scroll(&mut self, offset_y: f32, max_offset_y: f32) {
        self.handle_scroll(offset_y, max_offset_y);
    }

    fn request_image(&mut self, url: &str) {
        self.request_image(url);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();

        crate::ui::render(ctx, self);

        let (repaint_now, pending) = {
            let mut state = self.state.write();
            let repaint_now = std::mem::take(&mut state.needs_immediate_repaint);
            (repaint_now, state.has_pending_images())
        };
        if repaint_now {
            ctx.request_repaint();
        } else if pending {
            ctx.request_repaint_after(PENDING_IMAGE_POLL);
        }
    }
}
