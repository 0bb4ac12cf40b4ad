//! # SuperApp - Library Root
//!
//! A **native desktop GUI** mock of a ride-hailing super-app home screen.
//! Everything shown is hard-coded; the only live I/O is fetching remote
//! artwork, which is drawn as a placeholder until it arrives.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              superapp (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI and native window  │
//! │  egui_extras   - Image decoding for fetched artwork    │
//! │  Tokio         - Async runtime for fetches             │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: state, navigation handlers and the image fetch task
//! - **content**: static catalog of everything the screens display
//! - **core**: error type and the `ImageFetcher` seam
//! - **debug**: tracing setup (file log, optional realtime log)
//! - **services**: the reqwest-backed image fetcher
//! - **ui**: theme, widgets and the five destinations
//! - **utils**: shared runtime and text helpers
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers)
//!   │   └── services::images (HTTP fetch on TOKIO_RT)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (home, discover, activity, search)
//!       ├── widgets::* (cards, rows, tab bar, accessory)
//!       └── theme (palette, metrics)
//! ```
//!
//! ## State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`. Each frame the UI
//! renders from a cloned snapshot and reports user actions back through
//! [`app::AppLike`]. Fetch results come back as [`AppEvent`]s over an
//! `async_channel` and are applied in `App::on_tick`.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib
//! cargo test --test app_flow
//! ```

pub mod app;
pub mod content;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Tab};
pub use core::{AppError, Result};
