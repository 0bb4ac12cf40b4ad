//! # Screen Modules
//!
//! One module per destination.
//!
//! - **[`home`]**: service grid, balances, promotions (also drawn for Finance)
//! - **[`discover`]**: placeholder label
//! - **[`activity`]**: rewards points and recent transactions
//! - **[`search`]**: ride booking, recent queries and recommendations
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
//!     // Read from the state snapshot, call app.handle_* for user actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**; no lock is held while they
//! draw. Scrollable destinations report their offset through
//! [`report_scroll`].

pub mod activity;
pub mod discover;
pub mod home;
pub mod search;

use egui::scroll_area::ScrollAreaOutput;
use crate::app::AppLike;

/// Pass a destination's scroll position, and how far it can scroll, to the app
pub(crate) fn report_scroll<R>(app: &mut impl AppLike, output: &ScrollAreaOutput<R>) {
    let max_offset_y = (output.content_size.y - output.inner_rect.height()).max(0.0);
    app.handle_scroll(output.state.offset.y, max_offset_y);
}
