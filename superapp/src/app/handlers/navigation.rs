//! # Navigation Handlers
//!
//! Handlers for tab changes, search text and scroll-driven tab bar minimization.

use crate::app::state::{AppState, Tab};
use parking_lot::RwLock;
use std::sync::Arc;

/// Scroll distance (points) that counts as a deliberate scroll
pub const SCROLL_MINIMIZE_THRESHOLD: f32 = 8.0;

/// Offsets this close to the maximum count as "at the end"
const END_TOLERANCE: f32 = 1.0;

/// Make `tab` the visible destination
///
/// Internal handler function - use [`crate::app::App::handle_tab_change`] instead.
pub(crate) fn handle_tab_change(state: Arc<RwLock<AppState>>, tab: Tab) {
    let mut state = state.write();
    if state.current_tab != tab {
        tracing::debug!(from = ?state.current_tab, to = ?tab, "Tab changed");
    }
    state.current_tab = tab;
    state.tab_bar_minimized = false;
}

/// Navigate to next tab with wrap-around
///
/// Internal handler function - use [`crate::app::App::next_tab`] instead.
pub(crate) fn next_tab(state: Arc<RwLock<AppState>>) {
    let next = match state.try_read() {
        Some(guard) => guard.current_tab.next(),
        None => {
            tracing::warn!("Skipped tab navigation - state locked");
            return;
        }
    };
    handle_tab_change(state, next);
}

/// Navigate to previous tab with wrap-around
///
/// Internal handler function - use [`crate::app::App::previous_tab`] instead.
pub(crate) fn previous_tab(state: Arc<RwLock<AppState>>) {
    let previous = match state.try_read() {
        Some(guard) => guard.current_tab.previous(),
        None => {
            tracing::warn!("Skipped tab navigation - state locked");
            return;
        }
    };
    handle_tab_change(state, previous);
}

/// Store the search text
///
/// Internal handler function - use [`crate::app::App::handle_search_query_change`] instead.
pub(crate) fn handle_search_query_change(state: Arc<RwLock<AppState>>, text: String) {
    let mut state = state.write();
    state.search_query = text;
}

/// Track the vertical offset of the visible destination and minimize the
/// tab bar on scroll down, restoring it on scroll up or at the top.
///
/// Movements smaller than [`SCROLL_MINIMIZE_THRESHOLD`] accumulate against
/// the last recorded offset until they cross it.
///
/// `max_offset_y` is the largest offset the scroll area allows this frame.
/// Collapsing the bar makes the viewport taller, which pulls an offset
/// sitting at the end back by the height difference; an upward move that
/// lands exactly on the end is that clamp, not the user, and is ignored.
///
/// Internal handler function - use [`crate::app::App::handle_scroll`] instead.
pub(crate) fn handle_scroll(state: Arc<RwLock<AppState>>, offset_y: f32, max_offset_y: f32) {
    let mut state = state.write();
    let tab = state.current_tab;
    let last = state.scroll_offsets.get(&tab).copied().unwrap_or(0.0);

    if offset_y <= 0.0 {
        state.scroll_offsets.insert(tab, 0.0);
        state.tab_bar_minimized = false;
        return;
    }

    let delta = offset_y - last;
    if delta < 0.0 && offset_y >= max_offset_y - END_TOLERANCE {
        state.scroll_offsets.insert(tab, offset_y);
        return;
    }
    if delta.abs() < SCROLL_MINIMIZE_THRESHOLD {
        return;
    }

    state.scroll_offsets.insert(tab, offset_y);
    let minimize = delta > 0.0;
    if state.tab_bar_minimized != minimize {
        tracing::trace!(offset_y, minimize, "Tab bar minimization changed");
        state.tab_bar_minimized = minimize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Max offset for a destination much longer than any test scroll
    const LONG: f32 = 10_000.0;

    fn shared() -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(AppState::default()))
    }

    #[test]
    fn test_tab_change_keeps_search_query() {
        let state = shared();
        handle_search_query_change(state.clone(), "chicken rice".to_string());
        handle_tab_change(state.clone(), Tab::Activity);
        handle_tab_change(state.clone(), Tab::Search);

        let state = state.read();
        assert_eq!(state.current_tab, Tab::Search);
        assert_eq!(state.search_query, "chicken rice");
    }

    #[test]
    fn test_next_tab_cycles_forward() {
        let state = shared();
        for expected in [Tab::Discover, Tab::Activity, Tab::Finance, Tab::Search, Tab::Home] {
            next_tab(state.clone());
            assert_eq!(state.read().current_tab, expected);
        }
    }

    #[test]
    fn test_previous_tab_cycles_backward() {
        let state = shared();
        for expected in [Tab::Search, Tab::Finance, Tab::Activity, Tab::Discover, Tab::Home] {
            previous_tab(state.clone());
            assert_eq!(state.read().current_tab, expected);
        }
    }

    #[test]
    fn test_scroll_down_minimizes() {
        let state = shared();
        handle_scroll(state.clone(), 40.0, LONG);
        assert!(state.read().tab_bar_minimized);
    }

    #[test]
    fn test_small_scroll_is_ignored() {
        let state = shared();
        handle_scroll(state.clone(), SCROLL_MINIMIZE_THRESHOLD / 2.0, LONG);
        assert!(!state.read().tab_bar_minimized);
    }

    #[test]
    fn test_small_scrolls_accumulate() {
        let state = shared();
        handle_scroll(state.clone(), 5.0, LONG);
        handle_scroll(state.clone(), 10.0, LONG);
        assert!(state.read().tab_bar_minimized);
    }

    #[test]
    fn test_scroll_up_restores() {
        let state = shared();
        handle_scroll(state.clone(), 200.0, LONG);
        handle_scroll(state.clone(), 150.0, LONG);
        assert!(!state.read().tab_bar_minimized);
    }

    #[test]
    fn test_reaching_top_restores() {
        let state = shared();
        handle_scroll(state.clone(), 200.0, LONG);
        handle_scroll(state.clone(), 0.0, LONG);
        assert!(!state.read().tab_bar_minimized);
    }

    #[test]
    fn test_scroll_offsets_are_per_tab() {
        let state = shared();
        handle_scroll(state.clone(), 300.0, LONG);
        handle_tab_change(state.clone(), Tab::Activity);
        assert!(!state.read().tab_bar_minimized);

        handle_scroll(state.clone(), 20.0, LONG);
        assert!(state.read().tab_bar_minimized);

        handle_tab_change(state.clone(), Tab::Home);
        // Home is still at 300, so coming back does not count as scrolling
        handle_scroll(state.clone(), 300.0, LONG);
        assert!(!state.read().tab_bar_minimized);
    }

    #[test]
    fn test_end_clamp_after_collapse_keeps_bar_minimized() {
        let state = shared();
        // Reach the end of a 500pt scroll range
        handle_scroll(state.clone(), 500.0, 500.0);
        assert!(state.read().tab_bar_minimized);

        // The taller viewport shrinks the range by 20pt and drags the offset along
        handle_scroll(state.clone(), 480.0, 480.0);
        assert!(state.read().tab_bar_minimized);
        assert_eq!(state.read().scroll_offsets[&Tab::Home], 480.0);

        // A real scroll up from the end still restores the bar
        handle_scroll(state.clone(), 440.0, 480.0);
        assert!(!state.read().tab_bar_minimized);
    }
}
