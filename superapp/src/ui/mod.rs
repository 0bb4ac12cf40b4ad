//! # GUI Rendering Framework
//!
//! Orchestrates a frame: bottom tab bar, the trip accessory above it, and
//! the selected destination in the central panel.

pub mod screens;
pub mod theme;
pub mod widgets;

use egui::{Frame, Margin};
use crate::app::{AccessoryPlacement, AppLike, Tab};
use crate::content::trip;
use crate::ui::theme::{metrics, Theme};

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut impl AppLike) {
    // Read state for rendering
    let state = match app.state().try_read() {
        Some(state_guard) => state_guard.clone(),
        None => {
            // Lock is held by another task, skip this frame
            return;
        }
    }; // Lock released here - rendering happens without holding lock

    let theme = Theme::from_config(&state.settings.theme_config);

    // Tab / Shift+Tab cycle destinations unless the search field has focus
    if !ctx.memory(|m| m.has_focus(screens::search::search_field_id())) {
        let (next, previous) = ctx.input(|i| {
            let tab = i.key_pressed(egui::Key::Tab);
            (tab && !i.modifiers.shift, tab && i.modifiers.shift)
        });
        if next {
            app.next_tab();
        } else if previous {
            app.previous_tab();
        }
    }

    let placement = AccessoryPlacement::resolve(state.tab_bar_minimized, ctx.available_rect().width());
    let surface = Frame::new().fill(theme.colors.surface);

    let tab_bar_height = if state.tab_bar_minimized {
        metrics::TAB_BAR_MINIMIZED_HEIGHT
    } else {
        metrics::TAB_BAR_HEIGHT
    };
    egui::TopBottomPanel::bottom("tab_bar")
        .exact_height(tab_bar_height)
        .frame(surface.inner_margin(Margin::symmetric(8, 4)))
        .show(ctx, |ui| {
            widgets::tab_bar::render_tab_bar(ui, &state, app, &theme);
        });

    egui::TopBottomPanel::bottom("accessory")
        .show_separator_line(false)
        .frame(surface.inner_margin(Margin::symmetric(12, 6)))
        .show(ctx, |ui| {
            widgets::accessory_bar::render_accessory_bar(
                ui,
                &state,
                app,
                &trip::current_trip(),
                placement,
                &theme,
            );
        });

    egui::CentralPanel::default().frame(surface).show(ctx, |ui| match state.current_tab {
        Tab::Home | Tab::Finance => screens::home::render(ui, &state, app),
        Tab::Discover => screens::discover::render(ui, &state),
        Tab::Activity => screens::activity::render(ui, &state, app),
        Tab::Search => screens::search::render(ui, &state, app),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppState, ImageState};
    use crate::content::home;
    use egui::epaint::ClippedShape;
    use parking_lot::RwLock;
    use std::sync::Arc;

    /// Records user actions and marks requested images pending, like `App` does
    struct RecordingApp {
        state: Arc<RwLock<AppState>>,
        requested: Vec<String>,
        scrolls: usize,
    }

    impl RecordingApp {
        fn on(tab: Tab) -> Self {
            let state = AppState { current_tab: tab, ..AppState::default() };
            Self { state: Arc::new(RwLock::new(state)), requested: Vec::new(), scrolls: 0 }
        }
    }

    impl AppLike for RecordingApp {
        fn state(&self) -> &Arc<RwLock<AppState>> {
            &self.state
        }

        fn handle_tab_change(&mut self, tab: Tab) {
            self.state.write().current_tab = tab;
        }

        fn next_tab(&mut self) {
            let mut state = self.state.write();
            state.current_tab = state.current_tab.next();
        }

        fn previous_tab(&mut self) {
            let mut state = self.state.write();
            state.current_tab = state.current_tab.previous();
        }

        fn handle_search_query_change(&mut self, text: String) {
            self.state.write().search_query = text;
        }

        fn handle_scroll(&mut self, _offset_y: f32, _max_offset_y: f32) {
            self.scrolls += 1;
        }

        fn request_image(&mut self, url: &str) {
            self.requested.push(url.to_string());
            self.state.write().images.insert(url.to_string(), ImageState::Pending);
        }
    }

    fn run_frame(ctx: &egui::Context, app: &mut RecordingApp, input: egui::RawInput) -> egui::FullOutput {
        ctx.run(input, |ctx| render(ctx, &mut *app))
    }

    fn screen_input() -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(430.0, 900.0))),
            ..Default::default()
        }
    }

    fn collect_text(shape: &egui::Shape, out: &mut Vec<(String, egui::Pos2)>) {
        match shape {
            egui::Shape::Text(text) => out.push((text.galley.text().to_string(), text.pos)),
            egui::Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_text(s, out)),
            _ => {}
        }
    }

    /// Every piece of text painted in a frame, with its position
    fn painted_text(output: &egui::FullOutput) -> Vec<(String, egui::Pos2)> {
        let mut out = Vec::new();
        for ClippedShape { shape, .. } in &output.shapes {
            collect_text(shape, &mut out);
        }
        out
    }

    fn paints(output: &egui::FullOutput, text: &str) -> bool {
        painted_text(output).iter().any(|(t, _)| t == text)
    }

    #[test]
    fn test_every_destination_renders_headlessly() {
        for tab in Tab::all() {
            let ctx = egui::Context::default();
            let mut app = RecordingApp::on(*tab);
            run_frame(&ctx, &mut app, screen_input());
            run_frame(&ctx, &mut app, screen_input());
            assert_eq!(app.state.read().current_tab, *tab);
        }
    }

    #[test]
    fn test_images_are_only_requested_on_first_sight() {
        let ctx = egui::Context::default();
        let mut app = RecordingApp::on(Tab::Home);
        run_frame(&ctx, &mut app, screen_input());
        let first_frame = app.requested.len();
        assert!(first_frame > 0);
        assert!(app.requested.contains(&trip::current_trip().artwork_url.to_string()));

        run_frame(&ctx, &mut app, screen_input());
        run_frame(&ctx, &mut app, screen_input());
        assert_eq!(app.requested.len(), first_frame);
    }

    #[test]
    fn test_scrollable_destinations_report_offset() {
        let ctx = egui::Context::default();
        let mut app = RecordingApp::on(Tab::Activity);
        run_frame(&ctx, &mut app, screen_input());
        assert!(app.scrolls > 0);
    }

    #[test]
    fn test_failed_images_render_without_refetch() {
        let ctx = egui::Context::default();
        let mut app = RecordingApp::on(Tab::Search);
        let url = crate::content::search::recommended_places()[0].image_url;
        app.state.write().images.insert(url.to_string(), ImageState::Failed("404".into()));

        run_frame(&ctx, &mut app, screen_input());
        assert!(!app.requested.iter().any(|u| u == url));
    }

    #[test]
    fn test_undecodable_image_keeps_placeholder() {
        let ctx = egui::Context::default();
        egui_extras::install_image_loaders(&ctx);
        let mut app = RecordingApp::on(Tab::Discover);
        let url = trip::current_trip().artwork_url;
        let html: Arc<[u8]> = Arc::from(&b"<html>not an image</html>"[..]);
        app.state.write().images.insert(url.to_string(), ImageState::Ready(html));

        // The loaders may decode off-thread; give them time to report the error
        for _ in 0..30 {
            let output = run_frame(&ctx, &mut app, screen_input());
            assert!(!painted_text(&output).iter().any(|(t, _)| t.contains('⚠')));
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(!app.requested.iter().any(|u| u == url));
    }

    #[test]
    fn test_home_grid_paints_eight_categories_in_four_columns() {
        let ctx = egui::Context::default();
        let mut app = RecordingApp::on(Tab::Home);
        run_frame(&ctx, &mut app, screen_input());
        let output = run_frame(&ctx, &mut app, screen_input());
        let text = painted_text(&output);

        let mut rows: Vec<i32> = Vec::new();
        for category in home::service_categories() {
            let hits: Vec<_> = text.iter().filter(|(t, _)| t == category.label).collect();
            assert_eq!(hits.len(), 1, "{} painted once", category.label);
            rows.push(hits[0].1.y.round() as i32);
        }

        let mut distinct = rows.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 2);
        for row in distinct {
            assert_eq!(rows.iter().filter(|y| **y == row).count(), home::CATEGORY_COLUMNS);
        }
    }

    #[test]
    fn test_accessory_eta_follows_placement() {
        let trip = trip::current_trip();

        let ctx = egui::Context::default();
        let mut app = RecordingApp::on(Tab::Discover);
        let output = run_frame(&ctx, &mut app, screen_input());
        assert!(paints(&output, trip.headline));
        assert!(paints(&output, trip.arrival_time));
        assert!(paints(&output, trip.time_left));

        // A minimized tab bar puts the accessory in its compact placement
        let ctx = egui::Context::default();
        let mut app = RecordingApp::on(Tab::Discover);
        app.state.write().tab_bar_minimized = true;
        let output = run_frame(&ctx, &mut app, screen_input());
        assert!(paints(&output, trip.headline));
        assert!(!paints(&output, trip.arrival_time));
        assert!(!paints(&output, trip.time_left));
    }

    #[test]
    fn test_tab_change_swaps_painted_destination() {
        let ctx = egui::Context::default();
        let mut app = RecordingApp::on(Tab::Home);
        let output = run_frame(&ctx, &mut app, screen_input());
        assert!(paints(&output, "Shop now"));
        assert!(!paints(&output, "Recent"));

        app.handle_tab_change(Tab::Activity);
        let output = run_frame(&ctx, &mut app, screen_input());
        assert!(paints(&output, "Recent"));
        assert!(!paints(&output, "Shop now"));

        app.handle_tab_change(Tab::Search);
        let output = run_frame(&ctx, &mut app, screen_input());
        assert!(paints(&output, "Book a ride"));
        assert!(!paints(&output, "Recent"));
    }

    #[test]
    fn test_tab_key_cycles_destinations() {
        let ctx = egui::Context::default();
        let mut app = RecordingApp::on(Tab::Home);

        let mut input = screen_input();
        input.events.push(egui::Event::Key {
            key: egui::Key::Tab,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        });
        run_frame(&ctx, &mut app, input);
        assert_eq!(app.state.read().current_tab, Tab::Discover);

        let mut input = screen_input();
        input.modifiers = egui::Modifiers::SHIFT;
        input.events.push(egui::Event::Key {
            key: egui::Key::Tab,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::SHIFT,
        });
        run_frame(&ctx, &mut app, input);
        assert_eq!(app.state.read().current_tab, Tab::Home);
    }
}
