//! # Search Screen
//!
//! Location header, the search field, filter chips and the ride, recent and
//! recommended sections. The query is stored but does not filter anything.

use egui::{Frame, Margin, RichText, TextEdit};
use crate::app::{AppLike, AppState};
use crate::content::{search, Symbol};
use crate::ui::screens::report_scroll;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::filter_tab::render_filter_tab;
use crate::ui::widgets::icons::{size, Icons};
use crate::ui::widgets::layouts::{render_carousel, render_grid, render_section_heading};
use crate::ui::widgets::location_item::render_location_item;
use crate::ui::widgets::recent_chip::render_recent_chip;
use crate::ui::widgets::recommended_card::render_recommended_card;

pub const SEARCH_HINT: &str = "Search";

/// Stable id of the query field, so keyboard shortcuts can yield to it
pub fn search_field_id() -> egui::Id {
    egui::Id::new("search_field")
}

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::from_config(&state.settings.theme_config);
    let padding = metrics::SCREEN_PADDING as i8;

    Frame::new()
        .inner_margin(Margin { left: padding, right: padding, top: padding, bottom: 0 })
        .show(ui, |ui| {
            render_location_header(ui, &theme);
            ui.add_space(8.0);

            let mut query = state.search_query.clone();
            let response = ui.add_sized(
                [ui.available_width(), metrics::SEARCH_BAR_HEIGHT],
                TextEdit::singleline(&mut query)
                    .id(search_field_id())
                    .hint_text(format!("{} {}", crate::ui::widgets::icons::glyph(Symbol::MagnifyingGlass), SEARCH_HINT))
                    .vertical_align(egui::Align::Center),
            );
            if response.changed() {
                app.handle_search_query_change(query);
            }
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                for tab in search::filter_tabs() {
                    // Selection is fixed; chips are not wired to a handler
                    render_filter_tab(ui, &tab, &theme);
                }
            });
        });

    let output = egui::ScrollArea::vertical()
        .id_salt(("destination", state.current_tab))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            Frame::new()
                .inner_margin(Margin::same(padding))
                .show(ui, |ui| {
                    render_section_heading(ui, "Book a ride", None, &theme);
                    for location in search::saved_locations() {
                        render_location_item(ui, &location, &theme);
                        ui.add_space(6.0);
                    }
                    ui.add_space(12.0);

                    render_section_heading(ui, "Recent & popular", None, &theme);
                    let columns = search::CHIP_COLUMNS;
                    let chip_width = ((ui.available_width() - 8.0 * (columns as f32 - 1.0)) / columns as f32 - 20.0)
                        .max(40.0);
                    render_grid(
                        ui,
                        "recent_and_popular",
                        &search::recent_and_popular(),
                        columns,
                        [8.0, 8.0],
                        |ui, chip| render_recent_chip(ui, chip, chip_width, &theme),
                    );
                    ui.add_space(12.0);

                    render_section_heading(ui, "Recommended", None, &theme);
                    render_carousel(ui, "recommended", |ui| {
                        for place in search::recommended_places() {
                            render_recommended_card(ui, state, app, &place, &theme);
                        }
                    });
                });
        });

    report_scroll(app, &output);
}

/// Back arrow, "Your location" caption and the current place with a chevron
fn render_location_header(ui: &mut egui::Ui, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(Icons::icon_color(Symbol::ArrowLeft, size::LARGE, theme.colors.ink));
        ui.vertical(|ui| {
            ui.label(RichText::new("Your location").size(12.0).color(theme.colors.secondary));
            ui.horizontal(|ui| {
                ui.label(RichText::new("Lobby").strong());
                ui.label(Icons::icon_color(Symbol::ChevronDown, size::SMALL, theme.colors.ink));
            });
        });
    });
}
