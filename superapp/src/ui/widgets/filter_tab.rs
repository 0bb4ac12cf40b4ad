//! Capsule-shaped filter chip above the search results.

use egui::{Color32, CornerRadius, RichText};
use crate::content::FilterTab;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::icons::glyph;

/// Fill and text color of a chip
pub fn filter_tab_colors(tab: &FilterTab, theme: &Theme) -> (Color32, Color32) {
    if tab.selected {
        (theme.colors.accent, Color32::WHITE)
    } else {
        (theme.tile_fill(), theme.colors.secondary)
    }
}

/// Chip caption with its optional leading glyph
pub fn filter_tab_label(tab: &FilterTab) -> String {
    match tab.icon {
        Some(symbol) => format!("{} {}", glyph(symbol), tab.title),
        None => tab.title.to_string(),
    }
}

pub fn render_filter_tab(ui: &mut egui::Ui, tab: &FilterTab, theme: &Theme) -> egui::Response {
    let (fill, text) = filter_tab_colors(tab, theme);
    ui.add(
        egui::Button::new(RichText::new(filter_tab_label(tab)).color(text))
            .fill(fill)
            .stroke(egui::Stroke::NONE)
            .corner_radius(CornerRadius::same(metrics::FILTER_TAB_CORNER_RADIUS)),
    )
}
