//! # Layout Components
//!
//! Reusable layout patterns shared by the destinations: fixed-column grids,
//! section headings, rounded card frames and horizontal carousels.

use egui::{CornerRadius, Frame, Margin, RichText, Stroke};
use crate::content::Symbol;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::icons::{size, Icons};

/// Number of rows a grid of `count` items needs with `columns` per row
pub fn grid_rows(count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    count.div_ceil(columns)
}

/// Render `items` in a fixed-column grid, row by row
pub fn render_grid<T, F>(
    ui: &mut egui::Ui,
    id: &str,
    items: &[T],
    columns: usize,
    spacing: [f32; 2],
    mut render_item: F,
) where
    F: FnMut(&mut egui::Ui, &T),
{
    if columns == 0 {
        return;
    }
    egui::Grid::new(id)
        .num_columns(columns)
        .spacing(spacing)
        .show(ui, |ui| {
            for row in 0..grid_rows(items.len(), columns) {
                for item in items.iter().skip(row * columns).take(columns) {
                    render_item(ui, item);
                }
                ui.end_row();
            }
        });
}

/// Bold section title with an optional trailing glyph
pub fn render_section_heading(ui: &mut egui::Ui, title: &str, trailing: Option<Symbol>, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).size(20.0).strong());
        if let Some(symbol) = trailing {
            ui.label(Icons::icon_color(symbol, size::MEDIUM, theme.colors.accent));
        }
    });
}

/// Rounded card with a hairline border
pub fn card_frame(theme: &Theme) -> Frame {
    Frame::new()
        .fill(theme.colors.surface)
        .stroke(Stroke::new(1.0, theme.colors.card_border))
        .corner_radius(CornerRadius::same(metrics::CARD_CORNER_RADIUS))
        .inner_margin(Margin::same(12))
}

/// Rounded tile with the light gray fill and no border
pub fn tile_frame(theme: &Theme) -> Frame {
    Frame::new()
        .fill(theme.tile_fill())
        .corner_radius(CornerRadius::same(metrics::CARD_CORNER_RADIUS))
        .inner_margin(Margin::same(12))
}

/// Horizontally scrolling row without a visible scroll bar
pub fn render_carousel<F>(ui: &mut egui::Ui, id: &str, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    egui::ScrollArea::horizontal()
        .id_salt(id)
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;
                content(ui);
            });
        });
}

/// Render vertically centered content
pub fn render_centered<F>(ui: &mut egui::Ui, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 20.0).max(0.0));
        content(ui);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rows() {
        assert_eq!(grid_rows(8, 4), 2);
        assert_eq!(grid_rows(6, 3), 2);
        assert_eq!(grid_rows(7, 3), 3);
        assert_eq!(grid_rows(0, 4), 0);
        assert_eq!(grid_rows(5, 0), 0);
    }
}
