//! Saved place row in "Book a ride".

use egui::RichText;
use crate::content::{LocationItem, Symbol};
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::icons::{render_icon_badge, size, Icons};

pub const RECENTLY_USED_LABEL: &str = "Recently used";

pub fn render_location_item(ui: &mut egui::Ui, item: &LocationItem, theme: &Theme) {
    ui.horizontal(|ui| {
        render_icon_badge(ui, item.icon, item.tint, metrics::LOCATION_ICON_SIZE, theme);
        ui.vertical(|ui| {
            ui.add(egui::Label::new(RichText::new(item.title).strong()).truncate());
            ui.add(
                egui::Label::new(RichText::new(item.subtitle).size(12.0).color(theme.colors.secondary))
                    .truncate(),
            );
            if item.recently_used {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.label(Icons::icon_color(Symbol::Star, size::SMALL, theme.colors.accent));
                    ui.label(RichText::new(RECENTLY_USED_LABEL).size(12.0).color(theme.colors.accent));
                });
            }
        });
    });
}
