//! Service tile in the Home category grid.

use egui::{RichText, Vec2};
use crate::app::{AppLike, AppState};
use crate::content::ServiceCategory;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::remote_image::render_remote_image;

/// Icon above a one-line label, in a fixed-size cell
pub fn render_service_category(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut impl AppLike,
    category: &ServiceCategory,
    theme: &Theme,
) {
    let cell = Vec2::new(metrics::CATEGORY_ITEM_SIZE, metrics::CATEGORY_ITEM_SIZE);
    ui.allocate_ui(cell, |ui| {
        ui.set_min_size(cell);
        ui.vertical_centered(|ui| {
            render_remote_image(
                ui,
                state,
                app,
                category.icon_url,
                Vec2::splat(metrics::CATEGORY_ICON_SIZE),
                (metrics::CATEGORY_ICON_SIZE / 2.0) as u8,
                theme,
            );
            ui.add(egui::Label::new(RichText::new(category.label).size(12.0)).truncate());
        });
    });
}
