//! Query chip in "Recent & popular".

use egui::{Margin, RichText};
use crate::content::RecentChip;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{size, Icons};
use crate::ui::widgets::layouts::tile_frame;

pub fn render_recent_chip(ui: &mut egui::Ui, chip: &RecentChip, width: f32, theme: &Theme) {
    tile_frame(theme)
        .inner_margin(Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.horizontal(|ui| {
                ui.label(Icons::icon_color(chip.icon, size::SMALL, theme.tint(chip.tint)));
                ui.add(egui::Label::new(RichText::new(chip.label).size(13.0)).truncate());
            });
        });
}
