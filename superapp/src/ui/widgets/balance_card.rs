//! Balance / rewards summary card.

use egui::RichText;
use crate::content::BalanceCard;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{size, Icons};
use crate::ui::widgets::layouts::card_frame;

pub fn render_balance_card(ui: &mut egui::Ui, card: &BalanceCard, theme: &Theme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(Icons::icon_color(card.icon, size::LARGE, theme.tint(card.tint)));
            ui.vertical(|ui| {
                ui.label(RichText::new(card.title).size(12.0).color(theme.colors.secondary));
                ui.label(RichText::new(card.amount).size(16.0).strong());
            });
        });
    });
}
