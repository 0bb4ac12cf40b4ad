//! Challenge teaser card.

use egui::{Align, Layout, RichText};
use crate::content::ChallengeCard;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{size, Icons};
use crate::ui::widgets::layouts::card_frame;

pub fn render_challenge_card(ui: &mut egui::Ui, card: &ChallengeCard, theme: &Theme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.label(Icons::icon_color(card.badge, size::XLARGE, theme.colors.accent));
                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    ui.label(RichText::new(card.title).size(15.0).strong());
                    ui.label(RichText::new(card.deadline).size(12.0).color(theme.colors.secondary));
                    ui.add_space(6.0);
                    ui.label(RichText::new(card.call_to_action).color(theme.colors.accent).strong());
                });
            });
        });
    });
}
