//! # Activity Screen
//!
//! Rewards points card followed by the recent transaction list.

use egui::{Frame, Margin, RichText};
use crate::app::{AppLike, AppState};
use crate::content::{activity, PointsSummary, Symbol};
use crate::ui::screens::report_scroll;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::icons::{size, Icons};
use crate::ui::widgets::layouts::{card_frame, render_section_heading};
use crate::ui::widgets::transaction_row::render_transaction_row;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::from_config(&state.settings.theme_config);

    let output = egui::ScrollArea::vertical()
        .id_salt(("destination", state.current_tab))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            Frame::new()
                .inner_margin(Margin::same(metrics::SCREEN_PADDING as i8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Activity").size(28.0).strong());
                        ui.label(Icons::icon_color(Symbol::ListBullet, size::LARGE, theme.colors.ink));
                    });
                    ui.add_space(12.0);

                    render_points_card(ui, &activity::points_summary(), &theme);
                    ui.add_space(16.0);

                    render_section_heading(ui, "Recent", None, &theme);
                    ui.add_space(8.0);

                    let items = activity::transactions();
                    for (index, item) in items.iter().enumerate() {
                        render_transaction_row(ui, item, &theme);
                        if index + 1 < items.len() {
                            ui.separator();
                        }
                    }
                });
        });

    report_scroll(app, &output);
}

fn render_points_card(ui: &mut egui::Ui, summary: &PointsSummary, theme: &Theme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(Icons::icon_color(Symbol::Gift, size::XLARGE, theme.colors.accent));
            ui.vertical(|ui| {
                ui.label(RichText::new(summary.headline).strong());
                ui.label(RichText::new(summary.body).size(12.0).color(theme.colors.secondary));
                ui.add_space(4.0);
                ui.label(RichText::new(summary.call_to_action).color(theme.colors.accent).strong());
            });
        });
    });
}
