//! Tall card for the "Discover things you'd love" carousel.

use egui::{CornerRadius, Frame, Margin, RichText, Vec2};
use crate::app::{AppLike, AppState};
use crate::content::DiscoverCard;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::remote_image::render_remote_image;
use crate::utils::text::display_lines;

const INNER_MARGIN: i8 = 12;

pub fn render_discover_card(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut impl AppLike,
    card: &DiscoverCard,
    theme: &Theme,
) {
    let text_color = theme.tint(card.text);
    let inner_width = metrics::DISCOVER_CARD_WIDTH - 2.0 * INNER_MARGIN as f32;

    Frame::new()
        .fill(theme.shade(card.background))
        .corner_radius(CornerRadius::same(metrics::CARD_CORNER_RADIUS))
        .inner_margin(Margin::same(INNER_MARGIN))
        .show(ui, |ui| {
            ui.set_width(inner_width);
            ui.set_height(metrics::DISCOVER_CARD_HEIGHT - 2.0 * INNER_MARGIN as f32);

            for line in display_lines(card.title) {
                ui.label(RichText::new(line).size(17.0).strong().color(text_color));
            }
            ui.label(RichText::new(card.subtitle).size(12.0).color(text_color.gamma_multiply(0.8)));
            for line in display_lines(card.description) {
                ui.label(RichText::new(line).size(12.0).color(text_color));
            }

            if let Some(url) = card.image_url {
                ui.add_space(8.0);
                let height = ui.available_height().max(0.0);
                render_remote_image(
                    ui,
                    state,
                    app,
                    url,
                    Vec2::new(inner_width, height),
                    metrics::CARD_CORNER_RADIUS / 2,
                    theme,
                );
            }
        });
}
