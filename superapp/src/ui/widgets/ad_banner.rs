//! Promotional banner for the "Shop now" carousel.

use egui::{RichText, Vec2};
use crate::app::{AppLike, AppState};
use crate::content::AdBanner;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::remote_image::render_remote_image;

pub fn render_ad_banner(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut impl AppLike,
    banner: &AdBanner,
    theme: &Theme,
) {
    ui.vertical(|ui| {
        ui.set_width(metrics::AD_BANNER_WIDTH);
        render_remote_image(
            ui,
            state,
            app,
            banner.image_url,
            Vec2::new(metrics::AD_BANNER_WIDTH, metrics::AD_BANNER_HEIGHT),
            metrics::AD_BANNER_CORNER_RADIUS,
            theme,
        );
        ui.add(egui::Label::new(RichText::new(banner.title).size(15.0).strong()).truncate());
        ui.label(RichText::new(banner.subtitle).size(12.0).color(theme.colors.secondary));
    });
}
