//! Place card in the "Recommended" carousel.

use egui::text::{LayoutJob, TextFormat, TextWrapping};
use egui::{FontId, RichText, Vec2};
use crate::app::{AppLike, AppState};
use crate::content::RecommendedPlace;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::icons::glyph;

pub const AD_TAG: &str = "Ad";
const SEPARATOR: &str = "•";
const TITLE_MAX_ROWS: usize = 2;

/// Pieces of the meta line, in display order.
///
/// `Ad • 1.4km • ★ 4.1` for ads, `1.4km • ★ 4.8` otherwise.
pub fn meta_segments(place: &RecommendedPlace) -> Vec<String> {
    let mut segments = Vec::with_capacity(5);
    if place.is_ad {
        segments.push(AD_TAG.to_string());
        segments.push(SEPARATOR.to_string());
    }
    segments.push(place.distance.to_string());
    segments.push(SEPARATOR.to_string());
    segments.push(format!("{} {}", glyph(crate::content::Symbol::Star), place.rating));
    segments
}

pub fn meta_line(place: &RecommendedPlace) -> String {
    meta_segments(place).join(" ")
}

fn title_job(title: &str, width: f32, theme: &Theme) -> LayoutJob {
    let mut job = LayoutJob::single_section(
        title.to_owned(),
        TextFormat {
            font_id: FontId::proportional(13.0),
            color: theme.colors.ink,
            ..Default::default()
        },
    );
    job.wrap = TextWrapping {
        max_width: width,
        max_rows: TITLE_MAX_ROWS,
        break_anywhere: false,
        overflow_character: Some('…'),
    };
    job
}

pub fn render_recommended_card(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut impl AppLike,
    place: &RecommendedPlace,
    theme: &Theme,
) {
    let width = metrics::RECOMMENDED_CARD_WIDTH;
    ui.vertical(|ui| {
        ui.set_width(width);
        crate::ui::widgets::remote_image::render_remote_image(
            ui,
            state,
            app,
            place.image_url,
            Vec2::new(width, metrics::RECOMMENDED_IMAGE_HEIGHT),
            metrics::RECOMMENDED_CORNER_RADIUS,
            theme,
        );
        ui.label(title_job(place.title, width, theme));
        ui.label(RichText::new(meta_line(place)).size(11.0).color(theme.colors.secondary));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::search::recommended_places;

    #[test]
    fn test_ad_card_has_ad_prefix() {
        let places = recommended_places();
        let ad = places.iter().find(|p| p.is_ad).unwrap();
        assert_eq!(meta_line(ad), "Ad • 1.4km • ★ 4.1");
    }

    #[test]
    fn test_non_ad_card_omits_prefix() {
        let places = recommended_places();
        let plain = &places[0];
        assert!(!plain.is_ad);
        assert_eq!(meta_segments(plain)[0], "1.0km");
        assert_eq!(meta_line(plain), "1.0km • ★ 4.7");
    }
}
