//! # Remote Image
//!
//! Draws a remote image from the shared cache, or a placeholder of the same
//! size while it is missing. The first frame that sees an unknown URL asks
//! the app to fetch it. Bytes that the image loaders cannot decode keep the
//! flat placeholder, the same as a failed fetch.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use egui::load::TexturePoll;
use egui::{Rect, Sense, Vec2};
use crate::app::{AppLike, AppState, ImageState};
use crate::ui::theme::Theme;

/// What the widget draws for a cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDisplay {
    /// Not loaded yet: gray fill with a spinner
    Loading,
    /// Bytes are available
    Image,
    /// Fetch failed: plain gray fill, indefinitely
    Placeholder,
}

impl ImageDisplay {
    pub fn for_state(state: Option<&ImageState>) -> Self {
        match state {
            None | Some(ImageState::Pending) => ImageDisplay::Loading,
            Some(ImageState::Ready(_)) => ImageDisplay::Image,
            Some(ImageState::Failed(_)) => ImageDisplay::Placeholder,
        }
    }
}

/// egui texture URI for a remote URL.
///
/// The signed CDN URLs carry query strings that defeat extension sniffing,
/// so the bytes are registered under an extension-less key and the decoder
/// detects the format from the content.
pub fn image_uri(url: &str) -> String {
    let mut hasher = DefaultHasher::new();
    url.hash(&mut hasher);
    format!("bytes://remote/{:016x}", hasher.finish())
}

/// Render `url` at `size` with rounded corners
pub fn render_remote_image(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut impl AppLike,
    url: &str,
    size: Vec2,
    corner_radius: u8,
    theme: &Theme,
) -> egui::Response {
    let entry = state.image(url);
    if entry.is_none() {
        app.request_image(url);
    }

    match (ImageDisplay::for_state(entry), entry) {
        (ImageDisplay::Image, Some(ImageState::Ready(bytes))) => {
            let image = egui::Image::from_bytes(image_uri(url), bytes.clone())
                .fit_to_exact_size(size)
                .maintain_aspect_ratio(false)
                .corner_radius(corner_radius);
            // Downloaded is not decoded: only hand finished textures to egui
            match image.load_for_size(ui.ctx(), size) {
                Ok(TexturePoll::Ready { .. }) => ui.add(image),
                Ok(TexturePoll::Pending { .. }) => render_placeholder(ui, size, corner_radius, true, theme),
                Err(_) => render_placeholder(ui, size, corner_radius, false, theme),
            }
        }
        (display, _) => render_placeholder(ui, size, corner_radius, display == ImageDisplay::Loading, theme),
    }
}

fn render_placeholder(
    ui: &mut egui::Ui,
    size: Vec2,
    corner_radius: u8,
    spinning: bool,
    theme: &Theme,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, corner_radius, theme.colors.placeholder);
        if spinning {
            let spinner_size = size.min_elem().min(24.0);
            let spinner_rect = Rect::from_center_size(rect.center(), Vec2::splat(spinner_size));
            egui::Spinner::new()
                .color(theme.colors.secondary)
                .paint_at(ui, spinner_rect);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_display_for_each_state() {
        assert_eq!(ImageDisplay::for_state(None), ImageDisplay::Loading);
        assert_eq!(ImageDisplay::for_state(Some(&ImageState::Pending)), ImageDisplay::Loading);
        assert_eq!(
            ImageDisplay::for_state(Some(&ImageState::Ready(Arc::from(vec![1u8])))),
            ImageDisplay::Image
        );
        assert_eq!(
            ImageDisplay::for_state(Some(&ImageState::Failed("x".into()))),
            ImageDisplay::Placeholder
        );
    }

    #[test]
    fn test_image_uri_is_stable_and_extensionless() {
        let url = "https://cdn.example/a.webp?Expires=1&Signature=abc";
        assert_eq!(image_uri(url), image_uri(url));
        assert!(image_uri(url).starts_with("bytes://remote/"));
        assert!(!image_uri(url).contains('.'));
        assert_ne!(image_uri(url), image_uri("https://cdn.example/b.webp"));
    }
}
