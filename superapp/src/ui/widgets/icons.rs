//! # Icons Helper Module
//!
//! Maps content [`Symbol`]s to glyphs available in egui's bundled emoji and
//! icon fonts, and renders them as [`RichText`].

use egui::{Color32, RichText, Sense, Vec2};
use crate::content::{Shade, Symbol, Tint};
use crate::ui::theme::Theme;

/// Icon size constants
pub mod size {
    pub const SMALL: f32 = 14.0;
    pub const MEDIUM: f32 = 20.0;
    pub const LARGE: f32 = 24.0;
    pub const XLARGE: f32 = 32.0;
}

/// Glyph drawn for a symbol
pub fn glyph(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::House => "🏠",
        Symbol::Compass => "🌐",
        Symbol::ListBullet => "☰",
        Symbol::DollarCircle => "💲",
        Symbol::MagnifyingGlass => "🔍",
        Symbol::Crown => "👑",
        Symbol::ArrowRightCircle => "➡",
        Symbol::ArrowLeft => "⬅",
        Symbol::ArrowUpRight => "↗",
        Symbol::ChevronDown => "⏷",
        Symbol::Barcode => "📷",
        Symbol::Person => "👤",
        Symbol::Mic => "🎤",
        Symbol::Gift => "🎁",
        Symbol::Star => "★",
        Symbol::Car => "🚗",
        Symbol::ForkKnife => "🍴",
        Symbol::Location => "📍",
        Symbol::Clock => "🕓",
        Symbol::PlusCircle => "➕",
        Symbol::GCircle => "Ⓖ",
    }
}

/// Icon helper functions
pub struct Icons;

impl Icons {
    /// Render an icon with default styling
    pub fn icon(symbol: Symbol, size: f32) -> RichText {
        RichText::new(glyph(symbol)).size(size)
    }

    /// Render an icon with custom color
    pub fn icon_color(symbol: Symbol, size: f32, color: Color32) -> RichText {
        Self::icon(symbol, size).color(color)
    }
}

/// Tinted glyph on a faint circle of the same tint
pub fn render_icon_badge(ui: &mut egui::Ui, icon: Symbol, tint: Tint, diameter: f32, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.circle_filled(rect.center(), diameter / 2.0, theme.shade(Shade::faded(tint, 0.1)));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            glyph(icon),
            egui::FontId::proportional(diameter * 0.45),
            theme.tint(tint),
        );
    }
}
