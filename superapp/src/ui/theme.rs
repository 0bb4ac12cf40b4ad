//! # GUI Theme
//!
//! Light, rounded super-app theme for egui: white surfaces, green accent,
//! system-style secondary grays.
//!
//! Content values carry renderer-independent [`Tint`]/[`Shade`] tokens; this
//! module is the single place where they become [`Color32`].

use egui::{Color32, Context, CornerRadius, Stroke, Visuals};
use egui::Theme as EguiTheme;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::content::{Shade, Tint};
use crate::core::error::Result;

/// Layout constants shared by screens and widgets.
pub mod metrics {
    /// Toolbar row height on Home
    pub const HEADER_HEIGHT: f32 = 60.0;
    /// Gradient band height at the top of Home
    pub const GRADIENT_HEIGHT: f32 = 120.0;
    pub const CATEGORY_GRID_SPACING: f32 = 16.0;
    pub const CATEGORY_ITEM_SIZE: f32 = 80.0;
    pub const CATEGORY_ICON_SIZE: f32 = 48.0;
    pub const CARD_CORNER_RADIUS: u8 = 12;
    pub const SEARCH_BAR_HEIGHT: f32 = 44.0;
    pub const PROFILE_IMAGE_SIZE: f32 = 40.0;
    pub const SCREEN_PADDING: f32 = 16.0;

    pub const AD_BANNER_WIDTH: f32 = 360.0;
    pub const AD_BANNER_HEIGHT: f32 = 160.0;
    pub const AD_BANNER_CORNER_RADIUS: u8 = 16;

    pub const DISCOVER_CARD_WIDTH: f32 = 200.0;
    pub const DISCOVER_CARD_HEIGHT: f32 = 350.0;

    pub const RECOMMENDED_CARD_WIDTH: f32 = 150.0;
    pub const RECOMMENDED_IMAGE_HEIGHT: f32 = 100.0;
    pub const RECOMMENDED_CORNER_RADIUS: u8 = 8;

    pub const TRANSACTION_ICON_SIZE: f32 = 48.0;
    pub const LOCATION_ICON_SIZE: f32 = 40.0;
    pub const FILTER_TAB_CORNER_RADIUS: u8 = 20;

    pub const ACCESSORY_ARTWORK_SIZE: f32 = 44.0;
    pub const MIC_BUTTON_SIZE: f32 = 56.0;
    pub const TAB_BAR_HEIGHT: f32 = 56.0;
    pub const TAB_BAR_MINIMIZED_HEIGHT: f32 = 36.0;
}

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Brand green (selected tab, links, "Recently used")
    pub accent: [u8; 3],
    /// Secondary accent, gradient end and mic button
    pub blue: [u8; 3],
    pub yellow: [u8; 3],
    pub orange: [u8; 3],
    /// Cancellations
    pub red: [u8; 3],
    /// Primary text
    pub ink: [u8; 3],
    /// Secondary text and inactive glyphs
    pub secondary: [u8; 3],
    /// Window and card background
    pub surface: [u8; 3],
    /// Hairline card borders
    pub card_border: [u8; 3],
    /// Image placeholder fill
    pub placeholder: [u8; 3],
    /// Hyperlink-style labels
    pub link: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            accent: [0, 177, 79],
            blue: [0, 122, 255],
            yellow: [255, 204, 0],
            orange: [255, 149, 0],
            red: [255, 59, 48],
            ink: [0, 0, 0],
            secondary: [142, 142, 147],
            surface: [255, 255, 255],
            card_border: [229, 229, 234],
            placeholder: [229, 229, 234],
            link: [0, 122, 255],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save theme configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Convert the config into a resolved palette
    pub fn to_palette(&self) -> Palette {
        Palette {
            accent: rgb(self.accent),
            blue: rgb(self.blue),
            yellow: rgb(self.yellow),
            orange: rgb(self.orange),
            red: rgb(self.red),
            ink: rgb(self.ink),
            secondary: rgb(self.secondary),
            surface: rgb(self.surface),
            card_border: rgb(self.card_border),
            placeholder: rgb(self.placeholder),
            link: rgb(self.link),
        }
    }
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Resolved color palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub accent: Color32,
    pub blue: Color32,
    pub yellow: Color32,
    pub orange: Color32,
    pub red: Color32,
    pub ink: Color32,
    pub secondary: Color32,
    pub surface: Color32,
    pub card_border: Color32,
    pub placeholder: Color32,
    pub link: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        ThemeConfig::default().to_palette()
    }
}

/// Application theme
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Theme {
            colors: config.to_palette(),
        }
    }

    /// Resolve a content color token
    pub fn tint(&self, tint: Tint) -> Color32 {
        let c = &self.colors;
        match tint {
            Tint::Green => c.accent,
            Tint::Blue => c.blue,
            Tint::Yellow => c.yellow,
            Tint::Orange => c.orange,
            Tint::Red => c.red,
            Tint::Black => c.ink,
            Tint::Gray => c.secondary,
            Tint::White => c.surface,
        }
    }

    /// Resolve a translucent content color token
    pub fn shade(&self, shade: Shade) -> Color32 {
        self.tint(shade.tint).gamma_multiply(shade.opacity.clamp(0.0, 1.0))
    }

    /// Card background used by the small rounded tiles (gray at 10%)
    pub fn tile_fill(&self) -> Color32 {
        self.shade(Shade::faded(Tint::Gray, 0.1))
    }

    /// Build light egui visuals from a theme config
    pub fn visuals_from_config(config: &ThemeConfig) -> Visuals {
        let colors = config.to_palette();
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.ink);

        visuals.panel_fill = colors.surface;
        visuals.window_fill = colors.surface;
        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.card_border);

        let rounding = CornerRadius::same(metrics::CARD_CORNER_RADIUS);
        visuals.window_corner_radius = rounding;
        visuals.menu_corner_radius = rounding;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.card_border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.ink);

        visuals.widgets.inactive.weak_bg_fill = colors.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.card_border);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.accent);

        visuals.selection.bg_fill = colors.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, colors.accent);

        visuals.hyperlink_color = colors.link;

        visuals
    }

    /// Apply the theme to both egui light and dark styles
    pub fn apply_custom_theme(ctx: &Context, config: &ThemeConfig) {
        let visuals = Self::visuals_from_config(config);

        for theme in [EguiTheme::Light, EguiTheme::Dark] {
            let visuals = visuals.clone();
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
            });
        }
        ctx.set_theme(EguiTheme::Light);

        tracing::debug!("Applied super-app theme visuals");
    }
}
