//! # Home Screen
//!
//! Gradient header with toolbar glyphs, service grid, balances, the "Shop
//! now" carousel, the challenge card and the discover carousel, plus a
//! floating microphone button. Also used for the Finance tab.

use egui::{pos2, vec2, Align, Frame, Layout, Margin, Mesh, Order, Rect, RichText, Sense, Shape, UiBuilder};
use crate::app::{AppLike, AppState};
use crate::content::{home, Symbol, Tint};
use crate::ui::screens::report_scroll;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::ad_banner::render_ad_banner;
use crate::ui::widgets::balance_card::render_balance_card;
use crate::ui::widgets::challenge_card::render_challenge_card;
use crate::ui::widgets::discover_card::render_discover_card;
use crate::ui::widgets::icons::{glyph, render_icon_badge, size, Icons};
use crate::ui::widgets::layouts::{render_carousel, render_grid, render_section_heading};
use crate::ui::widgets::service_category::render_service_category;

pub const DISCOVER_SUBTITLE: &str = "Ad • Swipe to be inspired";

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::from_config(&state.settings.theme_config);
    let panel_rect = ui.max_rect();

    let output = egui::ScrollArea::vertical()
        .id_salt(("destination", state.current_tab))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_header(ui, &theme);

            Frame::new()
                .inner_margin(Margin::symmetric(metrics::SCREEN_PADDING as i8, 0))
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 12.0;

                    render_grid(
                        ui,
                        "service_categories",
                        &home::service_categories(),
                        home::CATEGORY_COLUMNS,
                        [metrics::CATEGORY_GRID_SPACING, metrics::CATEGORY_GRID_SPACING],
                        |ui, category| render_service_category(ui, state, app, category, &theme),
                    );

                    let cards = home::balance_cards();
                    ui.columns(cards.len(), |columns| {
                        for (column, card) in columns.iter_mut().zip(&cards) {
                            render_balance_card(column, card, &theme);
                        }
                    });

                    render_section_heading(ui, "Shop now", Some(Symbol::ArrowRightCircle), &theme);
                    render_carousel(ui, "ad_banners", |ui| {
                        for banner in home::ad_banners() {
                            render_ad_banner(ui, state, app, &banner, &theme);
                        }
                    });

                    render_section_heading(ui, "Get rewarded with Challenges", None, &theme);
                    render_challenge_card(ui, &home::challenge(), &theme);

                    render_section_heading(ui, "Discover things you'd love", None, &theme);
                    ui.label(RichText::new(DISCOVER_SUBTITLE).size(12.0).color(theme.colors.secondary));
                    render_carousel(ui, "discover_cards", |ui| {
                        for card in home::discover_cards() {
                            render_discover_card(ui, state, app, &card, &theme);
                        }
                    });

                    // Room for the floating mic button
                    ui.add_space(metrics::MIC_BUTTON_SIZE + metrics::SCREEN_PADDING);
                });
        });

    report_scroll(app, &output);

    render_mic_button(ui, panel_rect, &theme);
}

/// Green-to-blue band with the barcode and profile glyphs in its top row
fn render_header(ui: &mut egui::Ui, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(
        vec2(ui.available_width(), metrics::GRADIENT_HEIGHT),
        Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        ui.painter().add(horizontal_gradient(rect, theme.tint(Tint::Green), theme.tint(Tint::Blue)));
    }

    let toolbar = Rect::from_min_size(rect.min, vec2(rect.width(), metrics::HEADER_HEIGHT))
        .shrink2(vec2(metrics::SCREEN_PADDING, 0.0));
    let mut toolbar_ui = ui.new_child(
        UiBuilder::new()
            .max_rect(toolbar)
            .layout(Layout::right_to_left(Align::Center)),
    );
    render_icon_badge(&mut toolbar_ui, Symbol::Person, Tint::White, metrics::PROFILE_IMAGE_SIZE, theme);
    toolbar_ui.label(Icons::icon_color(Symbol::Barcode, size::LARGE, theme.tint(Tint::White)));
}

fn horizontal_gradient(rect: Rect, left: egui::Color32, right: egui::Color32) -> Shape {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    Shape::mesh(mesh)
}

/// Blue circular mic button pinned to the bottom-left of the destination
fn render_mic_button(ui: &mut egui::Ui, panel_rect: Rect, theme: &Theme) {
    let diameter = metrics::MIC_BUTTON_SIZE;
    let position = pos2(
        panel_rect.left() + metrics::SCREEN_PADDING,
        panel_rect.bottom() - metrics::SCREEN_PADDING - diameter,
    );

    egui::Area::new(egui::Id::new("home_mic_button"))
        .order(Order::Foreground)
        .fixed_pos(position)
        .show(ui.ctx(), |ui| {
            let (rect, response) = ui.allocate_exact_size(vec2(diameter, diameter), Sense::click());
            let painter = ui.painter();
            painter.circle_filled(rect.center(), diameter / 2.0, theme.tint(Tint::Blue));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph(Symbol::Mic),
                egui::FontId::proportional(size::LARGE),
                theme.tint(Tint::White),
            );
            if response.clicked() {
                tracing::debug!("Voice search pressed");
            }
        });
}
