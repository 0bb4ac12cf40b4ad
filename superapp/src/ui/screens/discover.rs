//! Discover screen: a centered placeholder label.

use egui::RichText;
use crate::app::AppState;
use crate::ui::widgets::layouts::render_centered;

pub const PLACEHOLDER: &str = "Discover";

pub fn render(ui: &mut egui::Ui, _state: &AppState) {
    render_centered(ui, |ui| {
        ui.label(RichText::new(PLACEHOLDER).size(17.0));
    });
}
