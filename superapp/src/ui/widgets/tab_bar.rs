//! # Bottom Tab Bar
//!
//! One button per destination. After scrolling down the bar collapses to the
//! selected tab's glyph; pressing it brings the full bar back.

use egui::RichText;
use crate::app::{AppLike, AppState, Tab};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{glyph, size};

/// Tabs drawn for the current bar state
pub fn visible_tabs(current: Tab, minimized: bool) -> Vec<Tab> {
    if minimized {
        vec![current]
    } else {
        Tab::all().to_vec()
    }
}

fn tab_button(tab: Tab, selected: bool, minimized: bool, theme: &Theme) -> egui::Button<'static> {
    let color = if selected { theme.colors.accent } else { theme.colors.secondary };
    let text = if minimized {
        RichText::new(glyph(tab.glyph())).size(size::LARGE)
    } else {
        RichText::new(format!("{}\n{}", glyph(tab.glyph()), tab.title())).size(size::SMALL)
    };
    egui::Button::new(text.color(color)).frame(false)
}

pub fn render_tab_bar(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let tabs = visible_tabs(state.current_tab, state.tab_bar_minimized);

    if state.tab_bar_minimized {
        ui.horizontal_centered(|ui| {
            let tab = state.current_tab;
            if ui.add(tab_button(tab, true, true, theme)).on_hover_text(tab.title()).clicked() {
                app.handle_tab_change(tab);
            }
        });
        return;
    }

    ui.columns(tabs.len(), |columns| {
        for (column, tab) in columns.iter_mut().zip(tabs) {
            column.vertical_centered(|ui| {
                let selected = tab == state.current_tab;
                if ui.add(tab_button(tab, selected, false, theme)).clicked() {
                    app.handle_tab_change(tab);
                }
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_bar_shows_all_tabs() {
        assert_eq!(visible_tabs(Tab::Activity, false), Tab::all().to_vec());
    }

    #[test]
    fn test_minimized_bar_shows_only_selected() {
        assert_eq!(visible_tabs(Tab::Search, true), vec![Tab::Search]);
    }
}
