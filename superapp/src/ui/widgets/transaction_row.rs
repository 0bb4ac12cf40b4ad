//! # Transaction Row
//!
//! Row in the Activity list. [`TransactionRow`] is the layout decision
//! (what lines go where) and is kept separate from the drawing so it can be
//! checked without a UI context.

use egui::{Align, Layout, RichText};
use crate::content::{Tint, TransactionItem};
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::icons::render_icon_badge;
use crate::utils::text::display_lines;

/// Shown in red above the title of a cancelled booking
pub const CANCELLED_LABEL: &str = "Sorry, driver cancelled";

/// Resolved lines of one transaction row
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// Red status line above the title
    pub status_label: Option<&'static str>,
    pub title: &'static str,
    pub subtitle_lines: Vec<&'static str>,
    /// Right-aligned; empty means the column is omitted
    pub amount_lines: Vec<&'static str>,
    pub amount_tint: Tint,
}

impl TransactionRow {
    pub fn from_item(item: &TransactionItem) -> Self {
        Self {
            status_label: item.cancelled.then_some(CANCELLED_LABEL),
            title: item.title,
            subtitle_lines: display_lines(item.subtitle),
            amount_lines: display_lines(item.amount),
            amount_tint: item.amount_tint,
        }
    }

    pub fn shows_amount(&self) -> bool {
        !self.amount_lines.is_empty()
    }
}

pub fn render_transaction_row(ui: &mut egui::Ui, item: &TransactionItem, theme: &Theme) {
    let row = TransactionRow::from_item(item);

    ui.horizontal_top(|ui| {
        render_icon_badge(ui, item.icon, item.tint, metrics::TRANSACTION_ICON_SIZE, theme);

        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            if row.shows_amount() {
                ui.with_layout(Layout::top_down(Align::Max), |ui| {
                    let color = theme.tint(row.amount_tint);
                    for line in &row.amount_lines {
                        ui.label(RichText::new(*line).strong().color(color));
                    }
                });
            }

            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                if let Some(label) = row.status_label {
                    ui.label(RichText::new(label).size(12.0).color(theme.colors.red));
                }
                ui.add(egui::Label::new(RichText::new(row.title).strong()).wrap());
                for line in &row.subtitle_lines {
                    ui.label(RichText::new(*line).size(12.0).color(theme.colors.secondary));
                }
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::activity::transactions;

    #[test]
    fn test_cancelled_row_shows_label_and_no_amount() {
        let items = transactions();
        let cancelled = items.iter().find(|t| t.cancelled).unwrap();
        let row = TransactionRow::from_item(cancelled);

        assert_eq!(row.status_label, Some(CANCELLED_LABEL));
        assert!(!row.shows_amount());
    }

    #[test]
    fn test_regular_row_has_no_status_label() {
        let row = TransactionRow::from_item(&transactions()[0]);
        assert_eq!(row.status_label, None);
        assert_eq!(row.amount_lines, vec!["S$6.20"]);
    }

    #[test]
    fn test_multi_line_amount_and_subtitle_split() {
        let row = TransactionRow::from_item(&transactions()[1]);
        assert_eq!(row.amount_lines, vec!["30.000đ", "+4 points"]);
        assert_eq!(row.subtitle_lines.len(), 2);
        assert_eq!(row.subtitle_lines[1], "17 Jun 2025, 19:23");
    }

    #[test]
    fn test_empty_amount_hides_column_even_when_not_cancelled() {
        let item = TransactionItem {
            amount: "",
            cancelled: false,
            ..transactions()[0].clone()
        };
        assert!(!TransactionRow::from_item(&item).shows_amount());
    }
}
