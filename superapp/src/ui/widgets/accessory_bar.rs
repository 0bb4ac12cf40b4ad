//! # Bottom Accessory
//!
//! Trip status strip drawn above the tab bar on every destination. The ETA
//! column is only shown in the expanded placement.

use egui::{Align, Layout, RichText, Vec2};
use crate::app::{AccessoryPlacement, AppLike, AppState};
use crate::content::TripStatus;
use crate::ui::theme::{metrics, Theme};
use crate::ui::widgets::layouts::card_frame;
use crate::ui::widgets::remote_image::render_remote_image;

pub fn render_accessory_bar(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut impl AppLike,
    trip: &TripStatus,
    placement: AccessoryPlacement,
    theme: &Theme,
) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            render_remote_image(
                ui,
                state,
                app,
                trip.artwork_url,
                Vec2::splat(metrics::ACCESSORY_ARTWORK_SIZE),
                (metrics::ACCESSORY_ARTWORK_SIZE / 2.0) as u8,
                theme,
            );

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if placement.shows_eta() {
                    ui.with_layout(Layout::top_down(Align::Max), |ui| {
                        ui.label(RichText::new(trip.arrival_time).strong());
                        ui.label(RichText::new(trip.time_left).size(12.0).color(theme.colors.secondary));
                    });
                }

                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    ui.add(egui::Label::new(RichText::new(trip.headline).strong()).truncate());
                    ui.add(
                        egui::Label::new(
                            RichText::new(trip.destination).size(12.0).color(theme.colors.secondary),
                        )
                        .truncate(),
                    );
                });
            });
        });
    });
}
