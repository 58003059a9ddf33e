//! Filter-Leiste mit den vier Sammel-Buttons.
//!
//! Die Button-Beschriftungen stammen aus der ursprünglichen Anwendung.

use crate::app::{AppIntent, AppState};
use crate::core::WineColor;

/// Rendert die Filter-Leiste und gibt erzeugte Events zurück.
pub fn render_filter_bar(ctx: &egui::Context, _state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("filter_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let tinto_btn = egui::Button::new(egui::RichText::new("Du rouge!").color(egui::Color32::WHITE))
                .fill(egui::Color32::from_rgb(140, 20, 40));
            if ui.add(tinto_btn).clicked() {
                events.push(AppIntent::WineFilterRequested {
                    wine: WineColor::Tinto,
                });
            }

            let blanco_btn = egui::Button::new(egui::RichText::new("Du blanc!").color(egui::Color32::BLACK))
                .fill(egui::Color32::from_rgb(235, 215, 120));
            if ui.add(blanco_btn).clicked() {
                events.push(AppIntent::WineFilterRequested {
                    wine: WineColor::Blanco,
                });
            }

            ui.separator();

            let all_btn = egui::Button::new(
                egui::RichText::new("À BOIRE!!!").color(egui::Color32::WHITE).strong(),
            )
            .fill(egui::Color32::from_rgb(30, 60, 160));
            if ui.add(all_btn).clicked() {
                events.push(AppIntent::ShowAllRequested);
            }

            let none_btn = egui::Button::new(egui::RichText::new("Plus soif...").color(egui::Color32::WHITE))
                .fill(egui::Color32::BLACK);
            if ui.add(none_btn).clicked() {
                events.push(AppIntent::HideAllRequested);
            }
        });
    });

    events
}
