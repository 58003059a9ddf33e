//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::WineColor;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Regionen: {}", state.catalog.len()));

            ui.separator();

            ui.label(format!(
                "Sichtbar: {} (Tinto: {}, Blanco: {})",
                state.board.shown_count(),
                state.board.shown_count_of(WineColor::Tinto),
                state.board.shown_count_of(WineColor::Blanco)
            ));

            if let Some(ref msg) = state.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}
