//! Seitliches Panel mit einem Umschalt-Button pro DO-Region.

use crate::app::{AppIntent, AppState};

/// Rendert das Regions-Panel und gibt erzeugte Events zurück.
pub fn render_region_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("region_panel")
        .exact_width(state.options.region_panel_width)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Regionen (DO)");
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for region in state.catalog.iter() {
                    let shown = state.board.is_shown(region.name);
                    let button = egui::Button::new(region.name).selected(shown);

                    if ui
                        .add_sized(egui::vec2(ui.available_width(), 22.0), button)
                        .on_hover_text(region.wine.label())
                        .clicked()
                    {
                        events.push(AppIntent::RegionToggleRequested {
                            region: region.name,
                        });
                    }
                }
            });
        });

    events
}
