//! Zentrale Karten-Fläche: Raster plus Flaschen-Marker.

use glam::Vec2;

use super::textures::AppTextures;
use crate::app::AppState;
use crate::core::RasterBounds;

/// UV-Rechteck für vollflächige Texturen.
fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

/// Rendert die Karte mit allen sichtbaren Markern in das CentralPanel.
pub fn render_map_canvas(ctx: &egui::Context, state: &AppState, textures: &AppTextures) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let native = textures.map_size;

        // Raster eingepasst, Seitenverhältnis bleibt erhalten
        let ratio = (available.x / native.x).min(available.y / native.y);
        let drawn = native * ratio;
        let (rect, response) = ui.allocate_exact_size(drawn, egui::Sense::hover());

        let painter = ui.painter();
        painter.image(textures.map.id(), rect, full_uv(), egui::Color32::WHITE);

        let bounds = RasterBounds::SPAIN;
        let raster_size = Vec2::new(native.x, native.y);
        let marker_width = state.options.marker_width_px;
        let marker_size = egui::vec2(marker_width, marker_width * textures.bottle_aspect);

        let mut hovered: Option<&str> = None;
        for (name, marker) in state.board.iter() {
            // Pixel auf dem nativen Raster, dann mit dem Zeichen-Verhältnis skaliert
            let pixel = bounds.to_pixel(marker.position, raster_size) * ratio;
            let anchor = rect.min + egui::vec2(pixel.x, pixel.y);

            // Flaschenfuß steht auf der Position (Pin-Anker unten mittig)
            let icon_rect = egui::Rect::from_min_size(
                anchor - egui::vec2(marker_size.x / 2.0, marker_size.y),
                marker_size,
            );
            painter.image(
                textures.bottle(marker.wine).id(),
                icon_rect,
                full_uv(),
                egui::Color32::WHITE,
            );

            if response
                .hover_pos()
                .is_some_and(|pos| icon_rect.contains(pos))
            {
                hovered = Some(name);
            }
        }

        if let Some(name) = hovered {
            response.on_hover_text(name);
        }
    });
}
