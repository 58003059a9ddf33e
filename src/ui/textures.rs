//! Upload der dekodierten Bild-Assets als egui-Texturen.

use image::GenericImageView;

use crate::core::{AppAssets, WineColor};

/// GPU-Texturen der Bild-Assets.
pub struct AppTextures {
    /// Kartenraster
    pub map: egui::TextureHandle,
    /// Native Größe des Kartenrasters in Pixeln
    pub map_size: egui::Vec2,
    /// Flaschen-Icon Tinto
    pub tinto: egui::TextureHandle,
    /// Flaschen-Icon Blanco
    pub blanco: egui::TextureHandle,
    /// Seitenverhältnis der Flaschen-Icons (Höhe / Breite)
    pub bottle_aspect: f32,
}

impl AppTextures {
    /// Lädt alle Assets als Texturen in den egui-Kontext.
    pub fn upload(ctx: &egui::Context, assets: &AppAssets) -> Self {
        let (map_width, map_height) = assets.map_size();
        let (bottle_width, bottle_height) = assets.tinto.dimensions();

        Self {
            map: upload_texture(ctx, "mapa_espana", &assets.map),
            map_size: egui::Vec2::new(map_width as f32, map_height as f32),
            tinto: upload_texture(ctx, "botella_tinto", &assets.tinto),
            blanco: upload_texture(ctx, "botella_blanco", &assets.blanco),
            bottle_aspect: bottle_height as f32 / bottle_width as f32,
        }
    }

    /// Flaschen-Textur für eine Weinfarbe.
    pub fn bottle(&self, wine: WineColor) -> &egui::TextureHandle {
        match wine {
            WineColor::Tinto => &self.tinto,
            WineColor::Blanco => &self.blanco,
        }
    }
}

/// Konvertiert ein dekodiertes Bild und lädt es als Textur hoch.
fn upload_texture(
    ctx: &egui::Context,
    name: &str,
    image: &image::DynamicImage,
) -> egui::TextureHandle {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
}
