//! Laden der Bild-Assets beim Programmstart.

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView};

use crate::shared::AppOptions;

/// Beim Start dekodierte Bild-Assets: Kartenraster und Flaschen-Icons.
pub struct AppAssets {
    /// Kartenraster von Spanien
    pub map: DynamicImage,
    /// Flaschen-Icon für Tinto-Regionen
    pub tinto: DynamicImage,
    /// Flaschen-Icon für Blanco-Regionen
    pub blanco: DynamicImage,
}

impl AppAssets {
    /// Lädt alle Assets von den in den Optionen hinterlegten Pfaden.
    ///
    /// Fehlende oder nicht dekodierbare Dateien brechen den Start mit
    /// Kontext-Fehler ab (fail-fast, kein Retry).
    pub fn load(options: &AppOptions) -> Result<Self> {
        Ok(Self {
            map: load_image(&options.map_image_path)?,
            tinto: load_image(&options.tinto_icon_path)?,
            blanco: load_image(&options.blanco_icon_path)?,
        })
    }

    /// Native Pixelgröße des Kartenrasters.
    pub fn map_size(&self) -> (u32, u32) {
        self.map.dimensions()
    }
}

/// Lädt und dekodiert eine einzelne Bilddatei.
fn load_image(path: &str) -> Result<DynamicImage> {
    let image = image::open(path).with_context(|| format!("Bild-Asset nicht ladbar: {}", path))?;
    let (width, height) = image.dimensions();
    log::info!("Asset geladen: '{}' ({}x{} Pixel)", path, width, height);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_fails_with_path_in_context() {
        let err = load_image("assets/gibt_es_nicht.png").unwrap_err();
        assert!(format!("{:#}", err).contains("assets/gibt_es_nicht.png"));
    }

    #[test]
    fn test_shipped_assets_decode() {
        let options = AppOptions::default();
        let assets = AppAssets::load(&options).expect("mitgelieferte Assets müssen dekodierbar sein");

        let (map_w, map_h) = assets.map_size();
        assert!(map_w > 0 && map_h > 0);
        // Icons gleich groß, damit beide Weinfarben identisch platziert werden
        assert_eq!(assets.tinto.dimensions(), assets.blanco.dimensions());
    }
}
